use crate::models::Alien;

struct SampleAlien {
    id: &'static str,
    name: &'static str,
    image: &'static str,
    species: &'static str,
    stats: [u8; 6],
}

// strength, speed, intelligence, durability, power, combat
const SAMPLE_ALIENS: [SampleAlien; 8] = [
    SampleAlien {
        id: "1",
        name: "Rath",
        image: "assets/aliens/tiger.png",
        species: "Appoplexian",
        stats: [95, 70, 40, 85, 75, 98],
    },
    SampleAlien {
        id: "2",
        name: "Astrodactyl",
        image: "assets/aliens/eagle.png",
        species: "Pturbosaurian",
        stats: [55, 95, 65, 50, 85, 60],
    },
    SampleAlien {
        id: "3",
        name: "Squidstrictor",
        image: "assets/aliens/octopus.png",
        species: "Cephalod-ae",
        stats: [80, 45, 90, 70, 65, 75],
    },
    SampleAlien {
        id: "4",
        name: "Fasttrack",
        image: "assets/aliens/panther.png",
        species: "Citrakayah",
        stats: [65, 98, 60, 55, 50, 70],
    },
    SampleAlien {
        id: "5",
        name: "Blitzwolfer",
        image: "assets/aliens/wolf.png",
        species: "Loboan",
        stats: [75, 80, 70, 75, 80, 85],
    },
    SampleAlien {
        id: "6",
        name: "Terroranchula",
        image: "assets/aliens/scorpion.png",
        species: "Terroranchula",
        stats: [70, 65, 55, 90, 75, 80],
    },
    SampleAlien {
        id: "7",
        name: "Ssserpent",
        image: "assets/aliens/cobra.png",
        species: "Unknown",
        stats: [50, 75, 85, 45, 90, 65],
    },
    SampleAlien {
        id: "8",
        name: "Ripjaws",
        image: "assets/aliens/shark.png",
        species: "Piscciss Volann",
        stats: [85, 90, 50, 80, 70, 88],
    },
];

impl SampleAlien {
    fn to_alien(&self) -> Alien {
        let [strength, speed, intelligence, durability, power, combat] = self.stats;
        Alien {
            id: self.id.to_string(),
            name: self.name.to_string(),
            image: self.image.to_string(),
            species: Some(self.species.to_string()),
            strength,
            speed,
            intelligence,
            durability,
            power,
            combat,
        }
    }
}

/// The bundled offline dataset, in its fixed order.
pub fn sample_aliens() -> Vec<Alien> {
    SAMPLE_ALIENS.iter().map(SampleAlien::to_alien).collect()
}

pub fn find_sample(id: &str) -> Option<Alien> {
    SAMPLE_ALIENS
        .iter()
        .find(|sample| sample.id == id)
        .map(SampleAlien::to_alien)
}
