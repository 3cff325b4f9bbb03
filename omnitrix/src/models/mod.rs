mod alien;
mod analytics;
mod status;

pub use alien::*;
pub use analytics::*;
pub use status::ApiStatus;
