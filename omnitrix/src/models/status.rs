use serde::Serialize;

/// Reachability of the alien-statistics backend, as shown on the home page.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum ApiStatus {
    Online,
    #[default]
    Offline,
}

impl std::fmt::Display for ApiStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Online => write!(f, "ONLINE"),
            Self::Offline => write!(f, "OFFLINE"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_and_display_agree() {
        assert_eq!(ApiStatus::default(), ApiStatus::Offline);
        assert_eq!(
            serde_json::to_value(ApiStatus::Online).unwrap(),
            serde_json::json!("ONLINE")
        );
        assert_eq!(ApiStatus::Offline.to_string(), "OFFLINE");
    }
}
