use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Whether an application action launches or terminates the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Open,
    Close,
}

impl Default for Direction {
    fn default() -> Self {
        Direction::Open
    }
}

/// A resolved system action, serialized in the wire shape the frontend
/// submits back to `/system-control`: `{"type":"app",...}` or
/// `{"type":"web",...}`.
///
/// Produced fresh per request by the classifier; carries no identity beyond
/// one request/response round trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SystemAction {
    /// Launch or terminate a local application by executable image name.
    App {
        action: Direction,
        exe: String,
        name: String,
    },
    /// Open a URL with the default handler. `action` is always open; it
    /// stays on the wire for frontend compatibility and is tolerated absent
    /// on input.
    Web {
        #[serde(default)]
        action: Direction,
        url: String,
        name: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn app_action_wire_shape() {
        let action = SystemAction::App {
            action: Direction::Close,
            exe: "chrome.exe".to_string(),
            name: "chrome".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&action).unwrap(),
            json!({"type": "app", "action": "close", "exe": "chrome.exe", "name": "chrome"})
        );
    }

    #[test]
    fn web_action_wire_shape() {
        let action = SystemAction::Web {
            action: Direction::Open,
            url: "https://www.youtube.com".to_string(),
            name: "youtube".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&action).unwrap(),
            json!({"type": "web", "action": "open", "url": "https://www.youtube.com", "name": "youtube"})
        );
    }

    #[test]
    fn web_action_field_defaults_to_open_on_input() {
        let action: SystemAction = serde_json::from_value(json!({
            "type": "web",
            "url": "https://github.com",
            "name": "github"
        }))
        .unwrap();
        assert_eq!(
            action,
            SystemAction::Web {
                action: Direction::Open,
                url: "https://github.com".to_string(),
                name: "github".to_string(),
            }
        );
    }

    #[test]
    fn unknown_type_is_rejected() {
        let result = serde_json::from_value::<SystemAction>(json!({"type": "unknown"}));
        assert!(result.is_err());
    }

    #[test]
    fn round_trip_preserves_structure() {
        let action = SystemAction::App {
            action: Direction::Open,
            exe: "Spotify.exe".to_string(),
            name: "spotify".to_string(),
        };
        let encoded = serde_json::to_string(&action).unwrap();
        let decoded: SystemAction = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, action);
    }
}
