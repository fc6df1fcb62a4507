//! Keyboard input mapping
//!
//! The game consumes exactly two logical actions. Physical keys are matched
//! by `KeyboardEvent.code` so the binding is layout independent.

use serde::{Deserialize, Serialize};

/// Logical actions the loop controller understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputAction {
    /// Upward impulse (ignored once the round is over)
    Flap,
    /// Start a new round (ignored while playing)
    Restart,
}

/// Key code bindings for the two actions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    pub flap: String,
    pub restart: String,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            flap: "Space".to_string(),
            restart: "KeyR".to_string(),
        }
    }
}

impl KeyBindings {
    /// Resolve a key code; anything unbound is ignored
    pub fn action_for(&self, code: &str) -> Option<InputAction> {
        if code == self.flap {
            Some(InputAction::Flap)
        } else if code == self.restart {
            Some(InputAction::Restart)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bindings() {
        let keys = KeyBindings::default();
        assert_eq!(keys.action_for("Space"), Some(InputAction::Flap));
        assert_eq!(keys.action_for("KeyR"), Some(InputAction::Restart));
        assert_eq!(keys.action_for("KeyX"), None);
        assert_eq!(keys.action_for("space"), None);
    }

    #[test]
    fn test_custom_bindings() {
        let keys = KeyBindings {
            flap: "ArrowUp".to_string(),
            restart: "Enter".to_string(),
        };
        assert_eq!(keys.action_for("ArrowUp"), Some(InputAction::Flap));
        assert_eq!(keys.action_for("Enter"), Some(InputAction::Restart));
        assert_eq!(keys.action_for("Space"), None);
    }
}
