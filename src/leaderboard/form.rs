//! Name entry on the game-over screen.

use super::client::validate_name;
use crate::core::constants::MAX_NAME_LEN;

#[derive(Debug, Clone, Default)]
pub struct NameEntry {
    pub name_input: String,
    /// Inline message under the field (validation or submission errors).
    pub message: Option<String>,
}

impl NameEntry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a character. Only letters, digits, space, `-` and `_` are
    /// accepted, up to the maximum name length.
    pub fn handle_char_input(&mut self, c: char) {
        let allowed = c.is_alphanumeric() || c == ' ' || c == '-' || c == '_';
        if allowed && self.name_input.chars().count() < MAX_NAME_LEN {
            self.name_input.push(c);
        }
    }

    pub fn handle_backspace(&mut self) {
        self.name_input.pop();
    }

    /// Validate for submission. On failure the message is set and `None`
    /// is returned.
    pub fn validated_name(&mut self) -> Option<String> {
        match validate_name(&self.name_input) {
            Ok(name) => {
                self.message = None;
                Some(name)
            }
            Err(message) => {
                self.message = Some(message);
                None
            }
        }
    }

    pub fn clear(&mut self) {
        self.name_input.clear();
        self.message = None;
    }
}
