//! Possession token proving the right to delete a shortcut.

/// Edit key for a single shortcut.
///
/// Identity is the pair `(shortcut_name, value)`. The association with its
/// shortcut is by name only.
#[derive(Debug, Clone)]
pub struct ShortcutToken {
    shortcut_name: String,
    value: String,
}

impl ShortcutToken {
    pub fn new(shortcut_name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            shortcut_name: shortcut_name.into(),
            value: value.into(),
        }
    }

    pub fn shortcut_name(&self) -> &str {
        &self.shortcut_name
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Field-wise equality on shortcut name and value.
    ///
    /// Not constant-time: comparison time depends on the common prefix of
    /// the two values.
    pub fn matches(&self, other: &ShortcutToken) -> bool {
        self.shortcut_name == other.shortcut_name && self.value == other.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_identical_token() {
        let stored = ShortcutToken::new("abc123", "secretvalue");
        let candidate = ShortcutToken::new("abc123", "secretvalue");

        assert!(stored.matches(&candidate));
    }

    #[test]
    fn test_mismatch_on_value() {
        let stored = ShortcutToken::new("abc123", "secretvalue");
        let candidate = ShortcutToken::new("abc123", "secretvaluf");

        assert!(!stored.matches(&candidate));
    }

    #[test]
    fn test_mismatch_on_shortcut_name() {
        let stored = ShortcutToken::new("abc123", "secretvalue");
        let candidate = ShortcutToken::new("abc124", "secretvalue");

        assert!(!stored.matches(&candidate));
    }
}
