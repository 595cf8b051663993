// Settings module
// Per-user UI preferences persisted across sessions

/// UI preferences that survive a restart.
///
/// The active view mode is remembered the same way the calendar remembers it
/// between visits; everything else about the cursor is session-local.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Active view mode: "Month", "Week", "Day" or "Year".
    pub current_view: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            current_view: "Month".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.current_view, "Month");
    }
}
