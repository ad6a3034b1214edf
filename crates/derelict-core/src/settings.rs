//! Runtime settings loaded from a content pack's `config/` folder.

use std::collections::BTreeMap;

use crate::error::{CoreError, CoreResult};

/// Key of the mandatory starting-room setting.
pub const STARTING_ROOM: &str = "startingRoom";
/// Key of the optional introduction text.
pub const INTRODUCTION: &str = "introduction";
/// Key of the optional victory text.
pub const GAME_COMPLETE_TEXT: &str = "gameCompleteText";
/// Key of the clear-screen flag.
pub const CLEAR_SCREEN: &str = "clearScreen";
/// Key of the coloured-output flag.
pub const COLOURS: &str = "colours";
/// Key of the command alias table.
pub const COMMAND_ALIASES: &str = "commandAliases";

/// String-to-string settings. Absent keys read as false.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    values: BTreeMap<String, String>,
}

impl Settings {
    /// Create empty settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a value. Used while loading.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// Get a raw value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Read a boolean flag: true only if the value is `true`, ignoring ASCII case.
    pub fn flag(&self, key: &str) -> bool {
        self.get(key)
            .is_some_and(|v| v.trim().eq_ignore_ascii_case("true"))
    }

    /// Change an existing setting. Unknown keys are rejected.
    pub fn set(&mut self, key: &str, value: impl Into<String>) -> CoreResult<()> {
        match self.values.get_mut(key) {
            Some(slot) => {
                *slot = value.into();
                Ok(())
            }
            None => Err(CoreError::SettingNotFound(key.to_string())),
        }
    }

    /// Iterate over all settings in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iter_in_key_order() {
        let mut settings = Settings::new();
        settings.insert(STARTING_ROOM, "Entrance");
        settings.insert(COLOURS, "true");
        let pairs: Vec<_> = settings.iter().collect();
        assert_eq!(pairs, vec![(COLOURS, "true"), (STARTING_ROOM, "Entrance")]);
    }

    #[test]
    fn flags_default_false() {
        let mut settings = Settings::new();
        assert!(!settings.flag(COLOURS));
        settings.insert(COLOURS, "TRUE");
        assert!(settings.flag(COLOURS));
        settings.insert(CLEAR_SCREEN, "yes");
        assert!(!settings.flag(CLEAR_SCREEN));
    }

    #[test]
    fn set_only_existing_keys() {
        let mut settings = Settings::new();
        settings.insert(CLEAR_SCREEN, "false");
        settings.set(CLEAR_SCREEN, "true").unwrap();
        assert!(settings.flag(CLEAR_SCREEN));

        let err = settings.set("volume", "11").unwrap_err();
        assert!(matches!(err, CoreError::SettingNotFound(k) if k == "volume"));
        assert_eq!(settings.get("volume"), None);
    }
}
