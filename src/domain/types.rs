//! Core configuration types - pure data structures with no dependencies.

use serde::{Deserialize, Serialize};

/// Top-level registry partition the store operates under. The store only
/// references the hive; it never creates or owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Hive {
    LocalMachine,
    CurrentUser,
}

impl Hive {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Hive::LocalMachine => "HKEY_LOCAL_MACHINE",
            Hive::CurrentUser => "HKEY_CURRENT_USER",
        }
    }
}

/// Where the store points and whether absorbed faults surface to the user.
///
/// Hive and subkey are explicit and fixed for the store's lifetime; there is
/// no ambient default derived from the running application.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    pub hive: Hive,
    pub subkey: String,
    #[serde(default = "default_notify")]
    pub notify_on_error: bool,
}

fn default_notify() -> bool {
    true
}

impl StoreConfig {
    pub fn new(hive: Hive, subkey: impl Into<String>) -> Self {
        Self {
            hive,
            subkey: subkey.into(),
            notify_on_error: true,
        }
    }

    /// Disable the user-facing notification on failure; operations still
    /// degrade to their sentinel results.
    #[must_use]
    pub fn silent(mut self) -> Self {
        self.notify_on_error = false;
        self
    }
}

/// Value names are case-insensitive in the registry; upper-case them before
/// use so logs and notification titles stay consistent.
#[must_use]
pub fn normalize_name(name: &str) -> String {
    name.to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notifications_default_on() {
        let config = StoreConfig::new(Hive::CurrentUser, r"Software\Test");
        assert!(config.notify_on_error);
        assert!(!config.silent().notify_on_error);
    }

    #[test]
    fn config_deserializes_without_notify_flag() {
        let config: StoreConfig =
            serde_json::from_str(r#"{"hive":"LocalMachine","subkey":"SOFTWARE\\App"}"#).unwrap();
        assert_eq!(config.hive, Hive::LocalMachine);
        assert_eq!(config.subkey, r"SOFTWARE\App");
        assert!(config.notify_on_error);
    }

    #[test]
    fn names_are_upper_cased() {
        assert_eq!(normalize_name("my_key"), "MY_KEY");
        assert_eq!(normalize_name("Already"), "ALREADY");
    }

    #[test]
    fn hive_display_names() {
        assert_eq!(Hive::LocalMachine.as_str(), "HKEY_LOCAL_MACHINE");
        assert_eq!(Hive::CurrentUser.as_str(), "HKEY_CURRENT_USER");
    }
}
