//! The adapter itself - a thin wrapper over winreg addressing one subkey
//! path. Every call opens (or creates) the path, does its work, and drops the
//! handle before returning; nothing is cached across calls.
//!
//! Faults from the registry never escape: each operation absorbs them,
//! reports through the injected [`Notifier`] when enabled, and returns its
//! sentinel (`None`, `false`, `0`). A missing subkey path is benign, not a
//! fault.

use crate::domain::{normalize_name, Hive, StoreConfig, StoreError};
use crate::notify::{MessageBoxNotifier, Notifier, Severity};
use std::io;
use tracing::{debug, warn};
use winreg::enums::{HKEY_CURRENT_USER, HKEY_LOCAL_MACHINE, KEY_READ};
use winreg::types::ToRegValue;
use winreg::{RegKey, HKEY};

pub struct RegistryStore {
    config: StoreConfig,
    notifier: Box<dyn Notifier>,
}

impl RegistryStore {
    pub fn new(config: StoreConfig, notifier: Box<dyn Notifier>) -> Self {
        Self { config, notifier }
    }

    /// Store reporting failures through the native message box.
    pub fn with_message_box(config: StoreConfig) -> Self {
        Self::new(config, Box::new(MessageBoxNotifier))
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    fn hkey(&self) -> HKEY {
        match self.config.hive {
            Hive::LocalMachine => HKEY_LOCAL_MACHINE,
            Hive::CurrentUser => HKEY_CURRENT_USER,
        }
    }

    fn report(&self, err: &StoreError, title: &str) {
        warn!(
            hive = self.config.hive.as_str(),
            subkey = %self.config.subkey,
            %title,
            error = %err,
            "registry operation failed"
        );
        if self.config.notify_on_error {
            self.notifier
                .notify(&err.to_user_string(), title, Severity::Error);
        }
    }

    /// Read the named string value. `None` when the subkey path does not
    /// exist; faults on an existing path (missing value, wrong type, access
    /// denied) are reported and also degrade to `None`.
    pub fn read(&self, name: &str) -> Option<String> {
        let name = normalize_name(name);
        let title = format!("Reading registry {name}");

        let key = match RegKey::predef(self.hkey())
            .open_subkey_with_flags(&self.config.subkey, KEY_READ)
        {
            Ok(key) => key,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return None,
            Err(e) => {
                self.report(&StoreError::Open(e.to_string()), &title);
                return None;
            }
        };

        match key.get_value::<String, _>(&name) {
            Ok(value) => Some(value),
            Err(e) => {
                self.report(&StoreError::Read(e.to_string()), &title);
                None
            }
        }
    }

    /// Write any registry-storable scalar under the (normalized) name,
    /// creating the subkey path if absent.
    pub fn write<T: ToRegValue>(&self, name: &str, value: &T) -> bool {
        let name = normalize_name(name);
        let title = format!("Writing registry {name}");

        let result = RegKey::predef(self.hkey())
            .create_subkey(&self.config.subkey)
            .map_err(|e| StoreError::Open(e.to_string()))
            .and_then(|(key, _)| {
                key.set_value(&name, value)
                    .map_err(|e| StoreError::Write(e.to_string()))
            });

        match result {
            Ok(()) => {
                debug!(subkey = %self.config.subkey, value = %name, "registry value written");
                true
            }
            Err(e) => {
                self.report(&e, &title);
                false
            }
        }
    }

    /// Remove the named value. The entry not existing is success.
    pub fn delete_entry(&self, name: &str) -> bool {
        let name = normalize_name(name);
        let title = format!("Deleting registry value {name}");

        let key = match RegKey::predef(self.hkey()).create_subkey(&self.config.subkey) {
            Ok((key, _)) => key,
            Err(e) => {
                self.report(&StoreError::Open(e.to_string()), &title);
                return false;
            }
        };

        match key.delete_value(&name) {
            Ok(()) => {
                debug!(subkey = %self.config.subkey, value = %name, "registry value deleted");
                true
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => true,
            Err(e) => {
                self.report(&StoreError::DeleteValue(e.to_string()), &title);
                false
            }
        }
    }

    /// Recursively delete the subkey path and everything beneath it. The
    /// path not existing is success.
    pub fn delete_tree(&self) -> bool {
        let title = format!("Deleting registry tree {}", self.config.subkey);
        let root = RegKey::predef(self.hkey());

        match root.open_subkey(&self.config.subkey) {
            Ok(_) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => return true,
            Err(e) => {
                self.report(&StoreError::Open(e.to_string()), &title);
                return false;
            }
        }

        match root.delete_subkey_all(&self.config.subkey) {
            Ok(()) => {
                debug!(subkey = %self.config.subkey, "registry tree deleted");
                true
            }
            Err(e) => {
                self.report(&StoreError::DeleteTree(e.to_string()), &title);
                false
            }
        }
    }

    /// Number of immediate child keys under the path, 0 if the path does not
    /// exist or on fault.
    pub fn subkey_count(&self) -> usize {
        let title = format!("Counting subkeys of {}", self.config.subkey);
        self.key_info(&title)
            .map_or(0, |info| info.sub_keys as usize)
    }

    /// Number of values directly under the path, 0 if the path does not
    /// exist or on fault.
    pub fn value_count(&self) -> usize {
        let title = format!("Counting values of {}", self.config.subkey);
        self.key_info(&title).map_or(0, |info| info.values as usize)
    }

    fn key_info(&self, title: &str) -> Option<winreg::RegKeyMetadata> {
        let key = match RegKey::predef(self.hkey())
            .open_subkey_with_flags(&self.config.subkey, KEY_READ)
        {
            Ok(key) => key,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return None,
            Err(e) => {
                self.report(&StoreError::Open(e.to_string()), title);
                return None;
            }
        };

        match key.query_info() {
            Ok(info) => Some(info),
            Err(e) => {
                self.report(&StoreError::Query(e.to_string()), title);
                None
            }
        }
    }
}
