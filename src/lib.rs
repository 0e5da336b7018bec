pub mod domain;
pub mod notify;
#[cfg(windows)]
pub mod store;

// Public, stable-ish API surface for consumers

pub use crate::domain::{Hive, Result, StoreConfig, StoreError};

pub use crate::notify::{Notifier, Severity, SilentNotifier};

#[cfg(windows)]
pub use crate::notify::MessageBoxNotifier;

#[cfg(windows)]
pub use crate::store::RegistryStore;

pub mod prelude {
    pub use crate::domain::{Hive, Result, StoreConfig, StoreError};
    #[cfg(windows)]
    pub use crate::notify::MessageBoxNotifier;
    pub use crate::notify::{Notifier, Severity, SilentNotifier};
    #[cfg(windows)]
    pub use crate::store::RegistryStore;
}
