//! Error types for the adapter.

use thiserror::Error;

pub type Result<T = (), E = StoreError> = std::result::Result<T, E>;

/// Faults raised by the underlying registry. These never cross the adapter
/// boundary; operations degrade to `None`/`false`/`0` after reporting.
#[derive(Error, Debug, Clone)]
pub enum StoreError {
    #[error("Failed to open registry key: {0}")]
    Open(String),

    #[error("Failed to read registry value: {0}")]
    Read(String),

    #[error("Failed to write registry value: {0}")]
    Write(String),

    #[error("Failed to delete registry value: {0}")]
    DeleteValue(String),

    #[error("Failed to delete registry key tree: {0}")]
    DeleteTree(String),

    #[error("Failed to query registry key info: {0}")]
    Query(String),
}

impl StoreError {
    pub fn to_user_string(&self) -> String {
        self.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_underlying_fault() {
        let err = StoreError::Write("access is denied".into());
        assert_eq!(
            err.to_user_string(),
            "Failed to write registry value: access is denied"
        );
    }
}
