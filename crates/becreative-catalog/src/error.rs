//! Error types for catalog validation.

use thiserror::Error;

/// Errors raised when a catalog table breaks its invariants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// Two entries in the same table share a display name.
    #[error("duplicate entry `{name}` in catalog table `{table}`")]
    DuplicateName {
        /// Table the duplicate was found in.
        table: &'static str,
        /// Offending display name.
        name: &'static str,
    },
    /// A table that must carry content is empty.
    #[error("catalog table `{table}` is empty")]
    EmptyTable {
        /// Table name.
        table: &'static str,
    },
}

/// Convenience alias for catalog results.
pub type CatalogResult<T> = Result<T, CatalogError>;
