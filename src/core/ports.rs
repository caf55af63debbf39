// Ports define what the core needs from the outside world, without implementing it.
//
// Purpose
// - Describe the persisted settings store as a trait.
//
// Responsibilities
// - Keep the core independent of any database by coding against the trait.
// - The store holds one site-wide document; replace swaps it whole, so the
//   three notification flags can never be observed half-written.
//
// Boundaries
// - No concrete input or output here. Adapters implement this trait in the
//   adapters layer.
//
// Testing guidance
// - Provide in memory implementations for tests and local development.

use async_trait::async_trait;
use thiserror::Error;

use crate::core::account_policy::settings::AccountSettings;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SettingsStoreError {
    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait SettingsStore: Send + Sync {
    /// Current document, or the host defaults when nothing was written yet.
    async fn load(&self) -> Result<AccountSettings, SettingsStoreError>;

    /// Replace the document as one atomic write.
    async fn replace(&self, settings: AccountSettings) -> Result<(), SettingsStoreError>;
}
