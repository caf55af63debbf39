// In memory implementation of the SettingsStore port.
//
// Purpose
// - Support handler tests and local development without a database.
//
// Responsibilities
// - Hold the singleton document behind a lock and swap it whole on replace.
// - Serve the host defaults until the first replace.
// - Offer an offline toggle so failure paths can be tested.

use tokio::sync::RwLock;

use crate::core::account_policy::settings::AccountSettings;
use crate::core::ports::{SettingsStore, SettingsStoreError};

pub struct InMemorySettingsStore {
    inner: RwLock<AccountSettings>,
    offline: bool,
}

impl InMemorySettingsStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(AccountSettings::default()),
            offline: false,
        }
    }

    pub fn toggle_offline(&mut self) {
        self.offline = !self.offline;
    }
}

impl Default for InMemorySettingsStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl SettingsStore for InMemorySettingsStore {
    async fn load(&self) -> Result<AccountSettings, SettingsStoreError> {
        if self.offline {
            return Err(SettingsStoreError::Backend(
                "settings store offline".to_string(),
            ));
        }
        Ok(self.inner.read().await.clone())
    }

    async fn replace(&self, settings: AccountSettings) -> Result<(), SettingsStoreError> {
        if self.offline {
            return Err(SettingsStoreError::Backend(
                "settings store offline".to_string(),
            ));
        }
        *self.inner.write().await = settings;
        Ok(())
    }
}
