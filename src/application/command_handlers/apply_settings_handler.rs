// Settings submission handler orchestrates the write flow.
//
// Responsibilities
// - Parse the raw form values into the policy mode enums.
// - Load the current document from the settings store.
// - Call the derivation with the selected modes; keep the persisted flags when
//   it passes through.
// - Replace the document in one write and hand the persisted result back.

use std::sync::Arc;

use chrono::Utc;

use crate::application::errors::ApplicationError;
use crate::core::account_policy::derive::{Derivation, derive_notifications};
use crate::core::account_policy::modes::{RegistrationMode, VerificationMode};
use crate::core::account_policy::settings::AccountSettings;
use crate::core::ports::SettingsStore;

/// One admin settings-form submission, values still in wire form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplyAccountSettings {
    pub registration_mode: String,
    pub verification_mode: String,
}

pub struct ApplyAccountSettingsHandler<TStore>
where
    TStore: SettingsStore + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> ApplyAccountSettingsHandler<TStore>
where
    TStore: SettingsStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    #[tracing::instrument(skip(self), name = "account_settings.apply")]
    pub async fn handle(
        &self,
        command: ApplyAccountSettings,
    ) -> Result<AccountSettings, ApplicationError> {
        let registration_mode: RegistrationMode = command.registration_mode.parse()?;
        let verification_mode: VerificationMode = command.verification_mode.parse()?;

        let current = self.store.load().await?;

        let notifications = match derive_notifications(registration_mode, verification_mode) {
            Derivation::Override(notifications) => notifications,
            Derivation::PassThrough => current.notifications,
        };

        let next = AccountSettings {
            registration_mode,
            verification_mode,
            notifications,
            updated_at: Some(Utc::now().timestamp_millis()),
        };

        self.store.replace(next.clone()).await?;
        tracing::info!(
            registration_mode = %registration_mode,
            verification_mode = %verification_mode,
            "account settings replaced"
        );
        Ok(next)
    }
}
