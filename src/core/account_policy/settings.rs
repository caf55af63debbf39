// Persisted account settings.
//
// Purpose
// - AccountNotificationSettings: the three flags controlling registration email
//   traffic (verification mail, admin pending-approval mail, user welcome mail).
// - AccountSettings: the site-wide singleton document holding the selected modes
//   and the flags derived from them.
//
// Notes
// - The document is replaced whole on every admin submission. Readers never see
//   a mix of old and new flags.
// - updated_at is epoch milliseconds, None until the first admin submission.

use serde::{Deserialize, Serialize};

use crate::core::account_policy::modes::{RegistrationMode, VerificationMode};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountNotificationSettings {
    /// Send a verification mail before the account becomes usable.
    pub verify_email_on_registration: bool,
    /// Mail administrators when a registration awaits approval.
    pub notify_admin_on_pending_approval: bool,
    /// Mail the user when the account is usable without approval.
    pub notify_user_on_immediate_approval: bool,
}

impl Default for AccountNotificationSettings {
    fn default() -> Self {
        // The host framework ships with all registration mails enabled.
        Self {
            verify_email_on_registration: true,
            notify_admin_on_pending_approval: true,
            notify_user_on_immediate_approval: true,
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountSettings {
    pub registration_mode: RegistrationMode,
    pub verification_mode: VerificationMode,
    pub notifications: AccountNotificationSettings,
    pub updated_at: Option<i64>,
}

#[cfg(test)]
mod account_settings_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn it_should_default_to_the_host_mail_policy() {
        let settings = AccountSettings::default();
        assert_eq!(settings.registration_mode, RegistrationMode::Open);
        assert_eq!(settings.verification_mode, VerificationMode::EmailLink);
        assert!(settings.notifications.verify_email_on_registration);
        assert!(settings.notifications.notify_admin_on_pending_approval);
        assert!(settings.notifications.notify_user_on_immediate_approval);
        assert_eq!(settings.updated_at, None);
    }
}
