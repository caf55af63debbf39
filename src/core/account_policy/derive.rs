// Pure derivation from the selected policy modes to the notification flags.
//
// Purpose
// - Compute which registration mails stay enabled once password-at-registration
//   is active. With an open registration the account is usable the moment the
//   form is submitted, so no mail exchange is needed at all. With approval in
//   the picture mail is still the channel that communicates pending/approved
//   state, so everything stays on. Admin-created accounts keep the verification
//   mail available so an administrator can send credentials out.
//
// Responsibilities
// - Total over both enums: every mode pair produces a defined result.
// - Under the email-link default the engine must not interfere; it signals
//   PassThrough and the caller keeps whatever flags are already persisted.
// - Never perform input or output.

use crate::core::account_policy::modes::{RegistrationMode, VerificationMode};
use crate::core::account_policy::settings::AccountNotificationSettings;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Derivation {
    /// The host's own mail policy stays in force; nothing to write.
    PassThrough,
    /// Replace all three flags with the derived triple.
    Override(AccountNotificationSettings),
}

pub fn derive_notifications(
    registration_mode: RegistrationMode,
    verification_mode: VerificationMode,
) -> Derivation {
    match verification_mode {
        VerificationMode::EmailLink => Derivation::PassThrough,
        VerificationMode::PasswordAtRegistration => {
            let notifications = match registration_mode {
                RegistrationMode::Open => AccountNotificationSettings {
                    verify_email_on_registration: false,
                    notify_admin_on_pending_approval: false,
                    notify_user_on_immediate_approval: false,
                },
                RegistrationMode::RequireApproval => AccountNotificationSettings {
                    verify_email_on_registration: true,
                    notify_admin_on_pending_approval: true,
                    notify_user_on_immediate_approval: true,
                },
                RegistrationMode::AdminOnly => AccountNotificationSettings {
                    verify_email_on_registration: true,
                    notify_admin_on_pending_approval: false,
                    notify_user_on_immediate_approval: false,
                },
            };
            Derivation::Override(notifications)
        }
    }
}
