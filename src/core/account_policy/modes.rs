// Admin-selected modes for the account registration policy.
//
// Purpose
// - RegistrationMode: site-wide policy for how new accounts come into existence.
// - VerificationMode: whether identity confirmation happens via an emailed link
//   or via a password entered directly on the registration form.
//
// Responsibilities
// - Parse raw form values into the enums at the input boundary. Everything past
//   this boundary works with the enums and cannot see an invalid mode.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A submitted form value that is not one of the enumerated modes.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid {field} value: {value:?}")]
pub struct InvalidModeError {
    pub field: &'static str,
    pub value: String,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RegistrationMode {
    /// Visitors register themselves and the account is live immediately.
    #[default]
    Open,
    /// Visitors register themselves but an administrator must approve.
    RequireApproval,
    /// Only administrators create accounts.
    AdminOnly,
}

impl RegistrationMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            RegistrationMode::Open => "open",
            RegistrationMode::RequireApproval => "require-approval",
            RegistrationMode::AdminOnly => "admin-only",
        }
    }
}

impl fmt::Display for RegistrationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RegistrationMode {
    type Err = InvalidModeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "open" => Ok(RegistrationMode::Open),
            "require-approval" => Ok(RegistrationMode::RequireApproval),
            "admin-only" => Ok(RegistrationMode::AdminOnly),
            _ => Err(InvalidModeError {
                field: "registration_mode",
                value: value.to_string(),
            }),
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VerificationMode {
    /// The host default: the account is confirmed through an emailed link.
    #[default]
    EmailLink,
    /// The account sets its password on the registration form itself.
    PasswordAtRegistration,
}

impl VerificationMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            VerificationMode::EmailLink => "email-link",
            VerificationMode::PasswordAtRegistration => "password-at-registration",
        }
    }
}

impl fmt::Display for VerificationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VerificationMode {
    type Err = InvalidModeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "email-link" => Ok(VerificationMode::EmailLink),
            "password-at-registration" => Ok(VerificationMode::PasswordAtRegistration),
            _ => Err(InvalidModeError {
                field: "verification_mode",
                value: value.to_string(),
            }),
        }
    }
}
