use thiserror::Error;

use crate::core::account_policy::modes::InvalidModeError;
use crate::core::ports::SettingsStoreError;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    InvalidMode(#[from] InvalidModeError),

    #[error(transparent)]
    Store(#[from] SettingsStoreError),
}
