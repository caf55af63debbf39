// Shared test fixture for the ApplyAccountSettings command.
// Defaults come from a JSON file so unit tests and transport tests start from
// the same submission shape.

use std::fs;

use serde::Deserialize;

use crate::application::command_handlers::apply_settings_handler::ApplyAccountSettings;

// JSON -> DTO (transport shape)
#[derive(Debug, Clone, Deserialize)]
pub struct ApplyAccountSettingsDto {
    pub registration_mode: String,
    pub verification_mode: String,
}

pub struct ApplyAccountSettingsBuilder {
    inner: ApplyAccountSettings,
}

impl Default for ApplyAccountSettingsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl ApplyAccountSettingsBuilder {
    pub fn new() -> Self {
        let json_str = fs::read_to_string(
            "./src/test_support/fixtures/commands/json/apply_account_settings.json",
        )
        .unwrap();
        let dto: ApplyAccountSettingsDto = serde_json::from_str(&json_str).unwrap();

        Self {
            inner: ApplyAccountSettings {
                registration_mode: dto.registration_mode,
                verification_mode: dto.verification_mode,
            },
        }
    }

    pub fn registration_mode(mut self, v: impl Into<String>) -> Self {
        self.inner.registration_mode = v.into();
        self
    }

    pub fn verification_mode(mut self, v: impl Into<String>) -> Self {
        self.inner.verification_mode = v.into();
        self
    }

    pub fn build(self) -> ApplyAccountSettings {
        self.inner
    }
}
