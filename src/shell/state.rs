use std::sync::Arc;

use crate::adapters::in_memory::in_memory_settings_store::InMemorySettingsStore;
use crate::application::command_handlers::apply_settings_handler::ApplyAccountSettingsHandler;

#[derive(Clone)]
pub struct AppState {
    pub settings_store: Arc<InMemorySettingsStore>,
    pub apply_handler: Arc<ApplyAccountSettingsHandler<InMemorySettingsStore>>,
}

impl AppState {
    pub fn in_memory() -> Self {
        let settings_store = Arc::new(InMemorySettingsStore::new());
        let apply_handler = Arc::new(ApplyAccountSettingsHandler::new(settings_store.clone()));
        Self {
            settings_store,
            apply_handler,
        }
    }
}
