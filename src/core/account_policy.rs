// This module groups the account policy domain components.
//
// Structure
// - modes.rs: the two admin-selected mode enums and their wire-value parsing
// - settings.rs: the notification flag triple and the persisted settings document
// - derive.rs: pure derivation from the selected modes to the notification flags
//
// Boundaries
// - No input or output anywhere in this tree. Keep it framework-free.

pub mod derive;
pub mod modes;
pub mod settings;
