// Composition root for the account settings service.
//
// Responsibilities
// - Instantiate concrete infrastructure implementations.
// - Wire implementations into the settings submission handler.
// - Expose the admin HTTP surface the settings form talks to.

pub mod http;
pub mod state;
