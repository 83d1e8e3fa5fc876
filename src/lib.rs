//! Look up countries in the REST Countries directory, cache the answers
//! locally and keep a persisted list of favourite country names.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod presentation;
pub mod state;

pub use application::lookup::{handle_search, SearchOutcome};
pub use domain::error::ExplorerError;
pub use domain::model::CountryRecord;
pub use state::AppState;
