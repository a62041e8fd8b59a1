//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `SurveyReader` - Loads the authored survey definition
//! - `ResponseReader` - Lists collected responses

mod survey_store;

pub use survey_store::{ResponseReader, StoreError, SurveyReader};
