pub mod client;
pub mod importer;

pub use crate::domain::model::{ImportSummary, LinkOutcome, LinkRequest, LinkRow};
pub use crate::domain::ports::LinkService;
pub use crate::utils::error::Result;
