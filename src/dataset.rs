//! Bundled drug summary dataset
//!
//! Pre-computed social-media summaries shipped with the binary and loaded
//! once at startup. Lookups never touch the network.

mod store;
mod types;

pub use store::SummaryStore;
pub use types::{DatasetMetadata, DrugSummary, PostExamples, SentimentAverages, SummaryDataset};
