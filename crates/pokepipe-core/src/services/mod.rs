//! Core services.
//!
//! Services orchestrate the ports. They hold `Arc<dyn Port>` handles and are
//! constructed at the adapter's composition root.

mod catalog_service;
mod pipeline;

pub use catalog_service::CatalogService;
pub use pipeline::{PipelineService, RunSummary};
