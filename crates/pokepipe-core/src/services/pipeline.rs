//! Pipeline service - sequences fetch, transform and load for one run.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::domain::{CanonicalRecord, ListingItem};
use crate::ports::{PipelineError, PokemonSourcePort, PokemonStorePort};
use crate::transform::transform_batch;

/// Outcome of one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Number of items in the listing page.
    pub requested: usize,
    /// Number of records persisted by the load.
    pub loaded: usize,
}

/// Orchestrates one extract/transform/load run.
///
/// Errors from any stage propagate unchanged; the service does no recovery.
pub struct PipelineService {
    source: Arc<dyn PokemonSourcePort>,
    store: Arc<dyn PokemonStorePort>,
}

impl PipelineService {
    /// Create a new pipeline service.
    pub fn new(source: Arc<dyn PokemonSourcePort>, store: Arc<dyn PokemonStorePort>) -> Self {
        Self { source, store }
    }

    /// Fetch `limit` items starting at `offset`, normalize them and load them.
    pub async fn run(&self, limit: u32, offset: u32) -> Result<RunSummary, PipelineError> {
        validate_limit(limit)?;
        info!(limit, offset, "Starting pipeline run");

        self.store.ensure_schema().await?;

        let (listing, batch) = self.extract_and_transform(limit, offset).await?;

        debug!(records = batch.len(), "Loading batch");
        let loaded = self.store.load_batch(&batch).await?;

        let summary = RunSummary {
            requested: listing.len(),
            loaded,
        };
        info!(
            requested = summary.requested,
            loaded = summary.loaded,
            "Pipeline run complete"
        );
        Ok(summary)
    }

    /// Fetch and normalize without touching the store.
    pub async fn extract_transform(
        &self,
        limit: u32,
        offset: u32,
    ) -> Result<Vec<CanonicalRecord>, PipelineError> {
        validate_limit(limit)?;
        let (_, batch) = self.extract_and_transform(limit, offset).await?;
        Ok(batch)
    }

    /// Create the schema if missing.
    pub async fn ensure_schema(&self) -> Result<(), PipelineError> {
        self.store.ensure_schema().await.map_err(PipelineError::from)
    }

    /// Drop every table and its data.
    pub async fn wipe(&self) -> Result<(), PipelineError> {
        self.store.wipe().await.map_err(PipelineError::from)
    }

    async fn extract_and_transform(
        &self,
        limit: u32,
        offset: u32,
    ) -> Result<(Vec<ListingItem>, Vec<CanonicalRecord>), PipelineError> {
        let listing = self.source.fetch_listing(limit, offset).await?;
        debug!(items = listing.len(), "Fetched listing");

        let targets = detail_targets(&listing);
        let payloads = self.source.fetch_details(&targets).await?;
        debug!(payloads = payloads.len(), "Fetched details");

        let batch = transform_batch(&payloads)?;
        Ok((listing, batch))
    }
}

/// Detail fetch targets for a listing, in listing order.
fn detail_targets(listing: &[ListingItem]) -> Vec<String> {
    listing
        .iter()
        .map(|item| item.detail_target().to_string())
        .collect()
}

fn validate_limit(limit: u32) -> Result<(), PipelineError> {
    if limit == 0 {
        return Err(PipelineError::Validation(
            "limit must be a positive integer".to_string(),
        ));
    }
    Ok(())
}
