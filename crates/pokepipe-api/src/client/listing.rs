//! Listing page fetch.

use pokepipe_core::ListingItem;
use tracing::debug;

use super::PokeApiClient;
use crate::error::ApiResult;
use crate::http::HttpBackend;
use crate::models::ListingPage;
use crate::url::build_listing_url;

impl<B: HttpBackend> PokeApiClient<B> {
    /// Fetch one listing page, preserving the API's order.
    pub(crate) async fn fetch_listing_page(
        &self,
        limit: u32,
        offset: u32,
    ) -> ApiResult<Vec<ListingItem>> {
        let url = build_listing_url(&self.config, limit, offset)?;
        let page: ListingPage = self.backend.get_json(&url).await?;

        debug!(
            items = page.results.len(),
            total = ?page.count,
            "Fetched listing page"
        );

        Ok(page
            .results
            .into_iter()
            .map(|r| ListingItem::new(r.name, r.url))
            .collect())
    }
}
