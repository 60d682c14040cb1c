//! Bounded concurrent detail fetch.

use futures_util::future::try_join_all;
use pokepipe_core::RawDetailPayload;
use tokio::sync::Semaphore;
use tracing::debug;

use super::PokeApiClient;
use crate::error::{ApiError, ApiResult};
use crate::http::HttpBackend;
use crate::url::build_detail_url;

impl<B: HttpBackend> PokeApiClient<B> {
    /// Fetch every target's detail payload.
    ///
    /// At most `max_concurrency` requests are in flight at once. Results are
    /// index-aligned with `targets`. The first failure cancels the remaining
    /// fetches and is returned; there are no partial results.
    pub(crate) async fn fetch_detail_payloads(
        &self,
        targets: &[String],
    ) -> ApiResult<Vec<RawDetailPayload>> {
        let urls = targets
            .iter()
            .map(|target| build_detail_url(&self.config, target))
            .collect::<ApiResult<Vec<_>>>()?;

        debug!(
            targets = urls.len(),
            max_concurrency = self.config.max_concurrency,
            "Fetching details"
        );

        let limiter = Semaphore::new(self.config.max_concurrency);
        let fetches = urls.iter().map(|url| {
            let limiter = &limiter;
            async move {
                let _permit = limiter.acquire().await?;
                let json: serde_json::Value = self.backend.get_json(url).await?;
                debug!(url = %url, "Fetched detail");
                Ok::<_, ApiError>(RawDetailPayload::new(json))
            }
        });

        try_join_all(fetches).await
    }
}
