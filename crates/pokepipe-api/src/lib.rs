//! PokeAPI client for pokepipe.
//!
//! [`DefaultPokeApiClient`] implements `PokemonSourcePort`: it fetches one
//! listing page and then the detail payload of every listed item. Detail
//! fetches run concurrently under a fixed cap, and every request is retried a
//! fixed number of times with a fixed delay before the error surfaces.
//!
//! ```no_run
//! use pokepipe_api::{DefaultPokeApiClient, PokeApiConfig};
//! use pokepipe_core::PokemonSourcePort;
//! use std::time::Duration;
//!
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let config = PokeApiConfig::new()
//!     .with_timeout(Duration::from_secs(5))
//!     .with_max_concurrency(4);
//! let client = DefaultPokeApiClient::new(&config)?;
//! let listing = client.fetch_listing(20, 0).await?;
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]
// DefaultPokeApiClient is meant to be used through the PokemonSourcePort
// trait, not its internal generic structure
#![allow(private_interfaces)]

mod client;
mod config;
mod error;
mod http;
mod models;
mod port;
mod url;

// ============================================================================
// Public API
// ============================================================================

// Client
pub use client::DefaultPokeApiClient;

// Configuration
pub use config::PokeApiConfig;

// Silence unused dev-dependency warnings
#[cfg(test)]
use wiremock as _;
