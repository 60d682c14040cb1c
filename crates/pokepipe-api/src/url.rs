//! URL construction helpers for the PokeAPI.
//!
//! Pure functions, so every request URL is built the same way.

use crate::error::{ApiError, ApiResult};
use crate::models::ApiConfig;
use url::Url;

/// Resource path for pokemon listings and details.
const POKEMON_RESOURCE: &str = "pokemon";

/// Append path segments to the base URL.
fn endpoint(base: &Url, segments: &[&str]) -> ApiResult<Url> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|()| ApiError::InvalidUrl(url::ParseError::RelativeUrlWithCannotBeABaseBase))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

/// Build the listing URL: `{base}/pokemon?limit=..&offset=..`.
pub fn build_listing_url(config: &ApiConfig, limit: u32, offset: u32) -> ApiResult<Url> {
    let mut url = endpoint(&config.base_url, &[POKEMON_RESOURCE])?;
    url.query_pairs_mut()
        .append_pair("limit", &limit.to_string())
        .append_pair("offset", &offset.to_string());
    Ok(url)
}

/// Build the detail URL for a target.
///
/// Absolute `http(s)` targets are used as given; anything else is treated as a
/// name or id under `{base}/pokemon/`.
pub fn build_detail_url(config: &ApiConfig, target: &str) -> ApiResult<Url> {
    if target.starts_with("http") {
        return Ok(Url::parse(target)?);
    }
    endpoint(&config.base_url, &[POKEMON_RESOURCE, target.trim_matches('/')])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PokeApiConfig;

    fn config(base: &str) -> ApiConfig {
        ApiConfig::from_public(&PokeApiConfig::new().with_base_url(base)).unwrap()
    }

    #[test]
    fn test_listing_url() {
        let url = build_listing_url(&config("https://pokeapi.co/api/v2"), 20, 40).unwrap();
        assert_eq!(
            url.as_str(),
            "https://pokeapi.co/api/v2/pokemon?limit=20&offset=40"
        );
    }

    #[test]
    fn test_detail_url_by_name() {
        let url = build_detail_url(&config("https://pokeapi.co/api/v2"), "bulbasaur").unwrap();
        assert_eq!(url.as_str(), "https://pokeapi.co/api/v2/pokemon/bulbasaur");
    }

    #[test]
    fn test_detail_url_by_id() {
        let url = build_detail_url(&config("http://127.0.0.1:9000/api/v2"), "25").unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:9000/api/v2/pokemon/25");
    }

    #[test]
    fn test_detail_url_absolute_target_is_kept() {
        let target = "https://pokeapi.co/api/v2/pokemon/2/";
        let url = build_detail_url(&config("http://localhost"), target).unwrap();
        assert_eq!(url.as_str(), target);
    }

    #[test]
    fn test_detail_url_escapes_segment() {
        let url = build_detail_url(&config("https://pokeapi.co/api/v2"), "mr mime").unwrap();
        assert_eq!(url.as_str(), "https://pokeapi.co/api/v2/pokemon/mr%20mime");
    }
}
