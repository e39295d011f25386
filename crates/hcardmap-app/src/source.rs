//! Where the proxy gets parsed `hCards` from.

use std::future::Future;
use std::pin::Pin;

use reqwest::{Client, Url};
use serde_json::Value;

use hcardmap_core::config::UpstreamConfig;
use hcardmap_core::constants::UPSTREAM_LOOKUP_PARAM;
use hcardmap_core::error::CoreError;

use crate::error::{AppError, AppResult};

/// A service that parses the page at a locator into `hCard` JSON.
pub trait CardSource: Send + Sync {
    /// ## Summary
    /// Fetches the parsed `hCards` of the page at `locator`.
    ///
    /// Returns `Ok(None)` if the source knows no record for the page.
    ///
    /// ## Errors
    /// Returns an error if the source cannot be reached or answers with
    /// something other than JSON.
    fn fetch<'a>(
        &'a self,
        locator: &'a str,
    ) -> Pin<Box<dyn Future<Output = AppResult<Option<Value>>> + Send + 'a>>;
}

/// HTTP client for an external microformat parser.
#[derive(Debug, Clone)]
pub struct ParserService {
    client: Client,
    endpoint: Url,
}

impl ParserService {
    /// ## Summary
    /// Creates a client for the configured parser endpoint.
    ///
    /// ## Errors
    /// Returns an error if the endpoint is not a URL or the HTTP client
    /// cannot be built.
    pub fn new(config: &UpstreamConfig) -> AppResult<Self> {
        let endpoint = Url::parse(&config.parser_url).map_err(|e| {
            CoreError::ConfigError(format!("invalid upstream.parser_url '{}': {e}", config.parser_url))
        })?;
        let client = Client::builder().timeout(config.timeout()).build()?;

        Ok(Self { client, endpoint })
    }

    /// The request URL for `locator`.
    #[must_use]
    pub fn request_url(&self, locator: &str) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair(UPSTREAM_LOOKUP_PARAM, locator);
        url
    }
}

impl CardSource for ParserService {
    #[tracing::instrument(skip(self))]
    fn fetch<'a>(
        &'a self,
        locator: &'a str,
    ) -> Pin<Box<dyn Future<Output = AppResult<Option<Value>>> + Send + 'a>> {
        Box::pin(async move {
            let url = self.request_url(locator);
            tracing::debug!(%url, "Querying parser service");

            let response = self.client.get(url).send().await?;
            let status = response.status();
            if status == reqwest::StatusCode::NOT_FOUND {
                return Ok(None);
            }
            if !status.is_success() {
                return Err(AppError::UpstreamStatus(status.as_u16()));
            }

            let body: Value = response.json().await?;
            Ok(Some(body))
        })
    }
}
