//! `hCard` lookup for a page.

use salvo::prelude::{Json, Text};
use salvo::{Depot, Request, Response, handler};
use serde_json::Value;

use hcardmap_core::constants::HCARD_LOOKUP_PARAM;
use hcardmap_engine::error::EngineError;
use hcardmap_engine::hcard::normalize::candidates;
use hcardmap_engine::hcard::{compact_card, select_representative};

use crate::error::{AppError, AppResult};
use crate::source::CardSource;
use crate::source_handler::get_source_from_depot;

/// ## Summary
/// Answers with the `hCard` representing the page named by the `uri` query
/// parameter.
///
/// The card is the one of the parser's candidates that points back at the
/// page, or the first one. Its `url` and `email` are reduced to one value.
///
/// ## Errors
/// 400 for a missing or non-http(s) locator, 404 if the page holds no
/// `hCard`, 502 if the parser fails or answers with something other than
/// cards, and 500 if no card source is configured.
#[handler]
#[tracing::instrument(skip_all, fields(path = %req.uri().path()))]
pub async fn lookup(req: &mut Request, res: &mut Response, depot: &Depot) {
    let locator = req.query::<String>(HCARD_LOOKUP_PARAM).unwrap_or_default();

    let result = match get_source_from_depot(depot) {
        Ok(source) => resolve(source.as_ref(), &locator).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(card) => {
            tracing::debug!(%locator, "Answering with representative hCard");
            res.render(Json(card));
        }
        Err(e) => {
            let status = e.status_code();
            if status.is_server_error() {
                tracing::error!(error = %e, %locator, "hCard lookup failed");
            } else {
                tracing::debug!(error = %e, %locator, "hCard lookup rejected");
            }
            res.status_code(status);
            res.render(Text::Plain(status.canonical_reason().unwrap_or("Error")));
        }
    }
}

async fn resolve(source: &dyn CardSource, locator: &str) -> AppResult<Value> {
    validate_locator(locator)?;

    let response = source.fetch(locator).await?.ok_or(EngineError::NotFound)?;
    let cards = candidates(&response);
    if let Some((index, other)) = cards.iter().enumerate().find(|(_, card)| !card.is_object()) {
        return Err(EngineError::malformed(
            format!("candidate[{index}]"),
            format!("expected a card, found {other}"),
        )
        .into());
    }
    let card = select_representative(&cards, locator).ok_or(EngineError::NotFound)?;

    Ok(compact_card(card))
}

/// Only absolute http(s) URLs are forwarded to the parser.
fn validate_locator(locator: &str) -> AppResult<()> {
    match reqwest::Url::parse(locator) {
        Ok(url) if matches!(url.scheme(), "http" | "https") && url.has_host() => Ok(()),
        _ => Err(AppError::InvalidTarget(locator.to_owned())),
    }
}
