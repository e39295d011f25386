//! Tests for the `hCard` lookup handler.

use std::future::Future;
use std::pin::Pin;

use salvo::http::StatusCode;
use salvo::test::{ResponseExt, TestClient};
use serde_json::{Value, json};

use crate::app::api::{HCARD_ROUTE_PREFIX, routes};
use crate::error::{AppError, AppResult};
use crate::source::CardSource;
use crate::source_handler::CardSourceHandler;

const PAGE: &str = "http://example.org/contact";
const ENCODED_PAGE: &str = "http%3A%2F%2Fexample.org%2Fcontact";

fn lookup_url(query: &str) -> String {
    format!("http://127.0.0.1:5800{HCARD_ROUTE_PREFIX}{query}")
}

fn lookup() -> String {
    lookup_url(&format!("?uri={ENCODED_PAGE}"))
}

/// Answers every fetch with a fixed upstream outcome.
#[derive(Clone)]
enum StubSource {
    Found(Value),
    Missing,
    Failing,
}

impl CardSource for StubSource {
    fn fetch<'a>(
        &'a self,
        _locator: &'a str,
    ) -> Pin<Box<dyn Future<Output = AppResult<Option<Value>>> + Send + 'a>> {
        Box::pin(async move {
            match self {
                Self::Found(value) => Ok(Some(value.clone())),
                Self::Missing => Ok(None),
                Self::Failing => Err(AppError::UpstreamStatus(500)),
            }
        })
    }
}

fn service(source: StubSource) -> salvo::Router {
    salvo::Router::new()
        .hoop(CardSourceHandler { source })
        .push(routes())
}

#[tokio::test]
async fn test_lookup_returns_representative_card() {
    let upstream = json!({
        "hcard": [
            {"fn": "Someone Else", "url": "http://example.org/other"},
            {"fn": "Max Mustermann", "url": ["http://elsewhere", PAGE], "email": ["a@b.c", "d@e.f"]}
        ]
    });

    let mut res = TestClient::get(lookup())
        .send(service(StubSource::Found(upstream)))
        .await;

    assert_eq!(res.status_code, Some(StatusCode::OK));
    let card: Value = res.take_json().await.unwrap();
    assert_eq!(
        card,
        json!({"fn": "Max Mustermann", "url": "http://elsewhere", "email": "a@b.c"})
    );
}

#[tokio::test]
async fn test_lookup_single_card_is_returned() {
    let upstream = json!({"fn": "Max Mustermann", "url": "http://example.org/"});

    let mut res = TestClient::get(lookup())
        .send(service(StubSource::Found(upstream.clone())))
        .await;

    assert_eq!(res.status_code, Some(StatusCode::OK));
    assert_eq!(res.take_json::<Value>().await.unwrap(), upstream);
}

#[tokio::test]
async fn test_lookup_without_cards_is_not_found() {
    for source in [StubSource::Missing, StubSource::Found(json!([])), StubSource::Found(json!(null))] {
        let mut res = TestClient::get(lookup()).send(service(source)).await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
        assert_eq!(res.take_string().await.unwrap(), "Not Found");
    }
}

#[tokio::test]
async fn test_lookup_rejects_bad_locators() {
    for query in ["", "?uri=", "?uri=javascript%3Aalert(1)"] {
        let url = lookup_url(query);
        let mut res = TestClient::get(&url)
            .send(service(StubSource::Missing))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST), "{url}");
        assert_eq!(res.take_string().await.unwrap(), "Bad Request");
    }
}

#[tokio::test]
async fn test_lookup_upstream_failure_is_bad_gateway() {
    let res = TestClient::get(lookup())
        .send(service(StubSource::Failing))
        .await;

    assert_eq!(res.status_code, Some(StatusCode::BAD_GATEWAY));
}

#[tokio::test]
async fn test_lookup_non_card_upstream_is_bad_gateway() {
    for upstream in [json!("oops"), json!([1]), json!({"hcard": "oops"}), json!([{"fn": "A"}, 2])] {
        let res = TestClient::get(lookup())
            .send(service(StubSource::Found(upstream.clone())))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_GATEWAY), "{upstream}");
    }
}

#[tokio::test]
async fn test_lookup_without_source_is_internal_error() {
    let service = salvo::Router::new().push(routes());

    let res = TestClient::get(lookup()).send(service).await;

    assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));
}
