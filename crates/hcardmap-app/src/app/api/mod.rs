mod app_specific;
mod hcard;

use salvo::Router;

// Re-export route constants from core
pub use hcardmap_core::constants::{
    API_ROUTE_COMPONENT, API_ROUTE_PREFIX, HCARD_ROUTE_COMPONENT, HCARD_ROUTE_PREFIX,
};

/// ## Summary
/// Constructs the API router.
#[must_use]
pub fn routes() -> Router {
    Router::with_path(API_ROUTE_COMPONENT)
        .push(app_specific::routes())
        .push(hcard::routes())
}
