use salvo::Router;

use hcardmap_core::constants::HCARD_ROUTE_COMPONENT;

mod lookup;

#[cfg(test)]
mod lookup_tests;

#[must_use]
pub fn routes() -> Router {
    Router::with_path(HCARD_ROUTE_COMPONENT).get(lookup::lookup)
}
