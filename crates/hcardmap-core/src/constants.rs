/// Route component constants shared across crates
pub const API_ROUTE_COMPONENT: &str = "api";
pub const API_ROUTE_PREFIX: &str = const_str::concat!("/", API_ROUTE_COMPONENT);

pub const HCARD_ROUTE_COMPONENT: &str = "hcard";
pub const HCARD_ROUTE_PREFIX: &str =
    const_str::concat!(API_ROUTE_PREFIX, "/", HCARD_ROUTE_COMPONENT);

/// Query parameter carrying the locator of the page holding the `hCard`.
pub const HCARD_LOOKUP_PARAM: &str = "uri";

/// Query parameter the upstream parser service receives the locator in.
pub const UPSTREAM_LOOKUP_PARAM: &str = "url";
