//! Normalization: envelope unwrapping, flattening, deduplication and
//! implied-name inference.

pub mod dedup;
pub mod envelope;
pub mod flatten;
pub mod name;
pub mod unescape;

pub use dedup::dedup;
pub use envelope::{Envelope, candidates, strip_envelope, unwrap};
pub use flatten::flatten;
pub use name::{ImpliedName, implied_name, infer_name};
pub use unescape::unescape_html;
