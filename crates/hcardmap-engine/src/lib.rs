//! `hCard` normalization and mapping engine.
//!
//! Consumes the JSON emitted by third-party microformat parsers, reconciles
//! their differing shapes into one normalized card and writes the card's
//! fields to caller-declared destinations.

pub mod error;
pub mod hcard;
