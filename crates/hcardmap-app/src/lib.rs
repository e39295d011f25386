//! Transport proxy in front of a microformat parser service.
//!
//! `GET /api/hcard?uri=<page>` asks the parser for the `hCards` on `page` and
//! answers with the one that best represents it.

pub mod app;
pub mod error;
pub mod source;
pub mod source_handler;
