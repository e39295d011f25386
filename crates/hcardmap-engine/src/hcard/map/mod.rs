//! Mapping normalized cards onto sinks.

mod resolver;
mod sink;

pub use resolver::{MappedField, MappingReport, apply_mapping};
pub use sink::{FormSink, Sink};
