//! Shared configuration, constants and error types for the `hCard` mapper.

pub mod config;
pub mod constants;
pub mod error;
