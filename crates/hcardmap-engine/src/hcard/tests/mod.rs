//! Cross-module tests of the mapping pipeline against real parser output.

mod fixtures;
