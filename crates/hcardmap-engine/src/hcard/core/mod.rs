//! Core `hCard` types.

mod candidate;
mod card;
mod mapping;
mod raw;

pub use candidate::CandidateSet;
pub use card::{
    CardValue, FAMILY_NAME_PROPERTY, FN_PROPERTY, GIVEN_NAME_PROPERTY, Leaf, MISSING_FN_LABEL,
    N_PROPERTY, NormalizedCard, ORG_PROPERTY, ORGANIZATION_NAME_PROPERTY,
};
pub use mapping::{MappingEntry, MappingSpec, normalize_key};
pub use raw::{HREF_KEY, OpenStructTable, RawRecord, TABLE_KEY, TYPE_KEY, VALUE_KEY};
