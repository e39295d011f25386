//! Implied "n" optimization.
//!
//! A card without a structured name gets one derived from its formatted
//! name, as long as that formatted name is a person's and not the
//! organization's.

use crate::hcard::core::{
    CardValue, FAMILY_NAME_PROPERTY, FN_PROPERTY, GIVEN_NAME_PROPERTY, N_PROPERTY, NormalizedCard,
    ORG_PROPERTY, ORGANIZATION_NAME_PROPERTY,
};

/// Given and family name derived from a formatted name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImpliedName {
    pub given: String,
    pub family: String,
}

impl ImpliedName {
    fn new(given: &str, family: &str) -> Self {
        Self {
            given: given.to_owned(),
            family: family.to_owned(),
        }
    }

    /// The `n` property value: `{given_name, family_name}`.
    #[must_use]
    pub fn to_card(&self) -> NormalizedCard {
        [
            (GIVEN_NAME_PROPERTY.to_owned(), CardValue::Text(self.given.clone())),
            (FAMILY_NAME_PROPERTY.to_owned(), CardValue::Text(self.family.clone())),
        ]
        .into_iter()
        .collect()
    }
}

/// Splits a two-token formatted name into given and family name.
///
/// "Given Family" and "Family, Given" are recognized. A second token that is
/// a single initial ("M.") always stays the family name. Names with any
/// other number of space-separated tokens yield `None`.
#[must_use]
pub fn implied_name(full_name: &str) -> Option<ImpliedName> {
    let tokens: Vec<&str> = full_name.split(' ').collect();
    let [first, second] = tokens.as_slice() else {
        return None;
    };

    if is_initial(second) {
        return Some(ImpliedName::new(first, second));
    }
    if let Some(family) = first.strip_suffix(',') {
        return Some(ImpliedName::new(second, family));
    }
    Some(ImpliedName::new(first, second))
}

fn is_initial(token: &str) -> bool {
    token.ends_with('.') && token.chars().count() == 2
}

/// ## Summary
/// Adds an implied `n` to `card` when it has none.
///
/// Returns whether `n` was added. Nothing happens when `n` exists, `fn` is
/// missing, `fn` equals the organization name, or `fn` is not two tokens.
pub fn infer_name(card: &mut NormalizedCard) -> bool {
    if card.get(N_PROPERTY).is_some() {
        return false;
    }

    let Some(full_name) = card.text(FN_PROPERTY) else {
        tracing::debug!("Card has no formatted name, leaving n unset");
        return false;
    };

    if organization_name(card) == Some(full_name) {
        tracing::debug!(full_name, "Formatted name is the organization, leaving n unset");
        return false;
    }

    let Some(name) = implied_name(full_name) else {
        tracing::debug!(full_name, "Formatted name is not two tokens, leaving n unset");
        return false;
    };

    card.insert(N_PROPERTY, CardValue::Nested(name.to_card()));
    true
}

fn organization_name(card: &NormalizedCard) -> Option<&str> {
    match card.get(ORG_PROPERTY)? {
        CardValue::Text(org) => Some(org),
        CardValue::Nested(org) => org.text_by_key(ORGANIZATION_NAME_PROPERTY),
    }
}
