//! Mapping resolution: routes every leaf of a card to its destination.

use crate::hcard::core::{MappingEntry, MappingSpec, NormalizedCard, normalize_key};

use super::sink::Sink;

/// One value written to the sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappedField {
    pub property: String,
    pub destination: String,
    pub value: String,
}

/// What a mapping run did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MappingReport {
    /// Writes in the order they happened.
    pub written: Vec<MappedField>,
    /// Leaves with no destination in the mapping or the sink.
    pub unmatched: Vec<String>,
}

impl MappingReport {
    /// The last value written to `destination`.
    #[must_use]
    pub fn value_of(&self, destination: &str) -> Option<&str> {
        self.written
            .iter()
            .rev()
            .find(|field| field.destination == destination)
            .map(|field| field.value.as_str())
    }
}

/// ## Summary
/// Writes every text leaf of `card` to the destination `mapping` resolves it
/// to.
///
/// Leaves are visited depth-first in card order. A leaf without a
/// destination, or whose destination the sink lacks, is skipped. When two
/// leaves resolve to the same destination the later one wins.
pub fn apply_mapping<S: Sink + ?Sized>(
    card: &NormalizedCard,
    mapping: &MappingSpec,
    sink: &mut S,
) -> MappingReport {
    let mut report = MappingReport::default();

    for leaf in card.leaves() {
        let property = normalize_key(leaf.name);
        match resolve_destination(&property, mapping, sink) {
            Some(destination) => {
                tracing::trace!(%property, destination, value = leaf.value, "Writing mapped field");
                sink.write(destination, leaf.value);
                report.written.push(MappedField {
                    property,
                    destination: destination.to_owned(),
                    value: leaf.value.to_owned(),
                });
            }
            None => {
                tracing::trace!(%property, "No destination for property");
                report.unmatched.push(property);
            }
        }
    }

    report
}

/// Finds the destination for a normalized property name.
///
/// Entries are searched in declaration order. A group is searched
/// recursively before its own key is compared; a matching group key resolves
/// to the group's first destination present in the sink.
fn resolve_destination<'m, S: Sink + ?Sized>(
    property: &str,
    mapping: &'m MappingSpec,
    sink: &S,
) -> Option<&'m str> {
    mapping.entries().find_map(|(key, entry)| match entry {
        MappingEntry::Destination(destination) => {
            let matches = normalize_key(key) == property && sink.contains(destination);
            matches.then_some(destination.as_str())
        }
        MappingEntry::Group(group) => resolve_destination(property, group, sink).or_else(|| {
            if normalize_key(key) != property {
                return None;
            }
            group
                .destinations()
                .into_iter()
                .find(|destination| sink.contains(destination))
        }),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hcard::core::CardValue;
    use crate::hcard::map::FormSink;

    fn text(value: &str) -> CardValue {
        CardValue::Text(value.to_owned())
    }

    fn card(properties: Vec<(&str, CardValue)>) -> NormalizedCard {
        properties
            .into_iter()
            .map(|(name, value)| (name.to_owned(), value))
            .collect()
    }

    #[test_log::test]
    fn matches_case_insensitively_with_hyphens() {
        let adr = card(vec![("Street-Address", text("Street")), ("locality", text("City"))]);
        let card = card(vec![("adr", CardValue::Nested(adr))]);
        let mapping = MappingSpec::new()
            .field("street_address", "street")
            .field("LOCALITY", "town");
        let mut form = FormSink::with_fields(["street", "town"]);

        let report = apply_mapping(&card, &mapping, &mut form);

        assert_eq!(form.value("street"), Some("Street"));
        assert_eq!(form.value("town"), Some("City"));
        assert_eq!(report.written.len(), 2);
        assert!(report.unmatched.is_empty());
    }

    #[test_log::test]
    fn group_members_share_a_destination() {
        let tel = card(vec![("cell", text("0170"))]);
        let card = card(vec![("tel", CardValue::Nested(tel))]);
        let mapping = MappingSpec::new().group(
            "tel",
            MappingSpec::new()
                .field("tel", "phone")
                .field("work", "phone")
                .field("cell", "phone"),
        );
        let mut form = FormSink::with_fields(["phone"]);

        apply_mapping(&card, &mapping, &mut form);
        assert_eq!(form.value("phone"), Some("0170"));
    }

    #[test_log::test]
    fn group_key_resolves_to_first_present_destination() {
        let card = card(vec![("org", text("ACME"))]);
        let mapping = MappingSpec::new().group(
            "org",
            MappingSpec::new()
                .field("organization_name", "org_name")
                .field("organization_unit", "company"),
        );
        let mut form = FormSink::with_fields(["company"]);

        let report = apply_mapping(&card, &mapping, &mut form);
        assert_eq!(form.value("company"), Some("ACME"));
        assert_eq!(report.value_of("company"), Some("ACME"));
    }

    #[test_log::test]
    fn first_match_wins() {
        let card = card(vec![("email", text("a@b.c"))]);
        let mapping = MappingSpec::new()
            .field("email", "primary")
            .field("email", "secondary");
        let mut form = FormSink::with_fields(["primary", "secondary"]);

        apply_mapping(&card, &mapping, &mut form);
        assert_eq!(form.value("primary"), Some("a@b.c"));
        assert_eq!(form.value("secondary"), Some(""));
    }

    #[test_log::test]
    fn missing_destination_falls_through_to_next_entry() {
        let card = card(vec![("email", text("a@b.c"))]);
        let mapping = MappingSpec::new()
            .field("email", "absent")
            .field("email", "mail");
        let mut form = FormSink::with_fields(["mail"]);

        apply_mapping(&card, &mapping, &mut form);
        assert_eq!(form.value("mail"), Some("a@b.c"));
    }

    #[test_log::test]
    fn misses_are_silent_and_reported() {
        let card = card(vec![("fn", text("Max")), ("url", text("http://example.org"))]);
        let mapping = MappingSpec::new().field("url", "website");
        let mut form = FormSink::with_fields(["first"]);

        let report = apply_mapping(&card, &mapping, &mut form);
        assert!(report.written.is_empty());
        assert_eq!(report.unmatched, vec!["fn", "url"]);
        assert_eq!(form.value("first"), Some(""));
    }

    #[test_log::test]
    fn later_leaf_overwrites_shared_destination() {
        let tel = card(vec![("tel", text("1")), ("work", text("2"))]);
        let card = card(vec![("tel", CardValue::Nested(tel))]);
        let mapping = MappingSpec::new().group(
            "tel",
            MappingSpec::new().field("tel", "phone").field("work", "phone"),
        );
        let mut form = FormSink::with_fields(["phone"]);

        let report = apply_mapping(&card, &mapping, &mut form);
        assert_eq!(form.value("phone"), Some("2"));
        assert_eq!(report.written.len(), 2);
    }
}
