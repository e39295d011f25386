//! Parser responses and the contact form used across the pipeline tests.
//!
//! All four responses describe the same kind of contact as emitted by `hKit`,
//! mofo, Optimus and `ufXtract`.

use serde_json::{Value, json};

use crate::hcard::{FormSink, HcardMapper, MappingSpec};

/// Form fields the mapping writes to.
pub const FORM_FIELDS: [&str; 9] = [
    "first", "last", "phone", "email", "company", "website", "street", "zip", "town",
];

/// The mapping a contact form would declare.
#[must_use]
pub fn contact_mapping() -> MappingSpec {
    MappingSpec::new()
        .field("given_name", "first")
        .field("family_name", "last")
        .group(
            "tel",
            MappingSpec::new()
                .field("tel", "phone")
                .field("work", "phone")
                .field("cell", "phone"),
        )
        .field("email", "email")
        .group(
            "org",
            MappingSpec::new()
                .field("org", "company")
                .field("organization_name", "company"),
        )
        .field("url", "website")
        .field("street_address", "street")
        .field("postal_code", "zip")
        .field("locality", "town")
}

#[must_use]
pub fn contact_form() -> FormSink {
    FormSink::with_fields(FORM_FIELDS)
}

#[must_use]
pub fn contact_mapper() -> HcardMapper {
    HcardMapper::new(contact_mapping())
}

/// `hKit`: plain strings, `{type, value}` list for `tel`.
#[must_use]
pub fn hkit() -> Value {
    json!({
        "fn": "Omnia Computing, Oheim & S\u{e4}dtler GbR",
        "adr": {
            "street-address": "Arenbergstra\u{df}e 13a",
            "postal-code": "46238",
            "country-name": "Deutschland",
            "type": "work",
            "locality": "Bottrop"
        },
        "email": "info@omnia-computing.de",
        "org": "Omnia Computing, Oheim & S\u{e4}dtler GbR",
        "tel": [
            {"type": "tel", "value": "0201 3839911"},
            {"type": "fax", "value": "0201 3839916"}
        ],
        "url": "http://www.omnia-computing.de"
    })
}

/// mofo: escaped entities, open-struct `tel`, `null` url.
#[must_use]
pub fn mofo() -> Value {
    json!({
        "url": null,
        "org": "Omnia Computing, Oheim &amp; S\u{e4}dtler GbR",
        "adr": {
            "postal_code": "46238",
            "type": "work",
            "street_address": "Arenbergstra\u{df}e 13a",
            "locality": "Bottrop",
            "properties": ["type", "country_name", "postal_code", "street_address", "locality"],
            "country_name": "Deutschland"
        },
        "tel": {
            "table": {
                "type": ["tel", "fax"],
                "value": ["0201 3839911", "0201 3839916"]
            }
        },
        "properties": ["fn", "email", "adr", "url", "tel", "org"],
        "fn": "Omnia Computing, Oheim &amp; S\u{e4}dtler GbR",
        "email": "info@omnia-computing.de"
    })
}

/// Optimus: `hcard` envelope, href/value `email`, family name first in `fn`.
#[must_use]
pub fn optimus() -> Value {
    json!({
        "from": "http://pfefferle.org/static/microformats/hcard-test.html",
        "title": "hCard Test",
        "hcard": {
            "adr": {
                "street-address": "Street",
                "region": "State",
                "locality": "City",
                "postal-code": "12345",
                "country-name": "Country"
            },
            "email": {
                "href": "mailto:mail@examle.org",
                "value": "mail@examle.org"
            },
            "fn": "Mustermann Max",
            "org": "Organisation",
            "tel": "111-222-333",
            "url": [
                "http://example.org",
                "http://pfefferle.org/static/microformats/aim:goim?screenname=aim",
                "http://pfefferle.org/static/microformats/ymsgr:sendIM?yim"
            ]
        }
    })
}

/// `ufXtract`: `vcard` envelope, every value wrapped in lists, explicit `n`.
#[must_use]
pub fn ufxtract() -> Value {
    json!({
        "vcard": [{
            "fn": "Mustermann Max",
            "n": {
                "given-name": ["Max"],
                "family-name": ["Mustermann"]
            },
            "adr": [{
                "street-address": ["Street"],
                "locality": "City",
                "region": "State",
                "postal-code": "12345",
                "country-name": "Country"
            }],
            "org": {"organization-name": "Organisation"},
            "email": ["mail@examle.org"],
            "tel": ["111-222-333"],
            "url": [
                "http://example.org",
                "aim:goim?screenname=aim",
                "ymsgr:sendIM?yim"
            ]
        }]
    })
}
