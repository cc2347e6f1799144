//! Entity codec helpers for Harvest XML.
//!
//! Harvest documents use kebab-case element names, annotate scalars with a
//! `type="..."` attribute (ignored here) and mark nulls as `<x nil="true"/>`.
//! Collections are `<things type="array"><thing>..</thing></things>`, empty
//! when self-closing.

use std::fmt::Display;
use std::str::FromStr;

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize};

use harvest_client::Result;

/// Decode one entity or collection from an XML document.
pub fn from_str<T: DeserializeOwned>(xml: &str) -> Result<T> {
    quick_xml::de::from_str(xml).map_err(Into::into)
}

/// Encode `value` as an XML fragment rooted at `root`.
pub fn to_string<T: Serialize>(root: &str, value: &T) -> Result<String> {
    harvest_client::to_xml(root, value)
}

/// Deserialize an optional scalar. Missing, empty and `nil="true"` elements
/// all become `None`; anything else is parsed with `FromStr`.
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(text) => text.parse().map(Some).map_err(D::Error::custom),
    }
}

/// Deserialize a boolean that may be nil; nil reads as `false`.
pub(crate) fn flag<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    nullable::<D, bool>(deserializer).map(Option::unwrap_or_default)
}
