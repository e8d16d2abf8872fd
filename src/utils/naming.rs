// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Identifier conversions used when matching accessors and naming constants.

use convert_case::{Case, Casing};

/// Upper-case the first character: `name` → `Name`.
#[must_use]
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new()
    }
}

/// Lower-case the first character: `Name` → `name`.
#[must_use]
pub fn decapitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new()
    }
}

/// Remove an accessor prefix (`get`/`is`) followed by an upper-case letter.
///
/// Returns `None` when `name` is not an accessor name.
#[must_use]
pub fn strip_accessor_prefix(name: &str) -> Option<&str> {
    ["get", "is"].iter().find_map(|prefix| {
        name.strip_prefix(prefix)
            .filter(|rest| rest.chars().next().is_some_and(char::is_uppercase))
    })
}

/// Whether `name` is a Kotlin `is`-property name such as `isActive`.
#[must_use]
pub fn is_boolean_property(name: &str) -> bool {
    name.strip_prefix("is")
        .is_some_and(|rest| rest.chars().next().is_some_and(char::is_uppercase))
}

/// Constant name for an identifier: `firstName` → `FIRST_NAME`.
#[must_use]
pub fn constant_case(name: &str) -> String {
    name.to_case(Case::Constant)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalize_and_back() {
        assert_eq!(capitalize("name"), "Name");
        assert_eq!(decapitalize("Name"), "name");
        assert_eq!(capitalize(""), "");
        assert_eq!(decapitalize("URL"), "uRL");
    }

    #[test]
    fn accessor_prefix() {
        assert_eq!(strip_accessor_prefix("getName"), Some("Name"));
        assert_eq!(strip_accessor_prefix("isActive"), Some("Active"));
        assert_eq!(strip_accessor_prefix("getaway"), None);
        assert_eq!(strip_accessor_prefix("name"), None);
        assert_eq!(strip_accessor_prefix("get"), None);
    }

    #[test]
    fn boolean_property() {
        assert!(is_boolean_property("isActive"));
        assert!(!is_boolean_property("island"));
        assert!(!is_boolean_property("active"));
    }

    #[test]
    fn constants() {
        assert_eq!(constant_case("firstName"), "FIRST_NAME");
        assert_eq!(constant_case("id"), "ID");
    }
}
