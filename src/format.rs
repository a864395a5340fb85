// struct-compare reports field-level differences between two records
// Copyright (C) 2025  Peoples Grocers LLC
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published
// by the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.
//
// To purchase a license under different terms contact admin@peoplesgrocers.com
// To request changes, report bugs, or give user feedback contact
// marxism@peoplesgrocers.com
//

//! Text rendering for compared values.
//!
//! Rendering is display only. The one place it feeds a decision is leaf
//! equality in [`same`], which still keeps an absent value apart from any
//! present one.

use crate::inspect::{Inspect, Inspected};
use crate::shape::Record;

/// How an absent value is shown.
pub const NIL: &str = "nil";

pub fn display(value: &Inspected<'_>) -> String {
    match value {
        Inspected::Absent => NIL.to_string(),
        Inspected::Leaf(text) => text.clone(),
        Inspected::Record(record) => record_text(*record),
    }
}

/// Leaf equality: absent equals only absent, present values compare by text.
///
/// Floats compare by their rendered text, not by `==`: `-0` differs from `0`,
/// and a NaN equals another NaN so a record always equals itself.
pub fn same(old: &Inspected<'_>, new: &Inspected<'_>) -> bool {
    match (old, new) {
        (Inspected::Absent, Inspected::Absent) => true,
        (Inspected::Absent, _) | (_, Inspected::Absent) => false,
        _ => display(old) == display(new),
    }
}

pub(crate) fn sequence<'a>(items: impl Iterator<Item = &'a dyn Inspect>) -> String {
    let parts: Vec<String> = items.map(|item| item.element_text()).collect();
    format!("[{}]", parts.join(", "))
}

pub(crate) fn unordered_sequence<'a>(items: impl Iterator<Item = &'a dyn Inspect>) -> String {
    let mut parts: Vec<String> = items.map(|item| item.element_text()).collect();
    parts.sort();
    format!("[{}]", parts.join(", "))
}

pub(crate) fn entries<'a>(
    items: impl Iterator<Item = (&'a dyn Inspect, &'a dyn Inspect)>,
    sort: bool,
) -> String {
    let mut parts: Vec<String> = items
        .map(|(key, value)| format!("{}: {}", key.element_text(), value.element_text()))
        .collect();
    if sort {
        parts.sort();
    }
    format!("{{{}}}", parts.join(", "))
}

// Records only get here when nested inside a container leaf.
fn record_text(record: &dyn Record) -> String {
    let parts: Vec<String> = record
        .shape()
        .fields()
        .iter()
        .filter(|decl| !decl.meta().skip)
        .filter_map(|decl| {
            record
                .field(decl.name())
                .map(|value| format!("{}: {}", decl.name(), value.element_text()))
        })
        .collect();
    format!("{{{}}}", parts.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    struct Book {
        id: u32,
        name: String,
        pages: Option<u16>,
    }

    crate::record!(Book { id = "-", name, pages });

    #[test]
    fn test_absent_renders_nil() {
        assert_eq!(display(&None::<u8>.resolve()), "nil");
        assert_eq!(display(&Some(Box::new(None::<u8>)).resolve()), NIL);
    }

    #[test]
    fn test_absent_is_not_a_present_nil() {
        let text = "nil".to_string();
        assert!(!same(&text.resolve(), &Inspected::Absent));
        assert!(!same(&Inspected::Absent, &0u8.resolve()));
        assert!(same(&Inspected::Absent, &None::<String>.resolve()));
    }

    #[test]
    fn test_indirections_equal_by_value() {
        assert!(same(&Some(Box::new(7i32)).resolve(), &7i32.resolve()));
        assert!(!same(&Some(7i32).resolve(), &Some(8i32).resolve()));
    }

    #[test]
    fn test_record_inside_container() {
        let books = vec![
            Book { id: 1, name: "Dune".to_string(), pages: Some(412) },
            Book { id: 2, name: "Warcraft".to_string(), pages: None },
        ];
        assert_eq!(
            display(&books.resolve()),
            r#"[{name: "Dune", pages: 412}, {name: "Warcraft", pages: nil}]"#
        );
    }

    #[test]
    fn test_container_equality_ignores_skipped_fields() {
        let old = vec![Book { id: 1, name: "Dune".to_string(), pages: None }];
        let new = vec![Book { id: 9, name: "Dune".to_string(), pages: None }];
        assert!(same(&old.resolve(), &new.resolve()));
    }

    #[test]
    fn test_separator_inside_element_is_not_a_split() {
        let joined = vec!["a, b"];
        let split = vec!["a", "b"];
        assert_eq!(display(&joined.resolve()), r#"["a, b"]"#);
        assert!(!same(&joined.resolve(), &split.resolve()));
    }

    #[test]
    fn test_absent_element_is_not_the_word_nil() {
        let absent = vec![None::<&str>];
        let word = vec![Some("nil")];
        assert_eq!(display(&absent.resolve()), "[nil]");
        assert_eq!(display(&word.resolve()), r#"["nil"]"#);
        assert!(!same(&absent.resolve(), &word.resolve()));
    }

    #[test]
    fn test_map_entries_keep_their_boundaries() {
        let one: BTreeMap<&str, &str> = [("a: b", "c")].into_iter().collect();
        let other: BTreeMap<&str, &str> = [("a", "b: c")].into_iter().collect();
        assert!(!same(&one.resolve(), &other.resolve()));

        let one: BTreeMap<&str, &str> = [("a", "b, c: d")].into_iter().collect();
        let other: BTreeMap<&str, &str> = [("a", "b"), ("c", "d")].into_iter().collect();
        assert!(!same(&one.resolve(), &other.resolve()));
    }

    #[test]
    fn test_float_zero_signs_differ() {
        assert!(!same(&0.0f64.resolve(), &(-0.0f64).resolve()));
        assert!(same(&f64::NAN.resolve(), &f64::NAN.resolve()));
    }
}
