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

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::diagnostics::Diagnostic;
use crate::format;
use crate::inspect::{Inspect, Inspected};
use crate::shape::Record;
use crate::walker;

/// One field whose value differs between the two compared records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Difference {
    name: String,
    old: String,
    new: String,
}

impl Difference {
    pub fn new(name: impl Into<String>, old: impl Into<String>, new: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            old: old.into(),
            new: new.into(),
        }
    }

    /// The rename from the field's tag, or the qualified path such as `Person.book.name`.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn old(&self) -> &str {
        &self.old
    }

    pub fn new_value(&self) -> &str {
        &self.new
    }
}

impl fmt::Display for Difference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} was {} and now {}", self.name, self.old, self.new)
    }
}

/// Compares two records field by field.
///
/// Both inputs must resolve to records; `second` is expected to have the same
/// shape as `first` (the same type, or one with the same field names). Fields
/// are visited depth first in the declaration order of `first`. A field tagged
/// `-`/`skip` is ignored together with everything below it.
///
/// An optional nested record that is absent on one side is still walked on the
/// other side, and every leaf underneath reports `nil` for the absent side.
///
/// Fails with `NotARecord` when either input is not a record, and with
/// `ShapeMismatch` when a field of `first` has no counterpart in `second` or is
/// a record on one side and a plain value on the other.
pub fn compare<A, B>(first: &A, second: &B) -> Result<Vec<Difference>, Diagnostic>
where
    A: Inspect + ?Sized,
    B: Inspect + ?Sized,
{
    let first_record = walker::as_record(first)
        .ok_or_else(|| Diagnostic::not_a_record("first", first.type_name()))?;
    let second_record = walker::as_record(second)
        .ok_or_else(|| Diagnostic::not_a_record("second", second.type_name()))?;

    let mut result = Vec::new();
    diff_records(
        Some(first_record),
        Some(second_record),
        first_record.shape().name(),
        &mut result,
    )?;
    Ok(result)
}

/// The original sentence form: every difference joined with `, `, or
/// `no difference`.
pub fn summarize(differences: &[Difference]) -> String {
    if differences.is_empty() {
        return "no difference".to_string();
    }

    differences
        .iter()
        .map(Difference::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Plain equality for values that already implement `PartialEq`.
pub fn is_equal<T: PartialEq + ?Sized>(first: &T, second: &T) -> bool {
    first == second
}

fn diff_records(
    first: Option<&dyn Record>,
    second: Option<&dyn Record>,
    path: &str,
    result: &mut Vec<Difference>,
) -> Result<(), Diagnostic> {
    // Fields come from whichever side is present.
    let Some(primary) = first.or(second) else {
        return Ok(());
    };

    for field in walker::fields(primary)? {
        if field.meta.skip {
            continue;
        }

        let field_path = format_path(path, field.name);
        let old = walker::field_of(first, field.name, &field_path)?;
        let new = walker::field_of(second, field.name, &field_path)?;

        match (&old, &new) {
            (Inspected::Record(old), Inspected::Record(new)) => {
                diff_records(Some(*old), Some(*new), &field_path, result)?;
            }
            (Inspected::Record(old), Inspected::Absent) => {
                diff_records(Some(*old), None, &field_path, result)?;
            }
            (Inspected::Absent, Inspected::Record(new)) => {
                diff_records(None, Some(*new), &field_path, result)?;
            }
            (Inspected::Record(_), Inspected::Leaf(_))
            | (Inspected::Leaf(_), Inspected::Record(_)) => {
                return Err(Diagnostic::shape_mismatch(
                    &field_path,
                    "it holds a record on one side and a plain value on the other",
                ));
            }
            _ => {
                if !format::same(&old, &new) {
                    let name = match field.meta.rename {
                        Some(rename) => rename.to_string(),
                        None => field_path,
                    };
                    result.push(Difference {
                        name,
                        old: format::display(&old),
                        new: format::display(&new),
                    });
                }
            }
        }
    }

    Ok(())
}

fn format_path(base: &str, segment: &str) -> String {
    if base.is_empty() {
        segment.to_string()
    } else {
        format!("{}.{}", base, segment)
    }
}
