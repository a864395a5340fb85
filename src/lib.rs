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

pub mod diagnostics;
pub mod diff;
pub mod format;
pub mod inspect;
pub mod shape;
pub mod walker;

pub use diagnostics::{Diagnostic, DiagnosticCode, DiagnosticLevel};
pub use diff::{compare, is_equal, summarize, Difference};
pub use inspect::{Inspect, Inspected};
pub use shape::{FieldDecl, FieldMeta, Record, Shape, SKIP_DIRECTIVES, TAG_SEPARATOR};
pub use walker::{as_record, fields, is_record_shaped, Field};
