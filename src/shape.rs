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

//! Static shape descriptors for record types.
//!
//! Every record type carries one `'static` [`Shape`]: its name plus the declared
//! fields and their annotation tags. Field policy (rename, skip) is read from
//! the declaration, never from a value, so two instances of the same type always
//! agree on it.
//!
//! A tag is a comma separated list of directives:
//!
//! - `-` or `skip` drops the field and everything below it from the comparison
//! - any other non-empty directive renames the field in reported differences
//!
//! The [`record!`](crate::record) macro writes the descriptor and the field
//! accessor for a plain struct:
//!
//! ```
//! use struct_compare::record;
//!
//! struct Book {
//!     name: String,
//!     returned: bool,
//! }
//!
//! record!(Book { name = "book_name", returned });
//! ```

use crate::inspect::Inspect;

/// Directives that exclude a field from comparison.
pub const SKIP_DIRECTIVES: [&str; 2] = ["-", "skip"];

/// Separates directives inside one tag.
pub const TAG_SEPARATOR: char = ',';

#[derive(Debug)]
pub struct Shape {
    name: &'static str,
    fields: &'static [FieldDecl],
}

impl Shape {
    pub const fn new(name: &'static str, fields: &'static [FieldDecl]) -> Self {
        Shape { name, fields }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn fields(&self) -> &'static [FieldDecl] {
        self.fields
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDecl {
    name: &'static str,
    tag: Option<&'static str>,
}

impl FieldDecl {
    pub const fn new(name: &'static str, tag: Option<&'static str>) -> Self {
        FieldDecl { name, tag }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn tag(&self) -> Option<&'static str> {
        self.tag
    }

    pub fn meta(&self) -> FieldMeta {
        FieldMeta::from_tag(self.tag)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldMeta {
    pub rename: Option<&'static str>,
    pub skip: bool,
}

impl FieldMeta {
    pub fn from_tag(tag: Option<&'static str>) -> Self {
        let mut meta = FieldMeta::default();

        for directive in tag.into_iter().flat_map(|t| t.split(TAG_SEPARATOR)) {
            let directive = directive.trim();
            if SKIP_DIRECTIVES.contains(&directive) {
                meta.skip = true;
            } else if !directive.is_empty() && meta.rename.is_none() {
                meta.rename = Some(directive);
            }
        }

        // skip wins over a rename in the same tag
        if meta.skip {
            meta.rename = None;
        }

        meta
    }
}

/// A value with a fixed set of named fields.
///
/// Implementations must return a value from [`Record::field`] for every name
/// listed in their [`Shape`]. Use [`record!`](crate::record) unless the type is
/// generic.
pub trait Record {
    fn shape(&self) -> &'static Shape;

    fn field(&self, name: &str) -> Option<&dyn Inspect>;
}

/// Implements [`Record`] and [`Inspect`] for a struct.
///
/// Fields are listed in declaration order, each optionally followed by
/// `= "tag"`. Fields left out of the list are invisible to comparison.
#[macro_export]
macro_rules! record {
    (@tag) => {
        ::core::option::Option::None
    };
    (@tag $tag:literal) => {
        ::core::option::Option::Some($tag)
    };
    ($ty:ident { $($field:ident $(= $tag:literal)?),* $(,)? }) => {
        impl $crate::Record for $ty {
            fn shape(&self) -> &'static $crate::Shape {
                static SHAPE: $crate::Shape = $crate::Shape::new(
                    stringify!($ty),
                    &[$($crate::FieldDecl::new(stringify!($field), $crate::record!(@tag $($tag)?))),*],
                );
                &SHAPE
            }

            fn field(&self, name: &str) -> ::core::option::Option<&dyn $crate::Inspect> {
                match name {
                    $(stringify!($field) => ::core::option::Option::Some(&self.$field),)*
                    _ => ::core::option::Option::None,
                }
            }
        }

        impl $crate::Inspect for $ty {
            fn resolve(&self) -> $crate::Inspected<'_> {
                $crate::Inspected::Record(self)
            }
        }
    };
}
