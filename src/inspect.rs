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

//! Resolving values down to something the differ can reason about.
//!
//! [`Inspect`] is implemented for scalars, every common kind of indirection and
//! the standard containers. Indirection (`Option`, `Box`, `Rc`, `Arc`, `&T`) is
//! peeled off completely, so `Some(Some(Box::new(3)))` resolves exactly like
//! `3`, and any `None` along the way resolves to [`Inspected::Absent`].
//!
//! Containers are leaves: they are rendered as a whole and compared by that
//! rendering, never element by element. Inside a container, text is quoted and
//! only an absent element shows as a bare `nil`, so two different containers
//! never share a rendering. Maps in particular are never records, even though
//! their entries have names.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::rc::Rc;
use std::sync::Arc;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use uuid::Uuid;

use crate::format;
use crate::shape::Record;

pub enum Inspected<'a> {
    Absent,
    Leaf(String),
    Record(&'a dyn Record),
}

impl<'a> Inspected<'a> {
    pub fn is_absent(&self) -> bool {
        matches!(self, Inspected::Absent)
    }

    pub fn as_record(&self) -> Option<&'a dyn Record> {
        match self {
            Inspected::Record(record) => Some(*record),
            _ => None,
        }
    }
}

pub trait Inspect {
    fn resolve(&self) -> Inspected<'_>;

    /// Text of this value as an element of a container.
    fn element_text(&self) -> String {
        format::display(&self.resolve())
    }

    /// Concrete type name, used in diagnostics.
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

macro_rules! display_leaf {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Inspect for $ty {
                fn resolve(&self) -> Inspected<'_> {
                    Inspected::Leaf(self.to_string())
                }
            }
        )*
    };
}

display_leaf!(
    bool, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
    NaiveDate, NaiveDateTime, NaiveTime, Uuid,
);

macro_rules! text_leaf {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Inspect for $ty {
                fn resolve(&self) -> Inspected<'_> {
                    Inspected::Leaf(self.to_string())
                }

                fn element_text(&self) -> String {
                    format!("{:?}", self)
                }
            }
        )*
    };
}

text_leaf!(char, String, str);

impl<Tz> Inspect for DateTime<Tz>
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    fn resolve(&self) -> Inspected<'_> {
        Inspected::Leaf(self.to_string())
    }
}

impl<T: Inspect> Inspect for Option<T> {
    fn resolve(&self) -> Inspected<'_> {
        match self {
            Some(value) => value.resolve(),
            None => Inspected::Absent,
        }
    }

    fn element_text(&self) -> String {
        match self {
            Some(value) => value.element_text(),
            None => format::NIL.to_string(),
        }
    }
}

macro_rules! pointer {
    ($($ptr:ident),*) => {
        $(
            impl<T: Inspect + ?Sized> Inspect for $ptr<T> {
                fn resolve(&self) -> Inspected<'_> {
                    (**self).resolve()
                }

                fn element_text(&self) -> String {
                    (**self).element_text()
                }

                fn type_name(&self) -> &'static str {
                    (**self).type_name()
                }
            }
        )*
    };
}

pointer!(Box, Rc, Arc);

impl<T: Inspect + ?Sized> Inspect for &T {
    fn resolve(&self) -> Inspected<'_> {
        (**self).resolve()
    }

    fn element_text(&self) -> String {
        (**self).element_text()
    }

    fn type_name(&self) -> &'static str {
        (**self).type_name()
    }
}

impl<T: Inspect> Inspect for [T] {
    fn resolve(&self) -> Inspected<'_> {
        Inspected::Leaf(format::sequence(self.iter().map(|item| item as &dyn Inspect)))
    }
}

impl<T: Inspect, const N: usize> Inspect for [T; N] {
    fn resolve(&self) -> Inspected<'_> {
        self.as_slice().resolve()
    }
}

impl<T: Inspect> Inspect for Vec<T> {
    fn resolve(&self) -> Inspected<'_> {
        self.as_slice().resolve()
    }
}

impl<T: Inspect> Inspect for VecDeque<T> {
    fn resolve(&self) -> Inspected<'_> {
        Inspected::Leaf(format::sequence(self.iter().map(|item| item as &dyn Inspect)))
    }
}

impl<T: Inspect> Inspect for BTreeSet<T> {
    fn resolve(&self) -> Inspected<'_> {
        Inspected::Leaf(format::sequence(self.iter().map(|item| item as &dyn Inspect)))
    }
}

impl<T: Inspect, S> Inspect for HashSet<T, S> {
    fn resolve(&self) -> Inspected<'_> {
        Inspected::Leaf(format::unordered_sequence(
            self.iter().map(|item| item as &dyn Inspect),
        ))
    }
}

impl<K: Inspect, V: Inspect> Inspect for BTreeMap<K, V> {
    fn resolve(&self) -> Inspected<'_> {
        Inspected::Leaf(format::entries(
            self.iter()
                .map(|(key, value)| (key as &dyn Inspect, value as &dyn Inspect)),
            false,
        ))
    }
}

impl<K: Inspect, V: Inspect, S> Inspect for HashMap<K, V, S> {
    fn resolve(&self) -> Inspected<'_> {
        Inspected::Leaf(format::entries(
            self.iter()
                .map(|(key, value)| (key as &dyn Inspect, value as &dyn Inspect)),
            true,
        ))
    }
}
