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

//! The record shapes the command line compares: a library member and the book
//! they have borrowed.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;
use struct_compare::record;
use uuid::Uuid;

#[derive(Debug, Clone, Deserialize)]
pub struct Person {
    pub id: Uuid,
    pub name: String,
    pub age: u8,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub joined: Option<DateTime<Utc>>,
    pub book: Book,
    #[serde(default)]
    pub previous: Option<Book>,
}

record!(Person {
    id = "-",
    name = "name",
    age,
    email,
    joined,
    book,
    previous,
});

#[derive(Debug, Clone, Deserialize)]
pub struct Book {
    pub name: String,
    pub returned: bool,
    #[serde(default)]
    pub due: Option<NaiveDate>,
    #[serde(default)]
    pub tags: Vec<String>,
}

record!(Book {
    name = "book_name",
    returned,
    due,
    tags,
});
