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

//! Field enumeration over records.

use crate::diagnostics::Diagnostic;
use crate::inspect::{Inspect, Inspected};
use crate::shape::{FieldMeta, Record};

pub struct Field<'a> {
    pub name: &'static str,
    pub meta: FieldMeta,
    pub value: &'a dyn Inspect,
}

/// Resolves indirection and returns the record underneath, if there is one.
pub fn as_record<T: Inspect + ?Sized>(value: &T) -> Option<&dyn Record> {
    value.resolve().as_record()
}

/// True for values that can be compared field by field. Scalars, containers
/// and maps are not; neither is an absent optional.
pub fn is_record_shaped<T: Inspect + ?Sized>(value: &T) -> bool {
    as_record(value).is_some()
}

/// The fields of `record` in declaration order, with their declared policy.
pub fn fields(record: &dyn Record) -> Result<Vec<Field<'_>>, Diagnostic> {
    let shape = record.shape();
    let mut result = Vec::with_capacity(shape.fields().len());

    for decl in shape.fields() {
        let value = record.field(decl.name()).ok_or_else(|| {
            Diagnostic::shape_mismatch(
                &format!("{}.{}", shape.name(), decl.name()),
                "the record declares this field but has no value for it",
            )
        })?;

        result.push(Field {
            name: decl.name(),
            meta: decl.meta(),
            value,
        });
    }

    Ok(result)
}

/// Looks up `name` on one side of a comparison.
///
/// A missing side (an absent optional record) has every field absent. A
/// present record without the field cannot be paired with the other side.
pub fn field_of<'a>(
    side: Option<&'a dyn Record>,
    name: &str,
    path: &str,
) -> Result<Inspected<'a>, Diagnostic> {
    let Some(record) = side else {
        return Ok(Inspected::Absent);
    };

    record
        .field(name)
        .map(|value| value.resolve())
        .ok_or_else(|| {
            Diagnostic::shape_mismatch(
                path,
                &format!("{} has no field named '{}'", record.shape().name(), name),
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct Book {
        name: String,
        returned: bool,
    }

    crate::record!(Book { name = "book_name", returned });

    struct Person {
        id: u64,
        age: u8,
        book: Option<Box<Book>>,
    }

    crate::record!(Person { id = "skip", age, book });

    // Declares a field its accessor cannot produce.
    struct Broken;

    impl Record for Broken {
        fn shape(&self) -> &'static crate::Shape {
            static SHAPE: crate::Shape =
                crate::Shape::new("Broken", &[crate::FieldDecl::new("ghost", None)]);
            &SHAPE
        }

        fn field(&self, _name: &str) -> Option<&dyn Inspect> {
            None
        }
    }

    fn person() -> Person {
        Person {
            id: 1,
            age: 20,
            book: Some(Box::new(Book {
                name: "Dune".to_string(),
                returned: false,
            })),
        }
    }

    #[test]
    fn test_fields_in_declaration_order() {
        let person = person();
        let record = as_record(&person).unwrap();
        let fields = fields(record).unwrap();

        let names: Vec<_> = fields.iter().map(|f| f.name).collect();
        assert_eq!(names, vec!["id", "age", "book"]);
        assert!(fields[0].meta.skip);
        assert!(!fields[1].meta.skip);
    }

    #[test]
    fn test_nested_record_through_indirection() {
        let person = person();
        let record = as_record(&person).unwrap();
        let fields = fields(record).unwrap();

        let book = as_record(fields[2].value).unwrap();
        assert_eq!(book.shape().name(), "Book");

        let book_fields = super::fields(book).unwrap();
        assert_eq!(book_fields[0].meta.rename, Some("book_name"));
        assert!(!is_record_shaped(fields[1].value));
    }

    #[test]
    fn test_record_predicate() {
        assert!(is_record_shaped(&person()));
        assert!(is_record_shaped(&Some(person())));
        assert!(!is_record_shaped(&None::<Person>));
        assert!(!is_record_shaped(&42i32));
        assert!(!is_record_shaped("text"));
        assert!(!is_record_shaped(&vec![person()]));

        let map: HashMap<String, u8> = HashMap::new();
        assert!(!is_record_shaped(&map));
    }

    #[test]
    fn test_field_of_absent_side() {
        let value = field_of(None, "age", "Person.age").unwrap();
        assert!(value.is_absent());
    }

    #[test]
    fn test_field_of_missing_field() {
        let person = person();
        let record = as_record(&person);
        let err = field_of(record, "height", "Person.height").err().unwrap();
        assert_eq!(err.code, crate::DiagnosticCode::ShapeMismatch);
        assert!(err.description.contains("Person.height"));
    }

    #[test]
    fn test_undeliverable_field_is_a_mismatch() {
        let err = fields(&Broken).err().unwrap();
        assert_eq!(err.code, crate::DiagnosticCode::ShapeMismatch);
        assert!(err.description.contains("Broken.ghost"));
    }
}
