#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use struct_compare::{compare, record};

#[derive(Arbitrary, Debug)]
struct FuzzBook {
    name: String,
    returned: bool,
    pages: Option<Box<Option<u32>>>,
    tags: Vec<String>,
}

record!(FuzzBook { name = "book_name", returned, pages, tags });

#[derive(Arbitrary, Debug)]
struct FuzzPerson {
    id: u64,
    name: Option<String>,
    age: i16,
    book: FuzzBook,
    previous: Option<FuzzBook>,
    secret: Option<FuzzBook>,
}

record!(FuzzPerson {
    id = "-",
    name,
    age,
    book,
    previous,
    secret = "name,skip",
});

fuzz_target!(|pair: (FuzzPerson, FuzzPerson)| {
    let (first, second) = pair;

    let same = compare(&first, &first).expect("a record compares with itself");
    assert!(same.is_empty());

    let forward = compare(&first, &second).expect("same type always lines up");
    let backward = compare(&second, &first).expect("same type always lines up");

    assert_eq!(forward.len(), backward.len());
    for (f, b) in forward.iter().zip(&backward) {
        assert_eq!(f.name(), b.name());
        assert_eq!(f.old(), b.new_value());
        assert_eq!(f.new_value(), b.old());
    }

    for difference in &forward {
        assert!(!difference.name().starts_with("FuzzPerson.id"));
        assert!(!difference.name().starts_with("FuzzPerson.secret"));
        assert!(!difference.name().starts_with("FuzzPerson.book.name"));
    }
});
