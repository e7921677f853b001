//! Renumbering and edit-mode properties of the catalog store

use book_catalog::{CatalogStore, Draft, Field, Session, SubmitGuard};
use pretty_assertions::assert_eq;

fn book(title: &str, author: &str, genre: &str, yop: &str, isbn: &str) -> Draft {
    Draft {
        title: title.to_string(),
        author: author.to_string(),
        genre: genre.to_string(),
        year_of_publication: yop.to_string(),
        isbn: isbn.to_string(),
    }
}

fn numbered(n: usize) -> CatalogStore {
    let mut store = CatalogStore::new();
    for i in 0..n {
        let title = format!("Title {}", i + 1);
        store.append(&book(&title, "Author", "Genre", "2000", &format!("{:03}", i)));
    }
    store
}

fn sequence_numbers(store: &CatalogStore) -> Vec<u32> {
    store.records().iter().map(|r| r.sequence_number()).collect()
}

#[test]
fn test_appends_form_contiguous_range() {
    for n in [0, 1, 2, 7, 25] {
        let store = numbered(n);
        let expected: Vec<u32> = (1..=n as u32).collect();
        assert_eq!(sequence_numbers(&store), expected);
    }
}

#[test]
fn test_delete_each_position_renumbers_tail() {
    let n = 6;
    for k in 1..=n {
        let mut store = numbered(n);
        let before = store.records().to_vec();

        let removed = store.remove(k - 1).expect("in range");
        assert_eq!(removed.sequence_number() as usize, k);
        assert_eq!(store.len(), n - 1);

        // Records before k untouched
        assert_eq!(&store.records()[..k - 1], &before[..k - 1]);

        // Records after k shifted down by exactly one
        for (after, original) in store.records()[k - 1..].iter().zip(&before[k..]) {
            assert_eq!(after.title, original.title);
            assert_eq!(after.sequence_number(), original.sequence_number() - 1);
        }

        let expected: Vec<u32> = (1..n as u32).collect();
        assert_eq!(sequence_numbers(&store), expected);
    }
}

#[test]
fn test_delete_everything_from_the_front() {
    let mut store = numbered(4);
    while !store.is_empty() {
        store.remove(0);
        let expected: Vec<u32> = (1..=store.len() as u32).collect();
        assert_eq!(sequence_numbers(&store), expected);
    }
    assert!(store.remove(0).is_none());
}

#[test]
fn test_commit_edit_changes_only_text_fields() {
    let mut store = numbered(3);
    let before = store.records().to_vec();

    let mut draft = store.begin_edit(1).expect("row exists");
    assert_eq!(draft, before[1].to_draft());
    for field in Field::ALL {
        draft.set(field, format!("new {}", field));
    }
    assert!(store.commit_edit(1, &draft));

    let edited = store.get(1).unwrap();
    assert_eq!(edited.sequence_number(), 2);
    assert_eq!(edited.to_draft(), draft);
    assert_eq!(store.get(0), before.first());
    assert_eq!(store.get(2), before.get(2));
}

#[test]
fn test_cancel_after_begin_edit_is_identity() {
    let mut store = numbered(3);
    let before = store.records().to_vec();

    store.begin_edit(2);
    assert_eq!(store.editing(), Some(2));
    store.cancel_edit();

    assert_eq!(store.records(), before.as_slice());
    assert_eq!(store.editing(), None);
}

#[test]
fn test_append_append_delete_renumbers() {
    let mut store = CatalogStore::new();

    assert_eq!(store.append(&book("A", "X", "G", "2020", "111")), Some(1));
    assert_eq!(store.len(), 1);
    assert_eq!(store.get(0).unwrap().sequence_number(), 1);

    assert_eq!(store.append(&book("B", "Y", "H", "2021", "222")), Some(2));

    store.remove(0);
    assert_eq!(store.len(), 1);
    let remaining = store.get(0).unwrap();
    assert_eq!(remaining.title, "B");
    assert_eq!(remaining.sequence_number(), 1);
}

#[test]
fn test_guarded_append_with_empty_author() {
    let mut session = Session::new(SubmitGuard::Enforce);
    for (field, value) in [
        (Field::Title, "A"),
        (Field::Author, ""),
        (Field::Genre, "G"),
        (Field::YearOfPublication, "2020"),
        (Field::Isbn, "111"),
    ] {
        session.input_new(field, value);
    }

    assert!(session.add_disabled());
    assert_eq!(session.add(), None);
    assert!(session.store().is_empty());
}

#[test]
fn test_guarded_commit_with_blank_field_keeps_record() {
    let mut store = numbered(1);
    let mut draft = store.begin_edit(0).unwrap();
    draft.set(Field::Isbn, "\t ");

    assert!(!store.commit_edit(0, &draft));
    assert_eq!(store.editing(), Some(0));
    assert_eq!(store.get(0).unwrap().isbn, "000");
}

#[test]
fn test_unguarded_store_accepts_blank_records() {
    let mut store = CatalogStore::with_guard(SubmitGuard::Off);
    assert_eq!(store.append(&book("", "", "", "", "")), Some(1));
    assert_eq!(store.append(&book("Only title", "", "", "", "")), Some(2));

    let mut draft = store.begin_edit(1).unwrap();
    draft.set(Field::Title, "");
    assert!(store.commit_edit(1, &draft));
    assert_eq!(store.get(1).unwrap().title, "");
}

#[test]
fn test_edit_index_survives_delete_of_same_row() {
    let mut session = Session::new(SubmitGuard::Enforce);
    for title in ["A", "B", "C"] {
        session.input_new(Field::Title, title);
        session.input_new(Field::Author, "X");
        session.input_new(Field::Genre, "G");
        session.input_new(Field::YearOfPublication, "2020");
        session.input_new(Field::Isbn, "111");
        session.add();
    }

    assert!(session.edit(1));
    session.input_edit(Field::Title, "B edited");
    session.delete(1);

    // Still editing index 1, which is now "C"; saving overwrites it
    assert_eq!(session.store().editing(), Some(1));
    assert_eq!(session.store().get(1).unwrap().title, "C");
    assert!(session.save());
    assert_eq!(session.store().get(1).unwrap().title, "B edited");
    assert_eq!(session.store().get(1).unwrap().sequence_number(), 2);
}

#[test]
fn test_edit_index_dangles_after_deleting_last_row() {
    let mut store = numbered(2);
    let draft = store.begin_edit(1).unwrap();
    store.remove(1);

    assert_eq!(store.editing(), Some(1));
    assert!(!store.commit_edit(1, &draft));
    assert_eq!(store.editing(), None);
    assert_eq!(store.len(), 1);
}
