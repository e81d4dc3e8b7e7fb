use younote_core::{NoteStore, SortKey, StoreOptions};

fn names(notes: &[younote_core::Note]) -> Vec<&str> {
    notes.iter().map(|note| note.name.as_str()).collect()
}

fn seeded_store(names: &[&str]) -> NoteStore {
    let store = NoteStore::open_in_memory(StoreOptions::default()).unwrap();
    for name in names {
        store.create(*name).unwrap();
    }
    store
}

#[test]
fn filter_is_case_insensitive_substring_sorted_by_name() {
    let store = seeded_store(&["work log", "Homework", "Groceries", "WORKOUT plan"]);

    let hits = store.list(Some("WoRk"), None).unwrap();
    assert_eq!(names(&hits), vec!["Homework", "WORKOUT plan", "work log"]);
}

#[test]
fn filtered_order_compares_names_case_sensitively() {
    let store = seeded_store(&["apple pie", "Banana bread", "apple Tart", "Apple jam"]);

    let hits = store.list(Some("a"), None).unwrap();
    let listed = names(&hits);
    let mut sorted = listed.clone();
    sorted.sort();
    assert_eq!(listed, sorted);
    assert_eq!(
        listed,
        vec!["Apple jam", "Banana bread", "apple Tart", "apple pie"]
    );
}

#[test]
fn filter_ignores_diacritics_in_both_directions() {
    let store = seeded_store(&["Café list", "Cafeteria", "Tea"]);

    let plain = store.list(Some("cafe"), None).unwrap();
    assert_eq!(names(&plain), vec!["Cafeteria", "Café list"]);

    let accented = store.list(Some("CAFÉ"), None).unwrap();
    assert_eq!(names(&accented), vec!["Cafeteria", "Café list"]);
}

#[test]
fn empty_filter_equals_unfiltered_insertion_order() {
    let store = seeded_store(&["b", "a", "c"]);

    let unfiltered = store.list(None, None).unwrap();
    assert_eq!(names(&unfiltered), vec!["b", "a", "c"]);
    assert_eq!(store.list(Some(""), None).unwrap(), unfiltered);
}

#[test]
fn whitespace_filter_matches_names_containing_it() {
    let store = seeded_store(&["Groceries", "Work Ideas", "three   spaces", "a b"]);

    let single = store.list(Some(" "), None).unwrap();
    assert_eq!(names(&single), vec!["Work Ideas", "a b", "three   spaces"]);

    let triple = store.list(Some("   "), None).unwrap();
    assert_eq!(names(&triple), vec!["three   spaces"]);
}

#[test]
fn filter_of_only_combining_marks_matches_nothing() {
    let store = seeded_store(&["Café", "plain"]);
    assert!(store.list(Some("\u{301}"), None).unwrap().is_empty());
}

#[test]
fn filter_without_matches_returns_empty() {
    let store = seeded_store(&["alpha", "beta"]);
    assert!(store.list(Some("gamma"), None).unwrap().is_empty());
}

#[test]
fn explicit_sort_overrides_default_ordering() {
    let store = seeded_store(&["b note", "a note", "c note"]);

    let by_name = store.list(None, Some(SortKey::NameAscending)).unwrap();
    assert_eq!(names(&by_name), vec!["a note", "b note", "c note"]);

    let by_insertion = store.list(Some("note"), Some(SortKey::Insertion)).unwrap();
    assert_eq!(names(&by_insertion), vec!["b note", "a note", "c note"]);
}

#[test]
fn rename_is_reflected_in_search() {
    let store = seeded_store(&["Todo"]);
    let note = store.list(None, None).unwrap().remove(0);
    store.rename(note.id, "Résumé").unwrap();

    assert!(store.list(Some("todo"), None).unwrap().is_empty());
    let hits = store.list(Some("resume"), None).unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, note.id);
}

#[test]
fn filter_does_not_search_bodies() {
    let store = seeded_store(&["Groceries"]);
    let note = store.list(None, None).unwrap().remove(0);
    store.update(note.id, "work stuff").unwrap();

    assert!(store.list(Some("work"), None).unwrap().is_empty());
}
