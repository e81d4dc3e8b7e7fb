use younote_core::{EditOutcome, NoteListView, NoteStore, StoreOptions, COMMIT_KEY};

#[test]
fn groceries_and_work_ideas_scenario() {
    let store = NoteStore::open_in_memory(StoreOptions::default()).unwrap();
    let groceries = store.create("Groceries").unwrap();
    store.create("Work Ideas").unwrap();
    store.update(groceries.id, "Milk, eggs, bread").unwrap();

    let hits = store.list(Some("wor"), None).unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "Work Ideas");
    assert!(hits[0].body.is_empty());

    let all = store.list(None, None).unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].name, "Groceries");
    assert_eq!(all[0].body, "Milk, eggs, bread");
    assert_eq!(all[1].name, "Work Ideas");
}

#[test]
fn edit_session_commit_is_applied_through_view() {
    let store = NoteStore::open_in_memory(StoreOptions::default()).unwrap();
    let mut view = NoteListView::new(&store);
    view.add("Groceries").unwrap();
    view.add("Work Ideas").unwrap();

    let mut session = view.edit_at(0).expect("row 0 exists");
    session.insert("Milk, eggs, bread");
    let EditOutcome::Commit(commit) = session.insert(COMMIT_KEY) else {
        panic!("commit key should end the edit");
    };

    let updated = view.apply(commit).unwrap();
    assert_eq!(updated.name, "Groceries");
    assert_eq!(view.items()[0].body, "Milk, eggs, bread");
    assert_eq!(store.get(updated.id).unwrap().unwrap().body, "Milk, eggs, bread");
}

#[test]
fn delete_at_uses_row_of_current_filtered_list() {
    let store = NoteStore::open_in_memory(StoreOptions::default()).unwrap();
    let mut view = NoteListView::new(&store);
    view.add("b work").unwrap();
    view.add("groceries").unwrap();
    view.add("a work").unwrap();

    // Filtered rows are name-sorted: ["a work", "b work"].
    view.search("work").unwrap();
    let deleted = view.delete_at(0).unwrap().expect("row 0 exists");

    let removed = store.list(None, None).unwrap();
    assert!(removed.iter().all(|note| note.id != deleted));
    assert_eq!(
        removed.iter().map(|n| n.name.as_str()).collect::<Vec<_>>(),
        vec!["b work", "groceries"]
    );
    assert_eq!(view.len(), 1);
    assert_eq!(view.items()[0].name, "b work");
}

#[test]
fn view_reflects_writes_made_directly_on_store_after_reload() {
    let store = NoteStore::open_in_memory(StoreOptions::default()).unwrap();
    let mut view = NoteListView::new(&store);
    assert!(view.load().unwrap().is_empty());

    store.create("outside").unwrap();
    assert!(view.is_empty());
    assert_eq!(view.load().unwrap().len(), 1);
}

#[test]
fn clearing_search_restores_insertion_order() {
    let store = NoteStore::open_in_memory(StoreOptions::default()).unwrap();
    let mut view = NoteListView::new(&store);
    view.add("zeta").unwrap();
    view.add("alpha").unwrap();

    view.search("a").unwrap();
    assert_eq!(view.items()[0].name, "alpha");

    view.clear_search().unwrap();
    assert_eq!(view.items()[0].name, "zeta");
    assert!(view.search_text().is_none());
}

#[test]
fn committed_add_succeeds_even_when_reload_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.sqlite3");
    let store = NoteStore::open(&path, StoreOptions::default()).unwrap();
    let mut view = NoteListView::new(&store);
    view.add("existing").unwrap();
    assert!(!view.is_stale());

    // A row the reader refuses to parse makes every full reload fail.
    let raw = rusqlite::Connection::open(&path).unwrap();
    raw.execute(
        "INSERT INTO notes (uuid, name, name_key, body) VALUES ('not-a-uuid', 'bad', 'bad', '');",
        [],
    )
    .unwrap();

    let created = view.add("fresh").expect("insert committed, add must succeed");
    assert_eq!(created.name, "fresh");
    assert!(view.is_stale());
    assert_eq!(view.len(), 1);
    assert_eq!(view.items()[0].name, "existing");

    let fresh_rows: i64 = raw
        .query_row("SELECT COUNT(*) FROM notes WHERE name = 'fresh';", [], |row| {
            row.get(0)
        })
        .unwrap();
    assert_eq!(fresh_rows, 1);

    let edited = view
        .apply(younote_core::EditCommit {
            note_id: created.id,
            body: "kept".to_string(),
        })
        .expect("update committed, apply must succeed");
    assert_eq!(edited.body, "kept");
    assert!(view.load().is_err());
}
