use super::*;

fn record(name: &str) -> ToolRecord {
    ToolRecord {
        id: Uuid::new_v4(),
        name: name.to_owned(),
        description: String::new(),
        category_id: "text".to_owned(),
        url: String::new(),
        featured: false,
        is_new: false,
    }
}

// =============================================================
// AdminState
// =============================================================

#[test]
fn replace_all_sorts_case_insensitively_and_clears_status() {
    let mut state = AdminState { loading: true, error: Some("boom".to_owned()), ..AdminState::default() };
    state.replace_all(vec![record("zeta"), record("Alpha"), record("beta")]);
    let names: Vec<_> = state.records.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["Alpha", "beta", "zeta"]);
    assert!(!state.loading);
    assert!(state.loaded);
    assert!(state.error.is_none());
}

#[test]
fn upsert_replaces_existing_record() {
    let mut state = AdminState::default();
    let mut first = record("One");
    state.upsert(first.clone());
    first.featured = true;
    state.upsert(first.clone());
    assert_eq!(state.records.len(), 1);
    assert!(state.record(first.id).is_some_and(|r| r.featured));
}

#[test]
fn upsert_inserts_new_record_in_order() {
    let mut state = AdminState::default();
    state.upsert(record("b"));
    state.upsert(record("a"));
    assert_eq!(state.records[0].name, "a");
}

#[test]
fn remove_drops_record() {
    let mut state = AdminState::default();
    let a = record("a");
    state.upsert(a.clone());
    state.upsert(record("b"));
    state.remove(a.id);
    assert!(state.record(a.id).is_none());
    assert_eq!(state.records.len(), 1);
}

// =============================================================
// AdminDraft
// =============================================================

#[test]
fn draft_default_uses_first_category_and_marks_new() {
    let draft = AdminDraft::default();
    assert_eq!(draft.category_id, Catalog::builtin().categories()[0].id);
    assert!(draft.is_new);
    assert!(!draft.featured);
}

#[test]
fn draft_to_new_record_trims_fields() {
    let draft = AdminDraft {
        name: "  Slug Maker ".to_owned(),
        description: " Makes slugs ".to_owned(),
        url: " /tools/slug-generator ".to_owned(),
        ..AdminDraft::default()
    };
    let record = draft.to_new_record(&Catalog::builtin()).expect("valid draft");
    assert_eq!(record.name, "Slug Maker");
    assert_eq!(record.description, "Makes slugs");
    assert_eq!(record.url, "/tools/slug-generator");
}

#[test]
fn draft_to_new_record_reports_validation_error() {
    let draft = AdminDraft::default();
    assert_eq!(draft.to_new_record(&Catalog::builtin()), Err("name must not be empty".to_owned()));

    let draft = AdminDraft { name: "X".to_owned(), category_id: "games".to_owned(), ..AdminDraft::default() };
    assert_eq!(draft.to_new_record(&Catalog::builtin()), Err("unknown category: games".to_owned()));
}
