use super::*;

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| (*s).to_owned()).collect()
}

// =============================================================
// Parsing
// =============================================================

#[test]
fn parse_reads_object_in_order() {
    let map = RenameMap::parse(r#"{"zeta":"Z","alpha":"A"}"#);
    let entries: Vec<(&str, &str)> = map.iter().collect();
    assert_eq!(entries, vec![("zeta", "Z"), ("alpha", "A")]);
}

#[test]
fn parse_malformed_input_is_empty() {
    assert!(RenameMap::parse("{not json").is_empty());
    assert!(RenameMap::parse("").is_empty());
    assert!(RenameMap::parse("[1,2]").is_empty());
    assert!(RenameMap::parse(r#"{"a": 3}"#).is_empty());
}

#[test]
fn to_json_round_trips_order() {
    let raw = r#"{"b":"x","a":"y"}"#;
    assert_eq!(RenameMap::parse(raw).to_json(), raw);
    assert_eq!(RenameMap::default().to_json(), "{}");
}

#[test]
fn identity_maps_each_column_to_itself() {
    let map = RenameMap::identity(&names(&["a", "b", "c"]));
    assert_eq!(map.len(), 3);
    assert_eq!(map.get("b"), Some("b"));
    assert_eq!(map.to_json(), r#"{"a":"a","b":"b","c":"c"}"#);
}

// =============================================================
// Rename
// =============================================================

#[test]
fn rename_to_same_value_writes_nothing() {
    let mut map = RenameMap::parse(r#"{"a":"a"}"#);
    assert_eq!(map.rename("a", "a"), RenameEffect::None);
}

#[test]
fn rename_writes_full_map_once() {
    let mut map = RenameMap::parse(r#"{"a":"a","b":"b"}"#);
    assert_eq!(
        map.rename("a", "first"),
        RenameEffect::WriteParam(r#"{"a":"first","b":"b"}"#.to_owned())
    );
    assert_eq!(map.get("a"), Some("first"));
}

#[test]
fn rename_of_unknown_column_adds_entry() {
    let mut map = RenameMap::default();
    assert_eq!(map.rename("a", "b"), RenameEffect::WriteParam(r#"{"a":"b"}"#.to_owned()));
}

// =============================================================
// Delete
// =============================================================

#[test]
fn delete_then_delete_last_entry() {
    let mut map = RenameMap::parse(r#"{"a":"a","b":"b"}"#);
    assert_eq!(map.delete("a"), RenameEffect::WriteParam(r#"{"b":"b"}"#.to_owned()));
    assert_eq!(map.delete("b"), RenameEffect::DeleteModule);
    assert!(map.is_empty());
}

#[test]
fn delete_keeps_remaining_order() {
    let mut map = RenameMap::parse(r#"{"a":"1","b":"2","c":"3"}"#);
    assert_eq!(map.delete("a"), RenameEffect::WriteParam(r#"{"b":"2","c":"3"}"#.to_owned()));
}

#[test]
fn delete_missing_entry_is_a_no_op() {
    let mut map = RenameMap::parse(r#"{"a":"a"}"#);
    assert_eq!(map.delete("zzz"), RenameEffect::None);
    assert_eq!(map.len(), 1);
}

// =============================================================
// EntryDraft
// =============================================================

#[test]
fn draft_confirm_without_edit_writes_nothing() {
    let mut draft = EntryDraft::new("a");
    assert_eq!(draft.confirm(), None);
}

#[test]
fn draft_buffers_typing_until_confirm() {
    let mut draft = EntryDraft::new("a");
    draft.edit("ab".to_owned());
    draft.edit("abc".to_owned());
    assert!(draft.is_dirty());
    assert_eq!(draft.confirm(), Some("abc".to_owned()));
    assert_eq!(draft.confirm(), None);
}

#[test]
fn draft_edit_back_to_original_is_clean() {
    let mut draft = EntryDraft::new("a");
    draft.edit("b".to_owned());
    draft.edit("a".to_owned());
    assert_eq!(draft.confirm(), None);
}

#[test]
fn draft_resyncs_when_upstream_changes() {
    let mut draft = EntryDraft::new("a");
    draft.edit("local".to_owned());
    draft.sync_upstream("remote");
    assert_eq!(draft.buffer(), "remote");
    assert!(!draft.is_dirty());
}

#[test]
fn draft_keeps_typing_when_upstream_is_unchanged() {
    let mut draft = EntryDraft::new("a");
    draft.edit("local".to_owned());
    draft.sync_upstream("a");
    assert_eq!(draft.buffer(), "local");
}
