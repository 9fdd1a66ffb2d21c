//! Unit tests for the error sink.

use diesel::prelude::*;

use super::error_log::{MESSAGE_MAX_CHARS, truncate_message};
use crate::db::schema::import_error_log;
use crate::model::error_log::{ErrorLogEntry, NewErrorLogEntry};

#[test_log::test]
fn short_messages_pass_through() {
    assert_eq!(truncate_message("rate limit exceeded"), "rate limit exceeded");
}

#[test_log::test]
fn long_messages_are_bounded() {
    let long = "x".repeat(MESSAGE_MAX_CHARS + 50);
    let truncated = truncate_message(&long);
    assert_eq!(truncated.chars().count(), MESSAGE_MAX_CHARS);
}

#[test_log::test]
fn exact_length_message_is_untouched() {
    let exact = "x".repeat(MESSAGE_MAX_CHARS);
    assert_eq!(truncate_message(&exact), exact);
}

#[test_log::test]
fn truncation_respects_char_boundaries() {
    // Multibyte content must not be split mid-character.
    let long = "ü".repeat(MESSAGE_MAX_CHARS + 10);
    let truncated = truncate_message(&long);
    assert_eq!(truncated.chars().count(), MESSAGE_MAX_CHARS);
    assert!(truncated.chars().all(|c| c == 'ü'));
}

#[test_log::test]
fn test_error_entry_selection_matches_schema() {
    let query = import_error_log::table.select(ErrorLogEntry::as_select());
    let query_str = diesel::debug_query::<diesel::pg::Pg, _>(&query).to_string();
    assert!(query_str.contains("occurred_at"), "got: {query_str}");
}

#[test_log::test]
fn test_error_insert_sets_only_the_message() {
    let entry = NewErrorLogEntry {
        message: "zone detail fetch failed",
    };
    let insert = diesel::insert_into(import_error_log::table).values(&entry);
    let query_str = diesel::debug_query::<diesel::pg::Pg, _>(&insert).to_string();

    assert!(query_str.contains("import_error_log"), "got: {query_str}");
    assert!(query_str.contains("message"), "got: {query_str}");
    assert!(
        !query_str.contains("occurred_at"),
        "occurred_at is filled by the database, got: {query_str}"
    );
}
