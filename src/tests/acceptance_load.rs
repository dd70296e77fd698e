//! Acceptance tests for loading the word of the day.
//!
//! Each test drives the full app (service, state, rendering) through the harness and
//! checks what ends up on screen and in the cache.

use crate::cache::MemoryDayCache;
use crate::model::{WordEntry, FALLBACK_WORD};
use crate::test_harness::{
    day, dictionary_entry, scripted_service, AcceptanceTestHarness, ScriptedDictionary,
    ScriptedWords,
};
use crossterm::event::KeyCode;

fn hello_and_world() -> ScriptedDictionary {
    ScriptedDictionary::new()
        .with_word("hello", dictionary_entry(&[("noun", &["a greeting"])]))
        .with_word("world", dictionary_entry(&[("noun", &["the earth"])]))
}

// ===== Cold start =====

#[test]
fn cold_start_retries_until_a_word_has_a_definition() {
    // GIVEN: Empty cache, first random word unknown to the dictionary
    let service = scripted_service(
        ScriptedWords::new(["qzxfoo", "hello"]),
        hello_and_world(),
        MemoryDayCache::new(),
        "2024-01-01",
    );

    // WHEN: The app starts
    let mut harness = AcceptanceTestHarness::new(service).expect("harness");
    let screen = harness.render_to_string().unwrap();

    // THEN: The second word is shown and cached for the day
    assert!(screen.contains("hello"), "screen:\n{screen}");
    assert!(screen.contains("a greeting"));
    assert!(screen.contains("fetched in 2 attempts"));

    let cached = harness.app().service().cache().record().expect("cached");
    assert_eq!(cached.word, "hello");
    assert_eq!(cached.produced_for, day("2024-01-01"));
}

#[test]
fn cold_start_falls_back_after_ten_misses() {
    // GIVEN: Ten words the dictionary does not know
    let words: Vec<String> = (0..10).map(|i| format!("nonword{i}")).collect();
    let service = scripted_service(
        ScriptedWords::new(words),
        ScriptedDictionary::new(),
        MemoryDayCache::new(),
        "2024-01-01",
    );

    // WHEN: The app starts
    let mut harness = AcceptanceTestHarness::new(service).expect("harness");
    let screen = harness.render_to_string().unwrap();

    // THEN: The fallback entry is shown and nothing is cached
    assert!(screen.contains(FALLBACK_WORD), "screen:\n{screen}");
    assert!(screen.contains("offline fallback"));
    assert!(harness.app().service().cache().record().is_none());
    assert_eq!(harness.app().service().cache().writes(), 0);
}

#[test]
fn word_service_outage_shows_fallback_without_raw_error() {
    // GIVEN: The random word service fails outright
    let service = scripted_service(
        ScriptedWords::failing(),
        hello_and_world(),
        MemoryDayCache::new(),
        "2024-01-01",
    );

    // WHEN: The app starts
    let mut harness = AcceptanceTestHarness::new(service).expect("harness");
    let screen = harness.render_to_string().unwrap();

    // THEN: The fallback is displayed with a neutral status, never the error text
    assert!(screen.contains(FALLBACK_WORD), "screen:\n{screen}");
    assert!(screen.contains("word service unavailable"));
    assert!(!screen.contains("script exhausted"));
}

// ===== Warm start =====

#[test]
fn warm_start_shows_cached_word_without_lookups() {
    // GIVEN: Today's word already cached
    let mut cached = WordEntry::fallback(day("2024-01-01"));
    cached.word = "serendipity".to_string();
    let words = ScriptedWords::new(["hello"]);
    let word_calls = words.calls();
    let dictionary = hello_and_world();
    let dictionary_calls = dictionary.calls();
    let service = scripted_service(
        words,
        dictionary,
        MemoryDayCache::with_record(cached),
        "2024-01-01",
    );

    // WHEN: The app starts
    let mut harness = AcceptanceTestHarness::new(service).expect("harness");
    let screen = harness.render_to_string().unwrap();

    // THEN: The cached word is shown and no service was called
    assert!(screen.contains("serendipity"), "screen:\n{screen}");
    assert!(screen.contains("saved today"));
    assert!(word_calls.borrow().is_empty());
    assert!(dictionary_calls.borrow().is_empty());
}

#[test]
fn yesterdays_word_is_replaced() {
    // GIVEN: A record from the previous day
    let mut stale = WordEntry::fallback(day("2024-01-01").previous().unwrap());
    stale.word = "yesterday".to_string();
    let service = scripted_service(
        ScriptedWords::new(["hello"]),
        hello_and_world(),
        MemoryDayCache::with_record(stale),
        "2024-01-01",
    );

    // WHEN: The app starts
    let mut harness = AcceptanceTestHarness::new(service).expect("harness");
    let screen = harness.render_to_string().unwrap();

    // THEN: A fresh word is fetched for today
    assert!(screen.contains("hello"), "screen:\n{screen}");
    assert!(!screen.contains("yesterday"));
    assert_eq!(
        harness.app().service().cache().record().map(|e| e.produced_for),
        Some(day("2024-01-01"))
    );
}

// ===== Reset =====

#[test]
fn reset_key_fetches_a_new_word() {
    // GIVEN: The app showing a freshly fetched word
    let service = scripted_service(
        ScriptedWords::new(["hello", "world"]),
        hello_and_world(),
        MemoryDayCache::new(),
        "2024-01-01",
    );
    let mut harness = AcceptanceTestHarness::new(service).expect("harness");
    assert!(harness.render_to_string().unwrap().contains("hello"));

    // WHEN: The user presses 'r'
    let quit = harness.press(KeyCode::Char('r'));

    // THEN: The cache is cleared and the next word is acquired and shown
    assert!(!quit);
    let screen = harness.render_to_string().unwrap();
    assert!(screen.contains("world"), "screen:\n{screen}");
    assert!(screen.contains("the earth"));
    assert_eq!(
        harness.app().service().cache().record().map(|e| e.word.as_str()),
        Some("world")
    );
}

#[test]
fn reset_returns_browse_position_to_start() {
    // GIVEN: The user has browsed away from the first definition
    let service = scripted_service(
        ScriptedWords::new(["hello", "world"]),
        ScriptedDictionary::new()
            .with_word("hello", dictionary_entry(&[("noun", &["first", "second"])]))
            .with_word("world", dictionary_entry(&[("noun", &["one", "two"])])),
        MemoryDayCache::new(),
        "2024-01-01",
    );
    let mut harness = AcceptanceTestHarness::new(service).expect("harness");
    harness.press(KeyCode::Left);
    harness.settle().unwrap();
    assert!(harness.render_to_string().unwrap().contains("second"));

    // WHEN: The user resets
    harness.press(KeyCode::Char('r'));

    // THEN: The new word opens at its first definition
    let screen = harness.render_to_string().unwrap();
    assert!(screen.contains("definition 1/2"), "screen:\n{screen}");
    assert!(screen.contains("one"));
}
