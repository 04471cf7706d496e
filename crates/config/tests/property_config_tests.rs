//! Property-based tests for filename resolution and properties parsing.
//!
//! Test coverage:
//! - Filename resolution: suffix appended exactly when missing
//! - Simple assignments: keys and values come back exactly as written
//! - Escaped text: any string survives being written with escapes
//! - Lookups: absent keys yield `None` and the caller's fallback

use proptest::prelude::*;

use propmanager_config::properties::parse;
use propmanager_config::{BundledSource, StoreLoader, resolve_filename};

/// Strategy for profile names that do not already end with the suffix.
fn bare_profile_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_\\-./]{0,24}".prop_filter("must not already carry the suffix", |p| {
        !p.ends_with(".properties")
    })
}

/// Strategy for keys that need no escaping.
fn plain_key_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z][a-zA-Z0-9_.\\-]{0,20}".prop_map(String::from)
}

/// Strategy for values that need no escaping and carry no leading whitespace.
fn plain_value_strategy() -> impl Strategy<Value = String> {
    "([a-zA-Z0-9_.,/@-][a-zA-Z0-9_.,/@ -]{0,30})?".prop_map(String::from)
}

/// Write `text` the way a properties writer would, escaping as needed.
fn escape(text: &str, is_key: bool) -> String {
    let mut out = String::new();
    for (i, c) in text.chars().enumerate() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\x0c' => out.push_str("\\f"),
            '=' | ':' | '#' | '!' => {
                out.push('\\');
                out.push(c);
            }
            ' ' if is_key || i == 0 => out.push_str("\\ "),
            c if (c as u32) < 0x20 || (c as u32) > 0x7e => {
                let mut units = [0u16; 2];
                for unit in c.encode_utf16(&mut units) {
                    out.push_str(&format!("\\u{:04X}", unit));
                }
            }
            c => out.push(c),
        }
    }
    out
}

proptest! {
    #[test]
    fn prop_suffix_appended_when_missing(profile in bare_profile_strategy()) {
        prop_assert_eq!(resolve_filename(Some(profile.as_str())), format!("{profile}.properties"));
    }

    #[test]
    fn prop_suffix_kept_when_present(stem in "[a-zA-Z0-9_\\-]{0,24}") {
        let profile = format!("{stem}.properties");
        prop_assert_eq!(resolve_filename(Some(profile.as_str())), profile.clone());
    }

    #[test]
    fn prop_plain_assignments_round_trip(
        entries in prop::collection::btree_map(plain_key_strategy(), plain_value_strategy(), 0..16),
        separator in prop_oneof![Just("="), Just(":"), Just(" = "), Just(" ")],
    ) {
        let text: String = entries
            .iter()
            .map(|(k, v)| format!("{k}{separator}{v}\n"))
            .collect();
        let parsed = parse(&text).unwrap();

        prop_assert_eq!(parsed.len(), entries.len());
        for (key, value) in &entries {
            prop_assert_eq!(parsed.get(key), Some(value));
        }
    }

    #[test]
    fn prop_escaped_text_survives(key in "\\PC{1,12}", value in "\\PC{0,24}") {
        let line = format!("{}={}", escape(&key, true), escape(&value, false));
        let parsed = parse(&line).unwrap();
        prop_assert_eq!(parsed.get(&key), Some(&value));
    }

    #[test]
    fn prop_absent_keys_use_fallback(
        key in plain_key_strategy(),
        fallback in plain_value_strategy(),
    ) {
        let store = StoreLoader::new()
            .with_profile("empty")
            .with_source(BundledSource::new().with_resource("empty.properties", "# nothing\n"))
            .build()
            .unwrap();

        prop_assert_eq!(store.get(&key), None);
        prop_assert_eq!(store.get_or(&key, &fallback), fallback.as_str());
    }
}
