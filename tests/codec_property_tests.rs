//! Property-based tests for the composite codec and profile views
//!
//! These tests verify, for values free of separator characters:
//! - Recent-file, identifier and text-block encodings round-trip
//! - Derived entry views never exceed ten elements and keep order
//! - A single malformed identifier fails a plain list but not a recent-file list

use logview_prefs::codec::{
    self, ENTRY_VIEW_LIMIT, TEXT_BLOCK_SPLITTER, decode_identifiers, decode_recent_files,
    decode_text_block, encode_identifiers, encode_recent_files, encode_text_block,
};
use logview_prefs::{RecentFile, UserProfile};
use proptest::prelude::*;
use uuid::Uuid;

fn uuid_strategy() -> impl Strategy<Value = Uuid> {
    any::<u128>().prop_map(Uuid::from_u128)
}

// Non-empty, no commas, no '#' or '*', so no separator can appear.
fn segment_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z0-9 ._-]{1,16}"
}

fn recent_file_strategy() -> impl Strategy<Value = RecentFile> {
    (uuid_strategy(), segment_strategy()).prop_map(|(id, name)| RecentFile::new(id, name))
}

proptest! {
    #[test]
    fn recent_files_round_trip(files in prop::collection::vec(recent_file_strategy(), 0..12)) {
        let encoded = encode_recent_files(&files);
        prop_assert_eq!(decode_recent_files(&encoded), files);
    }

    #[test]
    fn identifiers_round_trip(ids in prop::collection::vec(uuid_strategy(), 0..12)) {
        let encoded = encode_identifiers(&ids);
        prop_assert_eq!(decode_identifiers(&encoded).unwrap(), ids);
    }

    #[test]
    fn text_block_round_trip(segments in prop::collection::vec(segment_strategy(), 0..20)) {
        let encoded = encode_text_block(&segments, TEXT_BLOCK_SPLITTER);
        prop_assert_eq!(decode_text_block(&encoded, TEXT_BLOCK_SPLITTER), segments);
    }

    #[test]
    fn entry_views_are_bounded_prefixes(segments in prop::collection::vec(segment_strategy(), 0..30)) {
        let raw = encode_text_block(&segments, TEXT_BLOCK_SPLITTER);
        let profile = UserProfile {
            include_text: raw.clone(),
            excluded_text: raw,
            ..UserProfile::default()
        };

        let expected: Vec<String> = segments.iter().take(ENTRY_VIEW_LIMIT).cloned().collect();
        prop_assert!(profile.include_entries().len() <= ENTRY_VIEW_LIMIT);
        prop_assert_eq!(profile.include_entries(), expected.clone());
        prop_assert_eq!(profile.excluded_entries(), expected);
    }

    #[test]
    fn one_bad_identifier_is_lenient_only_for_recent_files(
        files in prop::collection::vec(recent_file_strategy(), 1..8),
        bad_index in any::<prop::sample::Index>(),
    ) {
        let mut files = files;
        let position = bad_index.index(files.len());
        let mut raw_entries: Vec<String> = files
            .iter()
            .map(|file| format!("{},{}", file.id, file.file_name))
            .collect();
        raw_entries[position] = format!("zz-not-an-id,{}", files[position].file_name);

        let decoded = decode_recent_files(&raw_entries.join("##"));
        prop_assert_eq!(decoded.len(), files.len());
        prop_assert_eq!(&decoded[position].file_name, &files[position].file_name);

        files.remove(position);
        let mut ids: Vec<String> = files.iter().map(|file| file.id.to_string()).collect();
        ids.insert(position.min(ids.len()), "zz-not-an-id".to_string());
        prop_assert!(decode_identifiers(&ids.join(",")).is_err());
    }
}

#[test]
fn test_add_include_entry_repeat_leaves_field_unchanged() {
    let mut profile = UserProfile::default();
    profile.add_include_entry("x");
    let raw = profile.include_text.clone();

    profile.add_include_entry("x");
    assert_eq!(profile.include_text, raw);
    assert_eq!(codec::decode_text_block(&raw, TEXT_BLOCK_SPLITTER), vec!["x"]);
}
