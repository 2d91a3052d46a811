//! Composite codec: flattening structured preference values into single string slots.
//!
//! Three encodings are supported:
//! - **Identifier lists**: comma-joined UUIDs (`a,b,c`). Decoding is strict: one bad
//!   token fails the whole field.
//! - **Recent-file lists**: entries joined by `##`, each entry `identifier,name`. Decoding
//!   is lenient: a bad identifier token is replaced by a freshly generated one.
//! - **Text blocks**: free-text segments joined by a multi-character splitter
//!   (`*#*#*#` by default). Empty segments are dropped on decode.
//!
//! No escaping is performed. A value that itself contains a separator will not survive a
//! round-trip; this keeps the persisted format compatible with existing settings files.

use crate::models::RecentFile;
use thiserror::Error;
use uuid::Uuid;

/// Splitter used between segments of include/exclude text blocks.
pub const TEXT_BLOCK_SPLITTER: &str = "*#*#*#";

/// Separator between whole entries of a recent-file list.
pub const RECENT_FILE_SEPARATOR: &str = "##";

/// Separator between fields of one entry, and between identifiers of a plain list.
pub const FIELD_SEPARATOR: char = ',';

/// Maximum number of segments exposed by the derived entry views.
pub const ENTRY_VIEW_LIMIT: usize = 10;

/// Errors raised by the strict decoders.
#[derive(Error, Debug)]
pub enum CodecError {
    #[error("Invalid identifier token '{token}': {source}")]
    InvalidIdentifier {
        token: String,
        #[source]
        source: uuid::Error,
    },
}

/// Encode identifiers as a comma-joined string of their hyphenated form.
pub fn encode_identifiers(ids: &[Uuid]) -> String {
    ids.iter()
        .map(Uuid::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

/// Decode a comma-joined identifier list.
///
/// Empty tokens are skipped. Any token that is not a valid identifier fails the whole
/// field with [`CodecError::InvalidIdentifier`].
pub fn decode_identifiers(raw: &str) -> Result<Vec<Uuid>, CodecError> {
    raw.split(FIELD_SEPARATOR)
        .filter(|token| !token.is_empty())
        .map(|token| {
            Uuid::parse_str(token.trim()).map_err(|source| CodecError::InvalidIdentifier {
                token: token.to_string(),
                source,
            })
        })
        .collect()
}

/// Encode a list of plain strings as a comma-joined string.
pub fn encode_string_list(items: &[String]) -> String {
    items.join(",")
}

/// Decode a comma-joined string list, dropping empty tokens.
pub fn decode_string_list(raw: &str) -> Vec<String> {
    raw.split(FIELD_SEPARATOR)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Encode recent files as `id,name##id,name...`.
pub fn encode_recent_files(files: &[RecentFile]) -> String {
    files
        .iter()
        .map(|file| format!("{}{}{}", file.id, FIELD_SEPARATOR, file.file_name))
        .collect::<Vec<_>>()
        .join(RECENT_FILE_SEPARATOR)
}

/// Decode a recent-file list.
///
/// Each non-empty `##` segment yields exactly one entry. The segment is split on commas
/// (empty tokens dropped); the first token is parsed as the identifier and the last token
/// is taken as the name. A name that contains commas therefore loses everything before its
/// final comma-separated part. A token that fails to parse gets a fresh random identifier
/// instead of failing the field.
pub fn decode_recent_files(raw: &str) -> Vec<RecentFile> {
    raw.split(RECENT_FILE_SEPARATOR)
        .filter(|segment| !segment.is_empty())
        .map(decode_recent_file_entry)
        .collect()
}

fn decode_recent_file_entry(segment: &str) -> RecentFile {
    let tokens: Vec<&str> = segment
        .split(FIELD_SEPARATOR)
        .filter(|token| !token.is_empty())
        .collect();

    let file_name = tokens.last().copied().unwrap_or_default().to_string();
    let id = tokens
        .first()
        .and_then(|token| Uuid::parse_str(token.trim()).ok())
        .unwrap_or_else(|| {
            tracing::debug!("Recent file entry '{}' has no valid identifier", segment);
            Uuid::new_v4()
        });

    RecentFile { id, file_name }
}

/// Join text segments with the given splitter.
pub fn encode_text_block<S: AsRef<str>>(segments: &[S], splitter: &str) -> String {
    segments
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(splitter)
}

/// Split a text block on the given splitter, dropping empty segments.
pub fn decode_text_block(raw: &str, splitter: &str) -> Vec<String> {
    raw.split(splitter)
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}

/// The bounded view over a text block: the first [`ENTRY_VIEW_LIMIT`] non-empty segments.
pub fn text_block_entries(raw: &str, splitter: &str) -> Vec<String> {
    raw.split(splitter)
        .filter(|segment| !segment.is_empty())
        .take(ENTRY_VIEW_LIMIT)
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const ID_A: &str = "0b9f5a6e-3c1d-4f2a-9e8b-7c6d5e4f3a21";
    const ID_B: &str = "6f1e2d3c-4b5a-4968-8776-a5b4c3d2e1f0";

    #[test]
    fn test_identifiers_round_trip() {
        let ids = vec![
            Uuid::parse_str(ID_A).unwrap(),
            Uuid::parse_str(ID_B).unwrap(),
        ];

        let encoded = encode_identifiers(&ids);
        assert_eq!(encoded, format!("{},{}", ID_A, ID_B));
        assert_eq!(decode_identifiers(&encoded).unwrap(), ids);
    }

    #[test]
    fn test_decode_identifiers_skips_empty_tokens() {
        let decoded = decode_identifiers(&format!(",{},,", ID_A)).unwrap();
        assert_eq!(decoded, vec![Uuid::parse_str(ID_A).unwrap()]);
        assert!(decode_identifiers("").unwrap().is_empty());
    }

    #[test]
    fn test_decode_identifiers_is_strict() {
        let result = decode_identifiers(&format!("{},not-a-guid", ID_A));
        match result {
            Err(CodecError::InvalidIdentifier { token, .. }) => assert_eq!(token, "not-a-guid"),
            other => panic!("Expected InvalidIdentifier, got {:?}", other),
        }
    }

    #[test]
    fn test_recent_files_encoding_format() {
        let files = vec![
            RecentFile::new(Uuid::parse_str(ID_A).unwrap(), "a.log"),
            RecentFile::new(Uuid::parse_str(ID_B).unwrap(), "b.log"),
        ];

        assert_eq!(
            encode_recent_files(&files),
            format!("{},a.log##{},b.log", ID_A, ID_B)
        );
    }

    #[test]
    fn test_decode_recent_files_generates_id_for_bad_token() {
        let raw = format!("garbage,first.log##{},second.log", ID_B);
        let files = decode_recent_files(&raw);

        assert_eq!(files.len(), 2);
        assert_eq!(files[0].file_name, "first.log");
        assert_ne!(files[0].id, Uuid::nil());
        assert_eq!(files[1].id, Uuid::parse_str(ID_B).unwrap());
        assert_eq!(files[1].file_name, "second.log");
    }

    #[test]
    fn test_decode_recent_files_takes_last_token_as_name() {
        // Commas inside a name are not escaped; only the final token survives.
        let raw = format!("{},reports,2024,final.log", ID_A);
        let files = decode_recent_files(&raw);

        assert_eq!(files.len(), 1);
        assert_eq!(files[0].id, Uuid::parse_str(ID_A).unwrap());
        assert_eq!(files[0].file_name, "final.log");
    }

    #[test]
    fn test_decode_recent_files_segment_without_comma() {
        let files = decode_recent_files("orphan.log");

        assert_eq!(files.len(), 1);
        assert_eq!(files[0].file_name, "orphan.log");
    }

    #[test]
    fn test_decode_recent_files_all_comma_segment() {
        let files = decode_recent_files(",,,");

        assert_eq!(files.len(), 1);
        assert!(files[0].file_name.is_empty());
    }

    #[test]
    fn test_text_block_drops_empty_segments() {
        let raw = "*#*#*#alpha*#*#*#*#*#*#beta";
        assert_eq!(
            decode_text_block(raw, TEXT_BLOCK_SPLITTER),
            vec!["alpha".to_string(), "beta".to_string()]
        );
    }

    #[test]
    fn test_text_block_entries_capped() {
        let segments: Vec<String> = (0..15).map(|i| format!("entry{}", i)).collect();
        let raw = encode_text_block(&segments, TEXT_BLOCK_SPLITTER);

        let entries = text_block_entries(&raw, TEXT_BLOCK_SPLITTER);
        assert_eq!(entries.len(), ENTRY_VIEW_LIMIT);
        assert_eq!(entries[0], "entry0");
        assert_eq!(entries[9], "entry9");
    }

    #[test]
    fn test_string_list_round_trip() {
        let logs = vec!["Application".to_string(), "System".to_string()];
        let encoded = encode_string_list(&logs);
        assert_eq!(encoded, "Application,System");
        assert_eq!(decode_string_list(&encoded), logs);
        assert!(decode_string_list("").is_empty());
    }
}
