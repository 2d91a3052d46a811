use camino::Utf8Path;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Semantic field of a log message that a parsed column can be mapped to.
///
/// Serialized by variant name (`"Level"`). Mappings persisted with numeric enum values
/// (`{"0":3}`) do not decode, and the parser settings holding them load as defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LogField {
    Date,
    Id,
    Text,
    Category,
    Source,
    Module,
    MethodName,
    FileName,
    LineNumber,
    ProcessId,
    Thread,
    Level,
    Class,
    User,
    Parameters,
    RawText,
    MachineName,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParserSettingsError {
    #[error("Column index {0} is already mapped")]
    DuplicateMap(i32),
}

/// How to parse a class of external log files (layout, splitter, column mapping).
///
/// Persisted as a single JSON slot in which every field is required. A fresh instance is
/// unconfigured; [`configure`] supplies every field at once and marks it configured.
///
/// [`configure`]: LogParserSettings::configure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LogParserSettings {
    pub supported_files_extensions: Vec<String>,
    pub is_configured: bool,
    pub splitter: String,
    pub layout: String,
    pub maps: IndexMap<i32, LogField>,
}

impl LogParserSettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace layout, splitter, extensions and mapping together and mark as configured.
    ///
    /// A missing mapping becomes an empty one.
    pub fn configure(
        &mut self,
        layout: impl Into<String>,
        splitter: impl Into<String>,
        supported_files_extensions: Vec<String>,
        maps: Option<IndexMap<i32, LogField>>,
    ) {
        self.layout = layout.into();
        self.splitter = splitter.into();
        self.supported_files_extensions = supported_files_extensions;
        self.maps = maps.unwrap_or_default();
        self.is_configured = true;
    }

    /// Whether this is a state that may be persisted: either configured, or untouched
    /// defaults. An unconfigured object carrying any layout, splitter, extension or
    /// mapping is a partial configuration.
    pub fn is_consistent(&self) -> bool {
        self.is_configured || *self == Self::default()
    }

    /// Map a column index to a field. Fails if the index is already mapped.
    pub fn add_map(&mut self, index: i32, field: LogField) -> Result<(), ParserSettingsError> {
        if self.maps.contains_key(&index) {
            return Err(ParserSettingsError::DuplicateMap(index));
        }
        self.maps.insert(index, field);
        Ok(())
    }

    /// Check whether a file can be parsed with these settings.
    ///
    /// True when some supported extension ends with the file's extension, ignoring case.
    /// The extension is everything after the last dot of the file name, so a dot-file such
    /// as `.log` has extension `log`. Entries are accepted with or without the leading dot.
    /// Empty paths and paths with no extension never match.
    pub fn can_open_file(&self, path: &str) -> bool {
        if path.is_empty() {
            return false;
        }

        let extension = match Utf8Path::new(path)
            .file_name()
            .and_then(|name| name.rsplit_once('.'))
        {
            Some((_, ext)) if !ext.is_empty() => ext.to_lowercase(),
            _ => return false,
        };
        let dotted = format!(".{}", extension);

        self.supported_files_extensions.iter().any(|supported| {
            let supported = supported.to_lowercase();
            supported.ends_with(&dotted) || supported == extension
        })
    }
}
