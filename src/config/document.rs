//! Raw configuration document.
//!
//! The document is an INI-like file made of a root section followed by typed,
//! named sections:
//!
//! ```text
//! output_dir = output
//!
//! [global:maps]
//! texture_size = 16
//!
//! [world:overworld]
//! input_dir = worlds/overworld
//!
//! [map:day]
//! world = overworld
//! rotations = top-left bottom-right
//! ```
//!
//! Entries keep file order. Nothing here knows what the keys mean.

use std::fs;
use std::path::Path;

use super::types::ConfigError;

/// Section types understood by the resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    World,
    Map,
    Marker,
    Global(GlobalKind),
    Unknown,
}

/// Reserved `global:*` sections carrying inherited defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlobalKind {
    Worlds,
    Maps,
    Marker,
}

impl GlobalKind {
    /// Section name following `global:`.
    pub const fn section_name(&self) -> &'static str {
        match self {
            Self::Worlds => "worlds",
            Self::Maps => "maps",
            Self::Marker => "marker",
        }
    }
}

/// A section with its entries in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigSection {
    kind: String,
    name: String,
    entries: Vec<(String, String)>,
}

impl ConfigSection {
    pub fn new(kind: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            name: name.into(),
            entries: Vec::new(),
        }
    }

    /// Builder used by tests and callers that assemble documents in memory.
    pub fn with_entry(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.push(key, value);
        self
    }

    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.push((key.into(), value.into()));
    }

    /// Declared type as written (`world` in `[world:overworld]`).
    pub fn type_name(&self) -> &str {
        &self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// `type:name`, as used in messages.
    pub fn name_type(&self) -> String {
        format!("{}:{}", self.kind, self.name)
    }

    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    /// Last value written for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn kind(&self) -> SectionKind {
        match (self.kind.as_str(), self.name.as_str()) {
            ("world", _) => SectionKind::World,
            ("map", _) => SectionKind::Map,
            ("marker", _) => SectionKind::Marker,
            ("global", "worlds") => SectionKind::Global(GlobalKind::Worlds),
            ("global", "maps") => SectionKind::Global(GlobalKind::Maps),
            ("global", "marker") => SectionKind::Global(GlobalKind::Marker),
            _ => SectionKind::Unknown,
        }
    }
}

/// A whole configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigDocument {
    root: ConfigSection,
    sections: Vec<ConfigSection>,
}

impl ConfigDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read and tokenize a file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::parse_str(&content)
    }

    /// Tokenize document text.
    pub fn parse_str(content: &str) -> Result<Self, ConfigError> {
        let mut document = Self::new();
        let mut current: Option<ConfigSection> = None;

        for (index, raw_line) in content.lines().enumerate() {
            let line_no = index + 1;
            let line = raw_line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
                continue;
            }

            if let Some(header) = line.strip_prefix('[') {
                let section = parse_header(header, line_no)?;
                if let Some(finished) = current.replace(section) {
                    document.sections.push(finished);
                }
                continue;
            }

            let Some((key, value)) = line.split_once('=') else {
                return Err(ConfigError::Syntax {
                    line: line_no,
                    message: format!("expected 'key = value', found '{line}'"),
                });
            };
            let key = key.trim();
            if key.is_empty() {
                return Err(ConfigError::Syntax {
                    line: line_no,
                    message: "empty key".into(),
                });
            }

            current
                .as_mut()
                .unwrap_or(&mut document.root)
                .push(key, value.trim());
        }

        if let Some(finished) = current {
            document.sections.push(finished);
        }
        Ok(document)
    }

    pub fn root(&self) -> &ConfigSection {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut ConfigSection {
        &mut self.root
    }

    pub fn add_section(&mut self, section: ConfigSection) {
        self.sections.push(section);
    }

    /// All named sections in file order.
    pub fn sections(&self) -> &[ConfigSection] {
        &self.sections
    }

    pub fn has_section(&self, kind: &str, name: &str) -> bool {
        self.section(kind, name).is_some()
    }

    /// First section with this type and name.
    pub fn section(&self, kind: &str, name: &str) -> Option<&ConfigSection> {
        self.sections
            .iter()
            .find(|s| s.kind == kind && s.name == name)
    }

    pub fn global_section(&self, kind: GlobalKind) -> Option<&ConfigSection> {
        self.section("global", kind.section_name())
    }
}

/// Parse the part of a header line after `[`.
fn parse_header(header: &str, line_no: usize) -> Result<ConfigSection, ConfigError> {
    let Some(inner) = header.strip_suffix(']') else {
        return Err(ConfigError::Syntax {
            line: line_no,
            message: "section header is missing ']'".into(),
        });
    };

    let (kind, name) = match inner.split_once(':') {
        Some((kind, name)) => (kind.trim(), name.trim()),
        None => ("", inner.trim()),
    };
    if name.is_empty() {
        return Err(ConfigError::Syntax {
            line: line_no,
            message: "section name is empty".into(),
        });
    }
    Ok(ConfigSection::new(kind, name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sections_in_order() {
        let doc = ConfigDocument::parse_str(
            "output_dir = out\n\
             # comment\n\
             [world:overworld]\n\
             input_dir = worlds/main\n\
             crop_radius = 100\n\
             \n\
             ; another comment\n\
             [map:day]\n\
             world = overworld\n",
        )
        .unwrap();

        assert_eq!(doc.root().get("output_dir"), Some("out"));
        assert_eq!(doc.sections().len(), 2);

        let world = &doc.sections()[0];
        assert_eq!(world.kind(), SectionKind::World);
        assert_eq!(world.name(), "overworld");
        assert_eq!(
            world.entries(),
            &[
                ("input_dir".to_string(), "worlds/main".to_string()),
                ("crop_radius".to_string(), "100".to_string()),
            ]
        );
        assert_eq!(doc.sections()[1].name_type(), "map:day");
    }

    #[test]
    fn test_value_keeps_inner_equals_and_spaces() {
        let doc = ConfigDocument::parse_str("[marker:signs]\ntitle_format = a = b  c \n").unwrap();
        assert_eq!(doc.sections()[0].get("title_format"), Some("a = b  c"));
    }

    #[test]
    fn test_global_sections_classified() {
        let doc =
            ConfigDocument::parse_str("[global:worlds]\n[global:maps]\n[global:marker]\n[global:other]\n[plain]\n")
                .unwrap();
        let kinds: Vec<_> = doc.sections().iter().map(ConfigSection::kind).collect();
        assert_eq!(
            kinds,
            vec![
                SectionKind::Global(GlobalKind::Worlds),
                SectionKind::Global(GlobalKind::Maps),
                SectionKind::Global(GlobalKind::Marker),
                SectionKind::Unknown,
                SectionKind::Unknown,
            ]
        );
        assert_eq!(doc.sections()[4].type_name(), "");
        assert!(doc.global_section(GlobalKind::Marker).is_some());
    }

    #[test]
    fn test_syntax_errors() {
        let err = ConfigDocument::parse_str("output_dir = out\njust words\n").unwrap_err();
        assert!(matches!(err, ConfigError::Syntax { line: 2, .. }));

        let err = ConfigDocument::parse_str("[world:broken\n").unwrap_err();
        assert!(matches!(err, ConfigError::Syntax { line: 1, .. }));

        let err = ConfigDocument::parse_str("[map:]\n").unwrap_err();
        assert!(matches!(err, ConfigError::Syntax { line: 1, .. }));
    }

    #[test]
    fn test_load_missing_file() {
        let err = ConfigDocument::load(Path::new("/definitely/not/here.conf")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(..)));
    }
}
