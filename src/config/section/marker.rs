//! `[marker:<name>]` section.
//!
//! A marker group turns in-world signs starting with `prefix` into viewer
//! markers.
//!
//! # Example
//!
//! ```text
//! [marker:homes]
//! prefix = [home]
//! title_format = Home of %text
//! text_format = %textp at the lake
//! icon = home.png
//! icon_size = [32, 32]
//! ```
//!
//! Format placeholders:
//!
//! | Placeholder         | Replaced with                                |
//! |---------------------|----------------------------------------------|
//! | `%textp`            | full sign text, prefix included              |
//! | `%text`             | sign text after the prefix, trimmed          |
//! | `%line0`..`%line3`  | individual sign lines                        |

use std::path::Path;

use super::{Section, unknown_option};
use crate::config::document::ConfigSection;
use crate::config::types::{Field, ValidationList};
use crate::world::BlockPos;

const DEFAULT_TITLE_FORMAT: &str = "%text";
const DEFAULT_ICON_SIZE: &str = "[24, 24]";

/// A sign found in the world.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sign {
    pub pos: BlockPos,
    pub lines: [String; 4],
}

impl Sign {
    pub fn new(pos: BlockPos, lines: [String; 4]) -> Self {
        Self { pos, lines }
    }

    /// Non-empty lines joined by a single space.
    pub fn text(&self) -> String {
        self.lines
            .iter()
            .map(|line| line.trim())
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkerSection {
    global: bool,
    name: String,

    prefix: Field<String>,
    title_format: Field<String>,
    text_format: Field<String>,
    icon: Field<String>,
    icon_size: Field<String>,
}

impl MarkerSection {
    /// The `[global:marker]` defaults.
    pub fn global() -> Self {
        Self::blank("marker", true)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn prefix(&self) -> &str {
        self.prefix.get()
    }

    pub fn title_format(&self) -> &str {
        self.title_format.get()
    }

    /// Defaults to the resolved title format.
    pub fn text_format(&self) -> &str {
        self.text_format.get()
    }

    /// Icon file, empty for the viewer's default icon.
    pub fn icon(&self) -> &str {
        self.icon.get()
    }

    pub fn icon_size(&self) -> &str {
        self.icon_size.get()
    }

    /// `icon_size` as `(width, height)` in pixels.
    pub fn icon_dimensions(&self) -> Option<(u32, u32)> {
        parse_icon_size(self.icon_size())
    }

    pub fn matches_sign(&self, sign: &Sign) -> bool {
        sign.text().starts_with(self.prefix())
    }

    pub fn format_title(&self, sign: &Sign) -> String {
        self.format_sign(self.title_format(), sign)
    }

    pub fn format_text(&self, sign: &Sign) -> String {
        self.format_sign(self.text_format(), sign)
    }

    fn format_sign(&self, format: &str, sign: &Sign) -> String {
        let full = sign.text();
        let text = full
            .strip_prefix(self.prefix())
            .map(str::trim)
            .unwrap_or_default();

        // %textp before %text, which is its prefix
        let mut out = format.replace("%textp", &full).replace("%text", text);
        for (i, line) in sign.lines.iter().enumerate() {
            out = out.replace(&format!("%line{i}"), line);
        }
        out
    }
}

/// Parse `[width, height]` with positive sizes.
fn parse_icon_size(raw: &str) -> Option<(u32, u32)> {
    let inner = raw.trim().strip_prefix('[')?.strip_suffix(']')?;
    let (width, height) = inner.split_once(',')?;
    let width: u32 = width.trim().parse().ok()?;
    let height: u32 = height.trim().parse().ok()?;
    (width > 0 && height > 0).then_some((width, height))
}

impl Section for MarkerSection {
    fn blank(name: &str, global: bool) -> Self {
        Self {
            global,
            name: name.to_string(),
            prefix: Field::with_default(String::new()),
            title_format: Field::with_default(DEFAULT_TITLE_FORMAT.to_string()),
            text_format: Field::new(),
            icon: Field::with_default(String::new()),
            icon_size: Field::with_default(DEFAULT_ICON_SIZE.to_string()),
        }
    }

    fn is_global(&self) -> bool {
        self.global
    }

    fn load(&mut self, section: &ConfigSection, _config_dir: &Path, validation: &mut ValidationList) {
        for (key, value) in section.entries() {
            match key.as_str() {
                "prefix" => {
                    self.prefix.load(key, value, validation);
                }
                "title_format" => {
                    self.title_format.load(key, value, validation);
                }
                "text_format" => {
                    self.text_format.load(key, value, validation);
                }
                "icon" => {
                    self.icon.load(key, value, validation);
                }
                "icon_size" => {
                    self.icon_size.load(key, value, validation);
                }
                _ => unknown_option(key, validation),
            }
        }
    }

    fn merge(defaults: &Self, overrides: &Self) -> Self {
        Self {
            global: overrides.global,
            name: overrides.name.clone(),
            prefix: Field::merge(&defaults.prefix, &overrides.prefix),
            title_format: Field::merge(&defaults.title_format, &overrides.title_format),
            text_format: Field::merge(&defaults.text_format, &overrides.text_format),
            icon: Field::merge(&defaults.icon, &overrides.icon),
            icon_size: Field::merge(&defaults.icon_size, &overrides.icon_size),
        }
    }

    fn validate(&mut self, validation: &mut ValidationList) {
        let title = self.title_format.get().clone();
        self.text_format.set_default(title);

        if parse_icon_size(self.icon_size.get()).is_none() {
            validation.error(format!(
                "'icon_size' must have the format '[width, height]'! '{}' is invalid!",
                self.icon_size.get()
            ));
        }
    }

    fn inherit(&self) -> Self {
        let mut section = self.clone();
        section.global = false;
        section
    }
}
