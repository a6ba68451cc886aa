//! Shared helpers for CLI commands.

use std::path::Path;

use owo_colors::{OwoColorize, Stream, Style};

use crate::config::{RenderConfig, ResourceDirs, ValidationMap};
use crate::log;

/// Outcome of resolving a configuration file.
pub struct Resolved {
    pub config: RenderConfig,
    pub validation: ValidationMap,
    pub ok: bool,
}

/// Resolve `path` with the installed template and texture directories.
pub fn resolve_config(path: &Path) -> Resolved {
    let resources = ResourceDirs::discover();
    log!("config"; "reading {}", path.display());

    let mut config = RenderConfig::new(resources);
    let mut validation = ValidationMap::new();
    let ok = config.parse(path, &mut validation);

    Resolved {
        config,
        validation,
        ok,
    }
}

/// Headline plus grouped messages, as printed by `check`.
pub fn render_report(validation: &ValidationMap, ok: bool) -> String {
    if !ok {
        let headline = "Your configuration file is invalid!";
        format!(
            "{}\n{validation}",
            headline.if_supports_color(Stream::Stderr, |t| t.style(Style::new().red().bold()))
        )
    } else if !validation.is_empty() {
        let headline = "Some notes on your configuration file:";
        format!(
            "{}\n{validation}",
            headline.if_supports_color(Stream::Stderr, |t| t.yellow())
        )
    } else {
        "Everything ok."
            .if_supports_color(Stream::Stderr, |t| t.green())
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ValidationList, ValidationMessage};

    #[test]
    fn test_report_headlines() {
        owo_colors::set_override(false);

        let empty = ValidationMap::new();
        assert_eq!(render_report(&empty, true), "Everything ok.");

        let mut notes = ValidationMap::new();
        notes.push(
            "World section 'overworld'",
            ValidationMessage::warning("Unknown configuration option 'seed'!").into(),
        );
        let report = render_report(&notes, true);
        assert!(report.starts_with("Some notes on your configuration file:\n"));
        assert!(report.contains("World section 'overworld':\n - Warning: Unknown configuration option 'seed'!\n"));

        let mut invalid = ValidationMap::new();
        let mut list = ValidationList::new();
        list.error("You have to specify an output directory ('output_dir')!");
        invalid.push("Configuration file", list);
        let report = render_report(&invalid, false);
        assert!(report.starts_with("Your configuration file is invalid!\n"));
        assert!(report.ends_with("found 1 error, 0 warnings across 1 section"));
    }
}
