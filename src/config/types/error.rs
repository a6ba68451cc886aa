//! Configuration error and validation types.
//!
//! Loading the raw document can fail with a [`ConfigError`]. Everything after
//! that is validation: problems are collected as [`ValidationMessage`]s in a
//! [`ValidationList`] per section, and the lists are gathered in a
//! [`ValidationMap`] keyed by a human readable context label.

use owo_colors::{OwoColorize, Stream, Style};
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

use crate::utils::plural_count;

// ============================================================================
// ConfigError
// ============================================================================

/// Errors raised while reading the configuration document itself.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unable to read `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("syntax error on line {line}: {message}")]
    Syntax { line: usize, message: String },
}

// ============================================================================
// ValidationMessage
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Warning,
    Error,
}

/// A single validation note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationMessage {
    pub level: Level,
    pub message: String,
}

impl ValidationMessage {
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: Level::Warning,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: Level::Error,
            message: message.into(),
        }
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        self.level == Level::Error
    }
}

impl fmt::Display for ValidationMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.level {
            Level::Warning => write!(
                f,
                "{} {}",
                "Warning:".if_supports_color(Stream::Stderr, |t| t.yellow()),
                self.message
            ),
            Level::Error => write!(
                f,
                "{} {}",
                "Error:".if_supports_color(Stream::Stderr, |t| t.red()),
                self.message
            ),
        }
    }
}

// ============================================================================
// ValidationList
// ============================================================================

/// Messages collected for one section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationList {
    messages: Vec<ValidationMessage>,
}

impl ValidationList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: ValidationMessage) {
        self.messages.push(message);
    }

    pub fn warning(&mut self, message: impl Into<String>) {
        self.push(ValidationMessage::warning(message));
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(ValidationMessage::error(message));
    }

    /// True if no message is an error.
    pub fn is_valid(&self) -> bool {
        !self.messages.iter().any(ValidationMessage::is_error)
    }

    pub fn error_count(&self) -> usize {
        self.messages.iter().filter(|m| m.is_error()).count()
    }

    pub fn warning_count(&self) -> usize {
        self.messages.len() - self.error_count()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValidationMessage> {
        self.messages.iter()
    }

    pub fn messages(&self) -> &[ValidationMessage] {
        &self.messages
    }

    pub fn extend(&mut self, other: Self) {
        self.messages.extend(other.messages);
    }
}

impl From<ValidationMessage> for ValidationList {
    fn from(message: ValidationMessage) -> Self {
        Self {
            messages: vec![message],
        }
    }
}

// ============================================================================
// ValidationMap
// ============================================================================

/// Validation lists of a whole document, in the order they were produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationMap {
    entries: Vec<(String, ValidationList)>,
}

impl ValidationMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the messages of one context. Empty lists are dropped.
    pub fn push(&mut self, context: impl Into<String>, list: ValidationList) {
        if !list.is_empty() {
            self.entries.push((context.into(), list));
        }
    }

    /// True if no context holds an error.
    pub fn is_valid(&self) -> bool {
        self.entries.iter().all(|(_, list)| list.is_valid())
    }

    pub fn error_count(&self) -> usize {
        self.entries.iter().map(|(_, list)| list.error_count()).sum()
    }

    pub fn warning_count(&self) -> usize {
        self.entries.iter().map(|(_, list)| list.warning_count()).sum()
    }

    /// Number of contexts with at least one message.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ValidationList)> {
        self.entries.iter().map(|(context, list)| (context.as_str(), list))
    }

    /// Messages recorded under `context`, if any.
    pub fn get(&self, context: &str) -> Option<&ValidationList> {
        self.entries
            .iter()
            .find(|(c, _)| c == context)
            .map(|(_, list)| list)
    }
}

impl fmt::Display for ValidationMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (context, list) in &self.entries {
            writeln!(
                f,
                "{}{}",
                context.if_supports_color(Stream::Stderr, |t| t.cyan()),
                ":".if_supports_color(Stream::Stderr, |t| t.dimmed())
            )?;
            for message in list.iter() {
                writeln!(
                    f,
                    " {} {}",
                    "-".if_supports_color(Stream::Stderr, |t| t.dimmed()),
                    message
                )?;
            }
        }

        let errors = self.error_count();
        let warnings = self.warning_count();
        if errors + warnings > 0 {
            let errors = plural_count(errors, "error");
            let warnings = plural_count(warnings, "warning");
            let sections = format!("across {}", plural_count(self.entries.len(), "section"));
            write!(
                f,
                "{} {}, {} {}",
                "found".if_supports_color(Stream::Stderr, |t| t.dimmed()),
                errors.if_supports_color(Stream::Stderr, |t| t.style(Style::new().red().bold())),
                warnings.if_supports_color(Stream::Stderr, |t| t.yellow()),
                sections.if_supports_color(Stream::Stderr, |t| t.dimmed())
            )?;
        }
        Ok(())
    }
}
