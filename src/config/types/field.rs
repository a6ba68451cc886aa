//! Typed configuration field.
//!
//! Every section key is backed by a [`Field`]: an optional default, an
//! optional explicitly loaded value, and a flag telling whether the key was
//! present in the document. Raw strings are coerced through [`ConfigValue`].

use std::path::PathBuf;

use super::{ValidationList, ValidationMessage};
use crate::core::RotationSet;

/// A type a raw configuration string can be coerced into.
pub trait ConfigValue: Clone {
    fn parse_value(raw: &str) -> Option<Self>;
}

impl ConfigValue for String {
    fn parse_value(raw: &str) -> Option<Self> {
        Some(raw.to_string())
    }
}

impl ConfigValue for PathBuf {
    fn parse_value(raw: &str) -> Option<Self> {
        (!raw.is_empty()).then(|| PathBuf::from(raw))
    }
}

impl ConfigValue for i32 {
    fn parse_value(raw: &str) -> Option<Self> {
        raw.parse().ok()
    }
}

impl ConfigValue for bool {
    fn parse_value(raw: &str) -> Option<Self> {
        match raw.to_ascii_lowercase().as_str() {
            "true" | "yes" | "on" | "1" => Some(true),
            "false" | "no" | "off" | "0" => Some(false),
            _ => None,
        }
    }
}

impl ConfigValue for RotationSet {
    fn parse_value(raw: &str) -> Option<Self> {
        RotationSet::parse_names(raw).ok()
    }
}

/// One configuration key with optional default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field<T> {
    default: Option<T>,
    value: Option<T>,
    loaded: bool,
}

impl<T> Default for Field<T> {
    fn default() -> Self {
        Self {
            default: None,
            value: None,
            loaded: false,
        }
    }
}

impl<T: ConfigValue> Field<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_default(default: T) -> Self {
        Self {
            default: Some(default),
            ..Self::default()
        }
    }

    /// Coerce `raw` and store it as the explicit value.
    ///
    /// On failure an error naming `key` is recorded and the field is left
    /// untouched.
    pub fn load(&mut self, key: &str, raw: &str, validation: &mut ValidationList) -> bool {
        match T::parse_value(raw) {
            Some(value) => {
                self.value = Some(value);
                self.loaded = true;
                true
            }
            None => {
                validation.push(ValidationMessage::error(format!(
                    "Invalid value for '{key}': '{raw}'!"
                )));
                false
            }
        }
    }

    /// Replace the explicit value, e.g. after resolving a relative path.
    pub fn set_value(&mut self, value: T) {
        self.value = Some(value);
        self.loaded = true;
    }

    /// Change the fallback. Allowed at any time, also after loading.
    pub fn set_default(&mut self, default: T) {
        self.default = Some(default);
    }

    /// Whether the key was explicitly set (here or in an inherited section).
    #[inline]
    pub const fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Loaded value, or the default.
    pub fn value(&self) -> Option<&T> {
        if self.loaded {
            self.value.as_ref()
        } else {
            self.default.as_ref()
        }
    }

    /// Loaded value, or the default.
    ///
    /// # Panics
    ///
    /// If neither is present. Only call this for fields that passed
    /// [`Field::require`] or carry a default.
    pub fn get(&self) -> &T {
        self.value()
            .expect("config field read without a value or default")
    }

    pub fn has_value(&self) -> bool {
        self.value().is_some()
    }

    /// Record `message` as an error if no value is available.
    pub fn require(&self, validation: &mut ValidationList, message: &str) -> bool {
        if self.has_value() {
            return true;
        }
        validation.push(ValidationMessage::error(message));
        false
    }

    /// Combine an inherited field with an instance's own field.
    ///
    /// An explicitly loaded override wins, otherwise the inherited value is
    /// kept. Loaded flags are OR-ed so checks on "was this key set" also see
    /// inherited keys. The override's default wins over the inherited one.
    pub fn merge(defaults: &Self, overrides: &Self) -> Self {
        let (value, loaded) = if overrides.loaded {
            (overrides.value.clone(), true)
        } else {
            (defaults.value.clone(), defaults.loaded)
        };

        Self {
            default: overrides.default.clone().or_else(|| defaults.default.clone()),
            value,
            loaded,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Rotation;

    #[test]
    fn test_load_valid_value() {
        let mut list = ValidationList::new();
        let mut field = Field::<i32>::new();

        assert!(field.load("crop_min_x", "-42", &mut list));
        assert!(field.is_loaded());
        assert_eq!(field.get(), &-42);
        assert!(list.is_empty());
    }

    #[test]
    fn test_load_invalid_value_keeps_state() {
        let mut list = ValidationList::new();
        let mut field = Field::with_default(12);

        assert!(!field.load("texture_size", "huge", &mut list));
        assert!(!field.is_loaded());
        assert_eq!(field.get(), &12);
        assert_eq!(list.error_count(), 1);
        assert!(list.messages()[0].message.contains("texture_size"));
    }

    #[test]
    fn test_default_can_change_after_load() {
        let mut field = Field::<String>::new();
        assert_eq!(field.value(), None);

        field.set_default("%text".into());
        assert_eq!(field.get(), "%text");

        field.set_value("%line0".into());
        field.set_default("ignored".into());
        assert_eq!(field.get(), "%line0");
    }

    #[test]
    fn test_require() {
        let mut list = ValidationList::new();
        let empty = Field::<PathBuf>::new();
        assert!(!empty.require(&mut list, "You have to specify an input directory ('input_dir')!"));
        assert_eq!(list.messages()[0].message, "You have to specify an input directory ('input_dir')!");

        let defaulted = Field::with_default(PathBuf::from("/tmp"));
        assert!(defaulted.require(&mut list, "unused"));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_bool_and_rotation_coercion() {
        assert_eq!(bool::parse_value("Yes"), Some(true));
        assert_eq!(bool::parse_value("0"), Some(false));
        assert_eq!(bool::parse_value("maybe"), None);

        let set = RotationSet::parse_value("top-right bottom-left").unwrap();
        assert!(set.contains(Rotation::TopRight));
        assert!(!set.contains(Rotation::TopLeft));
        assert!(RotationSet::parse_value("upside-down").is_none());
    }

    #[test]
    fn test_merge_prefers_loaded_override() {
        let mut list = ValidationList::new();
        let mut global = Field::with_default(12);
        global.load("texture_size", "16", &mut list);

        let instance = Field::with_default(12);
        let merged = Field::merge(&global, &instance);
        assert_eq!(merged.get(), &16);
        assert!(merged.is_loaded());

        let mut instance = Field::with_default(12);
        instance.load("texture_size", "8", &mut list);
        let merged = Field::merge(&global, &instance);
        assert_eq!(merged.get(), &8);
    }

    #[test]
    fn test_merge_keeps_instance_default() {
        let mut global = Field::<String>::new();
        global.set_default("worlds".into());
        let mut instance = Field::<String>::new();
        instance.set_default("overworld".into());

        let merged = Field::merge(&global, &instance);
        assert!(!merged.is_loaded());
        assert_eq!(merged.get(), "overworld");
    }
}
