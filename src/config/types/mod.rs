//! Configuration utility types.
//!
//! | Module  | Purpose                                         |
//! |---------|-------------------------------------------------|
//! | `error` | Document errors and validation messages         |
//! | `field` | Typed field with default / loaded / require     |

mod error;
mod field;

pub use error::{ConfigError, Level, ValidationList, ValidationMap, ValidationMessage};
pub use field::{ConfigValue, Field};
