//! Option schema: definitions, registration, and resolution
//!
//! The options system provides:
//! - Declarative registration of named options with flag spellings and defaults
//! - Type-checked values with enum choice validation
//! - Layered resolution: command line over configuration file over defaults

pub mod builder;
pub mod registrations;
pub mod registry;
pub mod store;
pub mod types;

pub use builder::OptionDefBuilder;
pub use registry::OptionsRegistry;
pub use store::ParsedOptions;
pub use types::{OptionDefinition, OptionSource, OptionType, OptionValue};
