pub mod languages;

pub use languages::{Language, LanguageRegistry};
