pub mod core;
pub mod deck;
pub mod extraction;
pub mod llm;
pub mod persistence;
pub mod profile;

pub use crate::core::{Flashcard, LanguageOption, LexiloopError};
