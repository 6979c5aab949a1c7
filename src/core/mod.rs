pub mod chunker;
pub mod errors;
pub mod models;
pub mod pipeline;

pub use errors::LexiloopError;
pub use models::{ CardSource, Flashcard, LanguageOption, RawCard, ScreenedCard, UserProfile, UserProgress };
