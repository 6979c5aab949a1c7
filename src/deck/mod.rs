pub mod presets;

pub mod store;

pub use store::{ DeckStore, CUSTOM_DECK_KEY, WILDCARD_LANGUAGE };

#[cfg(test)]
mod store_tests;
