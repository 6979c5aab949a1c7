use std::time::Instant;

use chrono::Utc;

use super::{
    chunker::{
        chunk_text,
        DEFAULT_CHUNK_SIZE,
    },
    models::{
        CardSource,
        Flashcard,
        RawCard,
        ScreenedCard,
    },
    LexiloopError,
};
use crate::extraction;

/// The external structured-generation service, seen through one operation:
/// turn a chunk of source text into candidate vocabulary entries for the
/// given language. Implementations decide transport and prompting.
#[allow(async_fn_in_trait)]
pub trait CardOracle {
    async fn generate_cards(
        &self,
        chunk: &str,
        language: &str,
    ) -> Result<Vec<RawCard>, LexiloopError>;
}

/// Full document import: extract text, then hand off to the text pipeline.
/// Extraction is the only step that can fail the run; everything after it
/// degrades per chunk instead.
pub async fn generate_flashcards_from_document<O: CardOracle>(
    oracle: &O,
    document: &[u8],
    language: &str,
    on_progress: impl FnMut(&str),
) -> Result<Vec<Flashcard>, LexiloopError> {
    let text = extraction::extract_text_from_pdf(document)?;
    Ok(generate_flashcards_from_text(oracle, &text, language, on_progress).await)
}

/// Chunks the text and issues one generation request per chunk, strictly in
/// order. A failed chunk contributes nothing and the loop moves on; the
/// caller only ever sees the merged result. An empty result means no usable
/// vocabulary was found, not that the run failed.
pub async fn generate_flashcards_from_text<O: CardOracle>(
    oracle: &O,
    text: &str,
    language: &str,
    mut on_progress: impl FnMut(&str),
) -> Vec<Flashcard> {
    let total_start = Instant::now();

    let chunks = chunk_text(text, DEFAULT_CHUNK_SIZE);
    let total = chunks.len();
    println!("Split document into {} chunks", total);

    let mut accumulated: Vec<RawCard> = Vec::new();

    for (i, chunk) in chunks.iter().enumerate() {
        on_progress(&format!("Processing part {} of {}...", i + 1, total));

        match oracle.generate_cards(chunk, language).await {
            Ok(cards) => accumulated.extend(cards),
            Err(e) => {
                // A single bad chunk must not sink the whole import.
                eprintln!("Chunk {} of {} failed: {}", i + 1, total, e);
            }
        }
    }

    let cards = normalize_cards(accumulated, language);

    println!(
        "Generated {} cards for '{}' ({:.1}s)",
        cards.len(),
        language,
        total_start.elapsed().as_secs_f32()
    );

    cards
}

/// Merges raw candidates from all chunks, in chunk order, into canonical
/// cards: screened for blank required fields, stamped with a fresh batch id,
/// lowercase language key, and document provenance.
pub fn normalize_cards(raw_candidates: Vec<RawCard>, language: &str) -> Vec<Flashcard> {
    let batch = Utc::now().timestamp_millis();
    let language = language.to_lowercase();

    let mut cards = Vec::new();
    let mut rejected = 0;

    for (index, candidate) in raw_candidates.into_iter().enumerate() {
        match candidate.screen() {
            ScreenedCard::Valid { word, meaning, example, pronunciation } => {
                cards.push(Flashcard {
                    id: format!("gen-{}-{}", batch, index),
                    word,
                    pronunciation,
                    meaning,
                    example,
                    language: language.clone(),
                    source: CardSource::GeneratedFromDocument,
                });
            }
            ScreenedCard::Rejected => rejected += 1,
        }
    }

    if rejected > 0 {
        eprintln!("Dropped {} candidates with blank required fields", rejected);
    }

    cards
}
