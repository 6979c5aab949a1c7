use crate::core::LexiloopError;

/// Vocabulary lists rarely run long; anything past this is ignored rather
/// than ballooning the generation workload.
pub const MAX_PAGES: usize = 20;

/// Pulls plain text out of a PDF, up to [`MAX_PAGES`] pages. Page texts are
/// joined with newlines so the chunker sees page breaks as line boundaries.
///
/// A document that cannot be parsed at all is a hard error; the caller is
/// expected to surface it as "error processing document" rather than retry.
pub fn extract_text_from_pdf(document: &[u8]) -> Result<String, LexiloopError> {
    let pages = pdf_extract::extract_text_from_mem_by_pages(document)?;

    let mut full_text = String::new();
    for page in pages.iter().take(MAX_PAGES) {
        full_text.push_str(page);
        full_text.push('\n');
    }

    Ok(full_text)
}
