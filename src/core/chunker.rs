/// Upstream generation requests reject oversized payloads, so documents are
/// split into bounded chunks before anything is sent.
pub const DEFAULT_CHUNK_SIZE: usize = 4000;

/// Splits `text` into line-aligned chunks of at most `max_length` characters.
///
/// Lines are never split: a chunk boundary only ever falls between lines, so
/// a single line longer than `max_length` ends up alone in an oversized
/// chunk. Each line is rejoined with a trailing newline. A trailing buffer
/// that is all whitespace is discarded, which means empty or whitespace-only
/// input produces no chunks at all.
pub fn chunk_text(text: &str, max_length: usize) -> Vec<String> {
    let mut chunks: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_chars: usize = 0;

    for line in text.split('\n') {
        let line_chars = line.chars().count();

        if current_chars + line_chars > max_length && !current.is_empty() {
            chunks.push(std::mem::take(&mut current));
            current_chars = 0;
        }

        current.push_str(line);
        current.push('\n');
        current_chars += line_chars + 1;
    }

    if !current.trim().is_empty() {
        chunks.push(current);
    }

    chunks
}
