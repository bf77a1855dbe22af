//! Whitespace tokenization shared by the walker and the chunker
//!
//! A token is a maximal run of non-whitespace characters. Leading and
//! trailing whitespace never produce empty tokens, and the original
//! whitespace layout is not kept: chunks are re-joined with a single space.

/// Separator used when joining the tokens of one chunk
pub const TOKEN_SEPARATOR: &str = " ";

/// Split text into whitespace-delimited tokens, in document order
pub fn tokenize(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Count whitespace-delimited tokens without allocating the token list
pub fn count_tokens(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Group tokens into consecutive chunks of `chunk_size` and join each chunk
///
/// The last chunk may be shorter. An empty token list yields no chunks.
/// `chunk_size` must be non-zero; callers validate it through `SplitConfig`.
pub fn chunk_tokens<'a>(
    tokens: &'a [&'a str],
    chunk_size: usize,
) -> impl Iterator<Item = (usize, String)> + 'a {
    tokens
        .chunks(chunk_size)
        .map(|chunk| (chunk.len(), chunk.join(TOKEN_SEPARATOR)))
}
