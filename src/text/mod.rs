//! Utterance normalization and the shared filler-word set.

/// Filler words removed during normalization and counted for the
/// clarity score. Membership is tested per whitespace-split token, so
/// the multiword entry only ever matches if a token survives splitting
/// intact (it does not; kept for parity with the counting set).
pub const FILLER_WORDS: &[&str] = &["um", "uh", "like", "you know", "so", "actually", "basically"];

/// Whether a single token is a filler word
pub fn is_filler(token: &str) -> bool {
    FILLER_WORDS.contains(&token)
}

/// Normalize a raw utterance: lowercase, strip every character that is
/// not alphanumeric, underscore, whitespace, or `?`, drop filler tokens,
/// and rejoin with single spaces.
///
/// Pure and idempotent: `normalize(normalize(x)) == normalize(x)`.
pub fn normalize(raw: &str) -> String {
    let lowered = raw.to_lowercase();
    let stripped: String = lowered
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace() || *c == '_' || *c == '?')
        .collect();

    stripped
        .split_whitespace()
        .filter(|token| !is_filler(token))
        .collect::<Vec<_>>()
        .join(" ")
}
