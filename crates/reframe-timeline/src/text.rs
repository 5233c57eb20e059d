//! Display text post-processing.
//!
//! Only the drawn text changes; word timings are never touched.

use reframe_models::ResolvedSubtitleSettings;

/// Characters stripped when `removePunctuation` is on.
pub const PUNCTUATION: &[char] = &[
    '.', ',', '/', '#', '!', '$', '%', '^', '&', '*', ';', ':', '{', '}', '=', '-', '_', '`', '~',
    '(', ')',
];

/// Apply casing and punctuation rules to a word.
pub fn display_text(word: &str, settings: &ResolvedSubtitleSettings) -> String {
    let text = if settings.all_caps {
        word.to_uppercase()
    } else {
        word.to_string()
    };

    if settings.remove_punctuation {
        text.chars().filter(|c| !PUNCTUATION.contains(c)).collect()
    } else {
        text
    }
}
