//! Reading-time estimation

/// Average adult reading speed used by the estimate.
const WORDS_PER_MINUTE: usize = 200;

/// Estimate how long a body of text takes to read.
///
/// Returns a human string like `"3 min read"`. Always at least one minute,
/// even for an empty body.
pub fn reading_time(text: &str) -> String {
    let words = count_words(text);
    let minutes = words.div_ceil(WORDS_PER_MINUTE).max(1);
    format!("{} min read", minutes)
}

/// Count words in plain text. ASCII alphanumeric runs count as one word
/// each; CJK characters count individually since they are not
/// whitespace-separated.
fn count_words(text: &str) -> usize {
    let mut count = 0;
    let mut in_word = false;

    for c in text.chars() {
        if c.is_ascii_alphanumeric() {
            if !in_word {
                in_word = true;
                count += 1;
            }
        } else if ('\u{4E00}'..='\u{9FFF}').contains(&c) {
            count += 1;
            in_word = false;
        } else {
            in_word = false;
        }
    }

    count
}
