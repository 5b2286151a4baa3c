//! Deterministic local text statistics.
//!
//! The pipeline has three independent stages:
//! 1. Sentence segmentation on runs of `.`, `!` and `?`
//! 2. Word normalization into lowercase tokens
//! 3. Frequency ranking of the tokens
//!
//! Every function here is pure and total over `&str`.

use std::collections::HashMap;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::models::{AnalysisResult, TOP_WORDS_LIMIT, WordFrequency};

/// Characters that end a sentence. A run of them is a single boundary.
pub const SENTENCE_TERMINATORS: [char; 3] = ['.', '!', '?'];

/// Compute word count, sentence count and the ten most frequent words.
///
/// Text that is blank, or that contains no word at all once punctuation is
/// stripped, yields [`AnalysisResult::empty`].
///
/// # Examples
///
/// ```
/// use textstats_core::analyze::analyze;
///
/// let result = analyze("Cat cat CAT");
/// assert_eq!(result.word_count, 3);
/// assert_eq!(result.sentence_count, 1);
/// assert_eq!(result.top_words, vec![("cat".to_string(), 3)]);
/// ```
pub fn analyze(text: &str) -> AnalysisResult {
    if text.trim().is_empty() {
        return AnalysisResult::empty();
    }

    let tokens = tokenize(text);
    if tokens.is_empty() {
        return AnalysisResult::empty();
    }

    AnalysisResult {
        word_count: tokens.len(),
        sentence_count: count_sentences(text),
        top_words: rank_words(&tokens),
    }
}

fn is_terminator(c: char) -> bool {
    SENTENCE_TERMINATORS.contains(&c)
}

/// Split text into sentences, trimmed, with blank segments discarded.
///
/// Consecutive terminators produce empty segments between them, which are
/// dropped, so `"?!"` and `"..."` each act as one boundary.
///
/// ```
/// use textstats_core::analyze::split_sentences;
///
/// assert_eq!(split_sentences("Wait... really?! Yes."), vec!["Wait", "really", "Yes"]);
/// ```
pub fn split_sentences(text: &str) -> Vec<&str> {
    text.split(is_terminator)
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .collect()
}

/// Count the segments [`split_sentences`] would return, without allocating.
pub fn count_sentences(text: &str) -> usize {
    text.split(is_terminator)
        .filter(|segment| !segment.trim().is_empty())
        .count()
}

/// What happens to a single lowercased character during normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
    /// Part of a word (possibly rewritten, e.g. a curly apostrophe).
    Keep(char),
    /// Removed without separating its neighbours.
    Strip,
    /// Replaced by whitespace.
    Boundary,
}

fn classify(c: char) -> CharClass {
    match c {
        '\'' | '-' => CharClass::Keep(c),
        c if c.is_alphanumeric() || c.is_whitespace() => CharClass::Keep(c),
        // Combining marks and the zero-width joiners belong to the word they sit in.
        c if is_combining_mark(c) => CharClass::Keep(c),
        '\u{200C}' | '\u{200D}' => CharClass::Keep(c),
        c if c.is_ascii_punctuation() => CharClass::Strip,
        // Typographic apostrophes and modifier letter apostrophe.
        '\u{2018}' | '\u{2019}' | '\u{02BC}' => CharClass::Keep('\''),
        // Hyphen and non-breaking hyphen. En and em dashes separate words.
        '\u{2010}' | '\u{2011}' => CharClass::Keep('-'),
        _ => CharClass::Boundary,
    }
}

fn is_dangling(c: char) -> bool {
    c == '\'' || c == '-'
}

/// Normalize text into lowercase word tokens.
///
/// The text is lowercased and brought into NFC form, so precomposed and
/// decomposed spellings of a word yield the same token. ASCII punctuation
/// other than `'` and `-` is deleted, the result is split on whitespace, and
/// apostrophes or hyphens left at either end of a token are trimmed. Tokens
/// that end up empty are dropped. Combining marks and zero-width joiners are
/// word characters.
///
/// ```
/// use textstats_core::analyze::tokenize;
///
/// assert_eq!(
///     tokenize("End-to-end testing isn't easy."),
///     vec!["end-to-end", "testing", "isn't", "easy"]
/// );
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();

    let mut cleaned = String::with_capacity(lowered.len());
    for c in lowered.nfc() {
        match classify(c) {
            CharClass::Keep(kept) => cleaned.push(kept),
            CharClass::Strip => {}
            CharClass::Boundary => cleaned.push(' '),
        }
    }

    cleaned
        .split_whitespace()
        .map(|raw| raw.trim_matches(is_dangling))
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Rank tokens by descending frequency, keeping at most ten.
///
/// Words with equal frequency keep the order in which they first appeared.
pub fn rank_words<S: AsRef<str>>(tokens: &[S]) -> Vec<WordFrequency> {
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(&str, usize)> = Vec::new();

    for token in tokens {
        let word = token.as_ref();
        match positions.get(word) {
            Some(&idx) => counts[idx].1 += 1,
            None => {
                positions.insert(word, counts.len());
                counts.push((word, 1));
            }
        }
    }

    // Stable: ties stay in first-occurrence order.
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.truncate(TOP_WORDS_LIMIT);

    counts
        .into_iter()
        .map(|(word, count)| (word.to_string(), count))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(top: &[(&str, usize)]) -> Vec<WordFrequency> {
        top.iter().map(|(w, c)| (w.to_string(), *c)).collect()
    }

    #[test]
    fn empty_input() {
        assert_eq!(analyze(""), AnalysisResult::empty());
    }

    #[test]
    fn whitespace_only_input() {
        assert_eq!(analyze("  \n\t \r\n "), AnalysisResult::empty());
    }

    #[test]
    fn punctuation_only_input() {
        assert_eq!(analyze("... ?! -- ;"), AnalysisResult::empty());
        assert_eq!(analyze("\u{201C}\u{2014}\u{201D}"), AnalysisResult::empty());
    }

    #[test]
    fn case_insensitive_counting() {
        let result = analyze("Cat cat CAT");
        assert_eq!(result.word_count, 3);
        assert_eq!(result.sentence_count, 1);
        assert_eq!(result.top_words, pairs(&[("cat", 3)]));
    }

    #[test]
    fn hyphens_and_apostrophes_stay_inside_words() {
        let result = analyze("end-to-end testing isn't easy.");
        assert_eq!(result.sentence_count, 1);
        assert_eq!(result.word_count, 4);
        assert_eq!(
            result.top_words,
            pairs(&[("end-to-end", 1), ("testing", 1), ("isn't", 1), ("easy", 1)])
        );
    }

    #[test]
    fn terminator_runs_collapse() {
        let result = analyze("Wait... really?! Yes.");
        assert_eq!(result.sentence_count, 3);
        assert_eq!(result.word_count, 3);
    }

    #[test]
    fn text_without_terminators_is_one_sentence() {
        assert_eq!(analyze("no punctuation here").sentence_count, 1);
        assert_eq!(analyze("line one\nline two\n\nline three").sentence_count, 1);
    }

    #[test]
    fn trailing_text_after_last_terminator_counts() {
        assert_eq!(analyze("One. Two! Three").sentence_count, 3);
    }

    #[test]
    fn leading_terminators_do_not_count() {
        assert_eq!(analyze("...Hello there.").sentence_count, 1);
    }

    #[test]
    fn multiple_paragraphs() {
        let text = "First paragraph. It has two sentences.\n\nSecond paragraph here!";
        let result = analyze(text);
        assert_eq!(result.sentence_count, 3);
        assert_eq!(result.word_count, 9);
        assert_eq!(result.top_words[0], ("paragraph".to_string(), 2));
    }

    #[test]
    fn split_sentences_trims_segments() {
        assert_eq!(
            split_sentences("  Hi there.  How are you?\nFine!  "),
            vec!["Hi there", "How are you", "Fine"]
        );
        assert!(split_sentences("   ").is_empty());
        assert!(split_sentences("?!...").is_empty());
    }

    #[test]
    fn count_matches_split() {
        for text in ["a. b. c.", "x", "", "...", "a?!b", " . a . "] {
            assert_eq!(count_sentences(text), split_sentences(text).len(), "{text:?}");
        }
    }

    #[test]
    fn dangling_symbols_are_trimmed() {
        assert_eq!(tokenize("'quoted' -dash- --x--"), vec!["quoted", "dash", "x"]);
        assert_eq!(tokenize("rock 'n' roll"), vec!["rock", "n", "roll"]);
        assert_eq!(tokenize("' - '' --"), Vec::<String>::new());
    }

    #[test]
    fn ascii_punctuation_is_deleted_not_split() {
        assert_eq!(tokenize("Hello, world! (yes) e.g."), vec!["hello", "world", "yes", "eg"]);
        assert_eq!(tokenize("a/b"), vec!["ab"]);
    }

    #[test]
    fn em_dashes_separate_words() {
        assert_eq!(tokenize("\u{2014}word\u{2014}"), vec!["word"]);
        assert_eq!(tokenize("this\u{2014}that"), vec!["this", "that"]);
        assert_eq!(tokenize("pages 3\u{2013}5"), vec!["pages", "3", "5"]);
    }

    #[test]
    fn curly_quotes_separate_and_apostrophes_fold() {
        assert_eq!(
            tokenize("\u{201C}Don\u{2019}t,\u{201D} she said"),
            vec!["don't", "she", "said"]
        );
    }

    #[test]
    fn unicode_hyphen_folds_to_ascii() {
        assert_eq!(tokenize("well\u{2010}known"), vec!["well-known"]);
    }

    #[test]
    fn non_ascii_letters_are_kept_and_lowercased() {
        assert_eq!(tokenize("Café ÜBER naïve"), vec!["café", "über", "naïve"]);
    }

    #[test]
    fn decomposed_latin_matches_precomposed() {
        assert_eq!(tokenize("nai\u{0308}ve cafe\u{0301}"), vec!["naïve", "café"]);

        let result = analyze("Cafe\u{0301} and café.");
        assert_eq!(result.word_count, 3);
        assert_eq!(result.top_words[0], ("café".to_string(), 2));
    }

    #[test]
    fn devanagari_vowel_signs_stay_in_words() {
        let result = analyze("नमस्ते दुनिया");
        assert_eq!(result.word_count, 2);
        assert_eq!(tokenize("नमस्ते दुनिया"), vec!["नमस्ते", "दुनिया"]);
    }

    #[test]
    fn zero_width_non_joiner_stays_in_words() {
        assert_eq!(tokenize("می\u{200C}خواهم"), vec!["می\u{200C}خواهم"]);
        assert_eq!(analyze("می\u{200C}خواهم").word_count, 1);
    }

    #[test]
    fn zero_width_joiner_stays_in_words() {
        assert_eq!(tokenize("a\u{200D}b c"), vec!["a\u{200D}b", "c"]);
    }

    #[test]
    fn word_free_segment_still_counts_as_sentence_when_text_has_words() {
        let result = analyze("Hi. - ; .");
        assert_eq!(result.word_count, 1);
        assert_eq!(result.sentence_count, 2);
        assert_eq!(split_sentences("Hi. - ; ."), vec!["Hi", "- ;"]);
    }

    #[test]
    fn numbers_are_words() {
        let result = analyze("In 2024 we shipped 3 releases.");
        assert_eq!(result.word_count, 6);
        assert_eq!(result.top_words[1], ("2024".to_string(), 1));
    }

    #[test]
    fn ranking_orders_by_frequency_then_first_occurrence() {
        let tokens = ["b", "a", "c", "a", "b", "d", "a"];
        assert_eq!(rank_words(&tokens), pairs(&[("a", 3), ("b", 2), ("c", 1), ("d", 1)]));
    }

    #[test]
    fn ranking_keeps_at_most_ten() {
        let tokens: Vec<String> = (0..15).map(|i| format!("w{i}")).collect();
        let ranked = rank_words(&tokens);
        assert_eq!(ranked.len(), 10);
        assert_eq!(ranked[0].0, "w0");
        assert_eq!(ranked[9].0, "w9");
    }

    #[test]
    fn top_words_invariants_hold() {
        let text = "the quick brown fox jumps over the lazy dog. The dog sleeps! \
                    A fox, a dog, and the end-to-end test? Yes, the test.";
        let result = analyze(text);
        let distinct = {
            let mut seen = tokenize(text);
            seen.sort();
            seen.dedup();
            seen.len()
        };

        assert_eq!(result.top_words.len(), distinct.min(10));
        assert!(result.top_words.windows(2).all(|w| w[0].1 >= w[1].1));
        let sum: usize = result.top_words.iter().map(|(_, c)| c).sum();
        assert!(sum <= result.word_count);
        assert_eq!(result.top_words[0], ("the".to_string(), 5));
        assert!(result.validate().is_ok());
    }

    #[test]
    fn word_count_matches_token_count() {
        let text = "It's a well-known fact -- isn't it? 'Quoted' words...";
        assert_eq!(analyze(text).word_count, tokenize(text).len());
        assert!(tokenize(text).iter().all(|t| !t.is_empty()));
    }

    #[test]
    fn analyze_is_idempotent() {
        let text = "Repeat after me. Repeat! After? Me...";
        assert_eq!(analyze(text), analyze(text));
    }

    #[test]
    fn large_input() {
        let text = "alpha beta gamma. delta epsilon! ".repeat(100_000);
        let result = analyze(&text);
        assert_eq!(result.word_count, 500_000);
        assert_eq!(result.sentence_count, 200_000);
        assert_eq!(result.top_words.len(), 5);
        assert_eq!(result.top_words[0], ("alpha".to_string(), 100_000));
    }
}
