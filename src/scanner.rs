use crate::normalize::normalize;
use crate::records::{KeywordTarget, MatchRecord};
use crate::tokenize::tokenize;
use regex::{Regex, RegexBuilder};

/// Scans a page's extracted text for keyword mentions that are not already
/// linked to their target URL.
///
/// Sentences pass through an ordered pipeline of eligibility filters (terminal
/// punctuation, not a heading, not a full-line emphasis, not already linked),
/// then every surviving sentence is matched against every keyword pair. Pairs
/// whose target normalizes to the page's own URL are skipped per pair, since
/// different pairs may target different URLs of which only some are the page
/// itself.
///
/// Output order is sentence-major, keyword-minor, with no deduplication.
/// Pure and total: no I/O, never panics on any string input.
pub fn scan(
    source_url: &str,
    body_text: &str,
    keyword_targets: &[KeywordTarget],
) -> Vec<MatchRecord> {
    let normalized_source = normalize(source_url);
    let sentences = tokenize(body_text);
    let link_syntax = markdown_link_syntax();

    // Normalize targets and compile keyword patterns once per page, keeping
    // the pair order intact for keyword-minor output ordering.
    let pairs: Vec<(&KeywordTarget, String, Regex)> = keyword_targets
        .iter()
        .map(|pair| (pair, normalize(&pair.target_url), whole_word_pattern(&pair.keyword)))
        .collect();

    let mut results = Vec::new();
    for sentence in &sentences {
        let sentence = sentence.trim();
        if !is_eligible(sentence, &link_syntax) {
            continue;
        }

        // Reduce any markdown links to their label text before matching.
        // Linked sentences were already rejected above, so this is a no-op in
        // practice, but matching must never see raw link syntax.
        let comparison = link_syntax.replace_all(sentence, "$1");

        for (pair, normalized_target, keyword_pattern) in &pairs {
            if *normalized_target == normalized_source {
                ::log::debug!(
                    "Skipping self-link target {} on {}",
                    pair.target_url,
                    source_url
                );
                continue;
            }

            if keyword_pattern.is_match(&comparison) {
                results.push(MatchRecord {
                    source_url: source_url.to_string(),
                    sentence: sentence.to_string(),
                    keyword: pair.keyword.clone(),
                    target_url: pair.target_url.clone(),
                });
            }
        }
    }

    results
}

/// Markdown inline link syntax, `[label](url)`
fn markdown_link_syntax() -> Regex {
    Regex::new(r"\[([^\]]+)\]\([^)]+\)").expect("markdown link pattern is valid")
}

/// Case-insensitive whole-word pattern for a keyword, so "cat" does not match
/// inside "category"
fn whole_word_pattern(keyword: &str) -> Regex {
    RegexBuilder::new(&format!(r"\b{}\b", regex::escape(keyword)))
        .case_insensitive(true)
        .build()
        .expect("escaped keyword pattern is valid")
}

/// Ordered eligibility pipeline for a trimmed sentence; all predicates must
/// pass, checked with short-circuiting in this order.
fn is_eligible(sentence: &str, link_syntax: &Regex) -> bool {
    has_terminal_punctuation(sentence)
        && !is_heading(sentence)
        && !is_full_line_emphasis(sentence)
        && !contains_markdown_link(sentence, link_syntax)
}

/// A reportable sentence must end in `.`, `!` or `?`
fn has_terminal_punctuation(sentence: &str) -> bool {
    sentence.ends_with(['.', '!', '?'])
}

/// Markdown heading: one or more `#` followed by whitespace
fn is_heading(sentence: &str) -> bool {
    let rest = sentence.trim_start_matches('#');
    rest.len() != sentence.len() && rest.starts_with(char::is_whitespace)
}

/// Whole line wrapped in `**bold**` or `*italic*` emphasis; emphasis on a
/// substring does not disqualify a sentence
fn is_full_line_emphasis(sentence: &str) -> bool {
    (sentence.starts_with("**") && sentence.ends_with("**"))
        || (sentence.starts_with('*') && sentence.ends_with('*'))
}

/// Sentences that already carry a markdown link are never candidates,
/// regardless of which keyword appears in them
fn contains_markdown_link(sentence: &str, link_syntax: &Regex) -> bool {
    link_syntax.is_match(sentence)
}
