use regex::Regex;

/// Splits text into sentences on whitespace runs that immediately follow
/// terminal punctuation (`.`, `!` or `?`). The punctuation stays attached to
/// the preceding sentence.
///
/// This is a deliberately simple heuristic splitter, not a linguistic
/// boundary detector: abbreviations, decimal numbers and quoted punctuation
/// are not handled specially. Downstream reports depend on exactly this
/// segmentation, so keep the heuristic stable.
///
/// Empty or whitespace-only input yields an empty Vec.
pub fn tokenize(text: &str) -> Vec<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }

    // The regex crate has no lookbehind, so instead of splitting on
    // `(?<=[.!?])\s+` directly we find every whitespace run and split only
    // where the preceding character is terminal punctuation.
    let whitespace_run = Regex::new(r"\s+").expect("whitespace pattern is valid");

    let mut sentences = Vec::new();
    let mut start = 0;
    for run in whitespace_run.find_iter(trimmed) {
        let preceding = trimmed[..run.start()].chars().next_back();
        if matches!(preceding, Some('.') | Some('!') | Some('?')) {
            sentences.push(trimmed[start..run.start()].to_string());
            start = run.end();
        }
    }
    sentences.push(trimmed[start..].to_string());

    sentences
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_splitting() {
        assert_eq!(
            tokenize("Hello world. This is a test! Is it working?"),
            vec!["Hello world.", "This is a test!", "Is it working?"]
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(tokenize(""), Vec::<String>::new());
        assert_eq!(tokenize("   \n\t "), Vec::<String>::new());
    }

    #[test]
    fn test_punctuation_stays_attached() {
        let sentences = tokenize("One.  Two!\nThree?");
        assert_eq!(sentences, vec!["One.", "Two!", "Three?"]);
    }

    #[test]
    fn test_no_split_without_terminal_punctuation() {
        // Whitespace not preceded by terminal punctuation is not a boundary
        assert_eq!(tokenize("no punctuation here"), vec!["no punctuation here"]);
        assert_eq!(
            tokenize("version 2, part one. next"),
            vec!["version 2, part one.", "next"]
        );
    }

    #[test]
    fn test_trailing_fragment_without_punctuation() {
        assert_eq!(
            tokenize("Complete sentence. Trailing fragment"),
            vec!["Complete sentence.", "Trailing fragment"]
        );
    }

    #[test]
    fn test_input_is_trimmed() {
        assert_eq!(tokenize("  Hello. World.  "), vec!["Hello.", "World."]);
    }
}
