//! Text normalization applied when a board is built.

use tracing::instrument;

/// Known-bad category titles and their display replacements.
const TITLE_REPLACEMENTS: &[(&str, &str)] = &[(r#""ac"/"dc""#, "Electricity & Physics")];

/// Replaces known-bad titles, passing every other title through unchanged.
#[instrument]
pub fn sanitize_title(title: &str) -> String {
    TITLE_REPLACEMENTS
        .iter()
        .find(|(bad, _)| *bad == title)
        .map(|(_, fixed)| (*fixed).to_string())
        .unwrap_or_else(|| title.to_string())
}

/// Uppercases the first character of a question.
#[instrument]
pub fn sanitize_question(question: &str) -> String {
    let mut chars = question.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Folds an answer for comparison: surrounding whitespace trimmed, lowercased.
pub fn fold_answer(answer: &str) -> String {
    answer.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_bad_title_is_replaced() {
        assert_eq!(sanitize_title(r#""ac"/"dc""#), "Electricity & Physics");
    }

    #[test]
    fn test_other_titles_pass_through() {
        assert_eq!(sanitize_title("world capitals"), "world capitals");
        assert_eq!(sanitize_title("ac/dc"), "ac/dc");
        assert_eq!(sanitize_title(""), "");
    }

    #[test]
    fn test_question_first_char_uppercased() {
        assert_eq!(sanitize_question("this city is on the Seine"), "This city is on the Seine");
        assert_eq!(sanitize_question("élan"), "Élan");
        assert_eq!(sanitize_question("42 is the answer"), "42 is the answer");
        assert_eq!(sanitize_question(""), "");
    }

    #[test]
    fn test_fold_answer() {
        assert_eq!(fold_answer("  Paris  "), "paris");
        assert_eq!(fold_answer("PARIS\n"), fold_answer("paris"));
    }
}
