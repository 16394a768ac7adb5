//! Missing-keyword analysis — pure term-frequency comparison between a
//! resume and a job description. Fast, deterministic, no LLM call.

use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

use regex::Regex;

/// Common words that are never useful suggestions.
const STOP_WORDS: [&str; 21] = [
    "the", "and", "to", "of", "in", "a", "with", "for", "is", "on", "an", "as", "by", "at",
    "from", "or", "be", "are", "this", "that", "it",
];

/// Tokens this short are noise even when they clear the stop-word list.
const MIN_TOKEN_LEN: usize = 4;

/// Upper bound on returned suggestions.
const MAX_SUGGESTIONS: usize = 10;

fn word_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[a-z']+").expect("static regex"))
}

/// Lowercases and splits text into alphabetic word tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    word_pattern()
        .find_iter(&lower)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Returns job-description terms absent from the resume, most frequent
/// first, excluding stop words and short tokens, capped at ten entries.
pub fn missing_keywords(resume_text: &str, job_description: &str) -> Vec<String> {
    let resume_tokens: HashSet<String> = tokenize(resume_text).into_iter().collect();
    let stop_words: HashSet<&str> = STOP_WORDS.into_iter().collect();

    // Frequency plus first-occurrence index so ranking is stable.
    let mut counts: HashMap<String, (usize, usize)> = HashMap::new();
    for (position, token) in tokenize(job_description).into_iter().enumerate() {
        let entry = counts.entry(token).or_insert((0, position));
        entry.0 += 1;
    }

    let mut ranked: Vec<(String, usize, usize)> = counts
        .into_iter()
        .map(|(token, (count, first))| (token, count, first))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));

    let mut suggestions = Vec::new();
    for (token, _, _) in ranked {
        if resume_tokens.contains(&token)
            || stop_words.contains(token.as_str())
            || token.len() < MIN_TOKEN_LEN
        {
            continue;
        }
        suggestions.push(token);
        if suggestions.len() >= MAX_SUGGESTIONS {
            break;
        }
    }
    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_lowercases_and_strips_punctuation() {
        assert_eq!(
            tokenize("Kubernetes, Docker & Python!"),
            vec!["kubernetes", "docker", "python"]
        );
    }

    #[test]
    fn test_disjoint_documents_yield_bounded_nonempty_suggestions() {
        let resume = "I paint watercolor landscapes";
        let jd = "Kubernetes Kubernetes Terraform Terraform Terraform observability \
                  pipelines pipelines distributed systems reliability monitoring \
                  automation deployment infrastructure engineering platform cloud";
        let missing = missing_keywords(resume, jd);

        assert!(!missing.is_empty());
        assert!(missing.len() <= 10);
        for word in &missing {
            assert!(word.len() > 3, "short token {word} leaked through");
            assert!(!STOP_WORDS.contains(&word.as_str()));
        }
        // Highest-frequency JD term ranks first.
        assert_eq!(missing[0], "terraform");
    }

    #[test]
    fn test_terms_present_in_resume_are_not_suggested() {
        let resume = "Python Developer with 5 years experience";
        let jd = "Kubernetes, Docker, Python";
        let missing = missing_keywords(resume, jd);

        assert!(missing.contains(&"kubernetes".to_string()));
        assert!(missing.contains(&"docker".to_string()));
        assert!(!missing.contains(&"python".to_string()));
    }

    #[test]
    fn test_fully_covered_resume_yields_no_suggestions() {
        let text = "Kubernetes Docker Terraform";
        assert!(missing_keywords(text, text).is_empty());
    }

    #[test]
    fn test_suggestion_count_caps_at_ten() {
        let jd = "alpha bravo charlie delta echoes foxtrot golfing hotels india \
                  juliet kilos limas mikes november oscar";
        let missing = missing_keywords("", jd);
        assert_eq!(missing.len(), 10);
    }
}
