//! Prompt toolkit — a static catalog of fill-in-the-blank prompt
//! templates, searchable and optionally run through the model.

pub mod handlers;

use std::collections::HashMap;
use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

/// One catalog entry. `template` uses `[PLACEHOLDER]` slots.
#[derive(Debug, Clone, Serialize)]
pub struct PromptTemplate {
    pub category: &'static str,
    pub title: &'static str,
    pub template: &'static str,
}

/// The built-in prompt catalog.
pub static CATALOG: [PromptTemplate; 6] = [
    PromptTemplate {
        category: "Job Search",
        title: "Find jobs using my interests and skills",
        template: "Find me remote jobs in [industry or role] that align with my skills: \
                   [list your skills] and my experience: [brief summary].",
    },
    PromptTemplate {
        category: "Job Search",
        title: "Generate cold outreach message for recruiter",
        template: "Write a professional LinkedIn message to a recruiter for the role of \
                   [job title] at [company name]. Highlight my background in [field].",
    },
    PromptTemplate {
        category: "Resume Writing",
        title: "Resume summary generator",
        template: "Write a resume summary for a [job title] with [years] years of experience \
                   in [field/industry]. Emphasize achievements and soft skills.",
    },
    PromptTemplate {
        category: "Resume Writing",
        title: "Convert job duties into strong bullet points",
        template: "Convert this plain job duty into an impactful resume bullet with metrics: \
                   [your current job duty].",
    },
    PromptTemplate {
        category: "Cover Letters",
        title: "Write a personalized cover letter",
        template: "Write a cover letter for the role of [job title] at [company]. Highlight \
                   my experience in [field] and interest in [specific company value or mission].",
    },
    PromptTemplate {
        category: "Interview Prep",
        title: "Behavioral interview answer",
        template: "Answer this behavioral interview question using the STAR format: \
                   [question]. Use my experience: [your experience summary].",
    },
];

/// Case-insensitive substring search over titles and templates. An empty
/// query returns the whole catalog.
pub fn search(query: &str) -> Vec<&'static PromptTemplate> {
    let query = query.trim().to_lowercase();
    CATALOG
        .iter()
        .filter(|p| {
            query.is_empty()
                || p.title.to_lowercase().contains(&query)
                || p.template.to_lowercase().contains(&query)
        })
        .collect()
}

fn placeholder_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\[([^\[\]]+)\]").expect("static regex"))
}

/// Lists the `[PLACEHOLDER]` names appearing in a template, in order.
pub fn placeholders(template: &str) -> Vec<String> {
    placeholder_pattern()
        .captures_iter(template)
        .map(|c| c[1].to_string())
        .collect()
}

/// Substitutes supplied values into `[PLACEHOLDER]` slots. Slots without a
/// supplied value are left intact so the user can see what is missing.
pub fn fill(template: &str, values: &HashMap<String, String>) -> String {
    placeholder_pattern()
        .replace_all(template, |caps: &regex::Captures<'_>| {
            match values.get(&caps[1]) {
                Some(value) => value.clone(),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}
