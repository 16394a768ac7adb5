//! CV beautifier. Two input shapes, one implementation:
//! raw text is re-segmented into sections with a fixed keyword heuristic
//! and rendered as markdown; structured form fields render as a
//! standalone HTML document. The segmentation is best-effort line
//! splitting, not a grammar.

use serde::{Deserialize, Serialize};

/// Lines containing one of these (case-insensitive) start a new section.
const SECTION_KEYWORDS: [&str; 5] = [
    "education",
    "experience",
    "skills",
    "projects",
    "certifications",
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    pub heading: String,
    pub lines: Vec<String>,
}

fn title_case(line: &str) -> String {
    line.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Splits raw resume text into sections. Lines before the first
/// recognized heading fall into a "General" section.
pub fn segment_sections(raw_text: &str) -> Vec<Section> {
    let mut sections: Vec<Section> = Vec::new();

    for line in raw_text.lines().map(str::trim).filter(|l| !l.is_empty()) {
        let lower = line.to_lowercase();
        if SECTION_KEYWORDS.iter().any(|kw| lower.contains(kw)) {
            sections.push(Section {
                heading: title_case(line),
                lines: Vec::new(),
            });
        } else {
            if sections.is_empty() {
                sections.push(Section {
                    heading: "General".to_string(),
                    lines: Vec::new(),
                });
            }
            // current section is always the last pushed
            sections
                .last_mut()
                .expect("sections non-empty here")
                .lines
                .push(line.to_string());
        }
    }
    sections
}

/// Renders segmented sections as markdown, one `##` heading per section.
pub fn render_markdown(sections: &[Section]) -> String {
    let mut out = Vec::new();
    for section in sections {
        out.push(format!("## {}", section.heading));
        out.push(section.lines.join("\n"));
        out.push(String::new());
    }
    out.join("\n")
}

/// Structured CV form fields.
#[derive(Debug, Clone, Deserialize)]
pub struct CvDetails {
    pub full_name: String,
    /// Email / phone / profile link, free-form.
    pub contact: String,
    pub summary: String,
    /// One bullet per line.
    pub experience: String,
    pub education: String,
    pub skills: String,
}

/// Renders the structured form as a standalone HTML document the user can
/// copy or print.
pub fn render_html(details: &CvDetails) -> String {
    let bullets: String = details
        .experience
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(|l| format!("<li>{l}</li>"))
        .collect();

    format!(
        r#"<div style="font-family:sans-serif; border:1px solid #333; padding:2rem; border-radius:10px;">
  <div style="text-align:center; border-bottom:2px solid #636af2; padding-bottom:1rem;">
    <h1 style="margin:0;">{name}</h1>
    <p style="margin:5px; color:#666;">{contact}</p>
  </div>
  <h3 style="color:#636af2;">Professional Summary</h3>
  <p>{summary}</p>
  <h3 style="color:#636af2;">Work Experience</h3>
  <ul>{bullets}</ul>
  <h3 style="color:#636af2;">Education</h3>
  <p>{education}</p>
  <h3 style="color:#636af2;">Key Skills</h3>
  <p>{skills}</p>
</div>"#,
        name = details.full_name,
        contact = details.contact,
        summary = details.summary,
        bullets = bullets,
        education = details.education,
        skills = details.skills,
    )
}
