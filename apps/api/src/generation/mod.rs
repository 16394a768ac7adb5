//! AI-backed text generators: interview simulator, cover letter, career
//! roadmap, resume review, ATS scan. Every feature is the same shape —
//! validate inputs, fill a prompt template, make one model call, return
//! markdown — so the prompt builders live here as pure functions and the
//! handlers stay thin.

pub mod handlers;
pub mod prompts;

use serde::{Deserialize, Serialize};

use crate::auth::session::{ChatRole, ChatTurn};

/// Interviewer persona for the mock interview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Persona {
    #[serde(rename = "HR Manager")]
    HrManager,
    #[serde(rename = "Technical Lead")]
    TechnicalLead,
    #[serde(rename = "Product Manager")]
    ProductManager,
    #[serde(rename = "Startup Founder")]
    StartupFounder,
}

impl Persona {
    pub fn as_str(&self) -> &'static str {
        match self {
            Persona::HrManager => "HR Manager",
            Persona::TechnicalLead => "Technical Lead",
            Persona::ProductManager => "Product Manager",
            Persona::StartupFounder => "Startup Founder",
        }
    }
}

pub fn build_interview_start_prompt(persona: Persona, job_title: &str) -> String {
    prompts::INTERVIEW_START_TEMPLATE
        .replace("{persona}", persona.as_str())
        .replace("{job_title}", job_title)
}

/// Renders the transcript as `role: content` lines for the follow-up
/// prompt. The order is preserved exactly as the exchange happened.
pub fn render_history(transcript: &[ChatTurn]) -> String {
    transcript
        .iter()
        .map(|turn| {
            let role = match turn.role {
                ChatRole::User => "user",
                ChatRole::Assistant => "assistant",
            };
            format!("{role}: {}", turn.content)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn build_interview_next_prompt(transcript: &[ChatTurn]) -> String {
    prompts::INTERVIEW_NEXT_TEMPLATE.replace("{history}", &render_history(transcript))
}

pub fn build_cover_letter_prompt(
    name: &str,
    job_title: &str,
    company: &str,
    resume_highlights: &str,
    job_description: &str,
) -> String {
    prompts::COVER_LETTER_TEMPLATE
        .replace("{name}", name)
        .replace("{job_title}", job_title)
        .replace("{company}", company)
        .replace("{resume_highlights}", resume_highlights)
        .replace("{job_description}", job_description)
}

pub fn build_roadmap_prompt(role: &str) -> String {
    prompts::ROADMAP_TEMPLATE.replace("{role}", role)
}

pub fn build_resume_review_prompt(resume_text: &str, job_description: &str) -> String {
    prompts::RESUME_REVIEW_TEMPLATE
        .replace("{resume_text}", resume_text)
        .replace("{job_description}", job_description)
}

pub fn build_ats_scan_prompt(resume_text: &str, job_description: &str) -> String {
    prompts::ATS_SCAN_TEMPLATE
        .replace("{resume_text}", resume_text)
        .replace("{job_description}", job_description)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_persona_uses_display_names_on_the_wire() {
        let persona: Persona = serde_json::from_str(r#""Technical Lead""#).unwrap();
        assert_eq!(persona, Persona::TechnicalLead);
        assert_eq!(
            serde_json::to_string(&Persona::HrManager).unwrap(),
            r#""HR Manager""#
        );
    }

    #[test]
    fn test_interview_start_prompt_mentions_persona_and_title() {
        let prompt = build_interview_start_prompt(Persona::StartupFounder, "Data Analyst");
        assert!(prompt.contains("Startup Founder"));
        assert!(prompt.contains("Data Analyst"));
        assert!(!prompt.contains("{persona}"));
    }

    #[test]
    fn test_render_history_preserves_order_and_roles() {
        let transcript = vec![
            ChatTurn {
                role: ChatRole::Assistant,
                content: "Tell me about yourself.".to_string(),
            },
            ChatTurn {
                role: ChatRole::User,
                content: "I build backend services.".to_string(),
            },
        ];
        let history = render_history(&transcript);
        assert_eq!(
            history,
            "assistant: Tell me about yourself.\nuser: I build backend services."
        );
    }

    #[test]
    fn test_interview_next_prompt_embeds_history() {
        let transcript = vec![ChatTurn {
            role: ChatRole::User,
            content: "My answer".to_string(),
        }];
        let prompt = build_interview_next_prompt(&transcript);
        assert!(prompt.contains("HISTORY:\nuser: My answer"));
        assert!(prompt.contains("one question at a time"));
    }

    #[test]
    fn test_cover_letter_prompt_fills_every_slot() {
        let prompt = build_cover_letter_prompt(
            "Ada",
            "Platform Engineer",
            "Initech",
            "10 years of infrastructure work",
            "We need someone who knows Kubernetes",
        );
        for needle in [
            "Ada",
            "Platform Engineer",
            "Initech",
            "10 years of infrastructure work",
            "Kubernetes",
        ] {
            assert!(prompt.contains(needle), "missing {needle}");
        }
        assert!(!prompt.contains('{'), "unfilled slot in: {prompt}");
    }

    #[test]
    fn test_roadmap_prompt_names_the_role() {
        let prompt = build_roadmap_prompt("Cloud Engineer");
        assert!(prompt.contains("proficient Cloud Engineer"));
    }

    #[test]
    fn test_review_and_ats_prompts_carry_both_documents() {
        let review = build_resume_review_prompt("RESUME BODY", "JD BODY");
        assert!(review.contains("RESUME BODY"));
        assert!(review.contains("JD BODY"));

        let ats = build_ats_scan_prompt("RESUME BODY", "JD BODY");
        assert!(ats.contains("RESUME BODY"));
        assert!(ats.contains("JD BODY"));
    }
}
