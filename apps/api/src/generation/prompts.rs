// All LLM prompt constants for the generation features. Templates use
// `{placeholder}` slots filled by the builders in this module's parent.

/// Opening prompt for the interview simulator. Replace `{persona}` and
/// `{job_title}` before sending.
pub const INTERVIEW_START_TEMPLATE: &str = "You are a strict but fair {persona} conducting a \
mock interview for the position of {job_title}. Ask me the first question now.";

/// Follow-up prompt for the interview simulator. The transcript is replayed
/// verbatim — the model endpoint itself is stateless between calls.
/// Replace `{history}` before sending.
pub const INTERVIEW_NEXT_TEMPLATE: &str = "This is a mock interview. Based on the history \
below, ask the next logical question. Keep it to one question at a time.\n\nHISTORY:\n{history}";

/// Cover letter prompt. Replace `{name}`, `{job_title}`, `{company}`,
/// `{resume_highlights}`, `{job_description}`.
pub const COVER_LETTER_TEMPLATE: &str = r#"As an expert HR writer, generate a concise, professional, and enthusiastic cover letter.

DETAILS:
- Applicant Name: {name}
- Job Title: {job_title}
- Company: {company}
- Key Resume Points: {resume_highlights}
- Job Description: {job_description}

INSTRUCTIONS:
1. Structure it as a formal letter.
2. Keep it under 250 words.
3. Directly address how the applicant's skills (from resume points) match the job description.
4. Maintain a confident and professional tone."#;

/// Six-month career roadmap prompt. Replace `{role}`.
pub const ROADMAP_TEMPLATE: &str = r#"You are a senior career mentor. Create a detailed 6-month skill development roadmap for someone aiming to become a proficient {role}.

The output must be in markdown format. For each month, provide the following:
- **Theme:** A clear focus for the month (e.g., "Month 1: Foundational Python & Data Structures").
- **Key Topics:** A bulleted list of specific concepts or technologies to learn.
- **Learning Resources:** Suggest 1-2 specific and high-quality online courses (from platforms like Coursera, Udemy, or freeCodeCamp) or official documentation.
- **Project:** Define a tangible mini-project that applies the skills learned during that month. The project should be practical and build upon the previous month's work."#;

/// Full resume review prompt. Replace `{resume_text}` and `{job_description}`.
pub const RESUME_REVIEW_TEMPLATE: &str = r#"Act as a senior career coach and ATS expert.
Analyze the resume below against the job description and respond in Markdown format with 3 structured sections:

### 1. First Impressions & Formatting
- Layout, clarity, length, font, structure

### 2. Keyword Match & ATS Score
- Score out of 10
- List important missing keywords

### 3. Action Verbs & Resume Bullet Enhancements
- Suggest 3-5 better bullet points to improve impact

--- Resume ---
{resume_text}

--- Job Description ---
{job_description}"#;

/// ATS keyword scan prompt. Replace `{resume_text}` and `{job_description}`.
pub const ATS_SCAN_TEMPLATE: &str = r#"You are an expert in resume optimization and ATS systems.

Compare the RESUME with the JOB DESCRIPTION.

RESUME:
{resume_text}

JOB DESCRIPTION:
{job_description}

TASK:
- Extract 10-15 important keywords from the job description.
- Identify which ones are **missing** from the resume.
- Suggest how to naturally integrate 3-5 of those keywords with real bullet-point examples.

Format your output in **markdown**, with clear headings."#;
