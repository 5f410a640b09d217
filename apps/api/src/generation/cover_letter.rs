//! Cover-letter generation: tone-calibrated template personalized from the
//! applicant's resume and the job description's top keywords.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::ats::keywords::extract_keywords;
use crate::errors::AppError;
use crate::generation::summary::{first_n, join_natural, TECHNICAL_GROUPS};
use crate::generation::templates::{
    fill_template, COVER_LETTER_TEMPLATE, DEFAULT_HIRING_MANAGER, GENERIC_HIGHLIGHTS,
    PLACEHOLDER_NAME,
};
use crate::generation::tone::{get_tone_phrases, LetterTone};
use crate::models::resume::ResumeDocument;

const MAX_HIGHLIGHTS: usize = 4;
const JD_KEYWORDS_MENTIONED: usize = 3;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CoverLetterRequest {
    pub job_title: String,
    pub company_name: String,
    #[serde(default)]
    pub hiring_manager: Option<String>,
    #[serde(default)]
    pub job_description: String,
    #[serde(default)]
    pub tone: LetterTone,
}

#[derive(Debug, Clone, Serialize)]
pub struct CoverLetter {
    pub letter: String,
    /// Suggested download name, e.g. `cover-letter-Acme.txt`.
    pub file_name: String,
    pub tone: LetterTone,
}

/// Builds the letter. `resume` supplies the signature, background and highlights;
/// without one the letter falls back to generic phrasing.
pub fn generate_cover_letter(
    request: &CoverLetterRequest,
    resume: Option<&ResumeDocument>,
) -> Result<CoverLetter, AppError> {
    let job_title = request.job_title.trim();
    let company = request.company_name.trim();
    if job_title.is_empty() || company.is_empty() {
        return Err(AppError::Validation(
            "job_title and company_name are required".to_string(),
        ));
    }

    let hiring_manager = request
        .hiring_manager
        .as_deref()
        .map(str::trim)
        .filter(|h| !h.is_empty())
        .unwrap_or(DEFAULT_HIRING_MANAGER);
    let phrases = get_tone_phrases(request.tone);

    let name = resume
        .map(|r| r.personal_info.full_name.trim())
        .filter(|n| !n.is_empty())
        .unwrap_or(PLACEHOLDER_NAME);

    // Tone phrases carry their own placeholders.
    let role = [("job_title", job_title), ("company", company)];
    let opening = fill_template(phrases.opening, &role);
    let closing = fill_template(phrases.closing, &role);

    let letter = fill_template(
        COVER_LETTER_TEMPLATE,
        &[
            ("hiring_manager", hiring_manager),
            ("opening", opening.as_str()),
            ("background", background(resume).as_str()),
            ("pitch", phrases.pitch_verb),
            ("alignment", alignment(request, resume, company).as_str()),
            ("highlights", highlights(resume).as_str()),
            ("closing", closing.as_str()),
            ("name", name),
        ],
    );

    Ok(CoverLetter {
        letter,
        file_name: format!("cover-letter-{}.txt", file_safe(company)),
        tone: request.tone,
    })
}

fn background(resume: Option<&ResumeDocument>) -> String {
    let latest = resume.and_then(|r| {
        r.experience
            .iter()
            .find(|e| !e.position.trim().is_empty() && !e.company.trim().is_empty())
    });
    match latest {
        Some(exp) => format!(
            "Drawing on my experience as {} at {}",
            exp.position.trim(),
            exp.company.trim()
        ),
        None => "With my background in software development and a track record of delivering \
                 innovative solutions"
            .to_string(),
    }
}

/// Skills the resume lists, preferring technical groups.
fn resume_skills(resume: &ResumeDocument) -> Vec<String> {
    let technical = resume.skill_items_matching(TECHNICAL_GROUPS);
    let items: Vec<String> = if technical.is_empty() {
        resume.skills.iter().flat_map(|g| g.items.clone()).collect()
    } else {
        technical.to_vec()
    };
    items
        .into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn alignment(
    request: &CoverLetterRequest,
    resume: Option<&ResumeDocument>,
    company: &str,
) -> String {
    let skills = resume.map(resume_skills).unwrap_or_default();
    let keywords = extract_keywords(&request.job_description);

    let skill_set: HashSet<String> = skills.iter().map(|s| s.to_lowercase()).collect();
    let shared: Vec<String> = keywords
        .iter()
        .filter(|k| skill_set.contains(&k.keyword.to_lowercase()))
        .take(JD_KEYWORDS_MENTIONED)
        .map(|k| k.keyword.clone())
        .collect();

    if !shared.is_empty() {
        return format!(
            "My expertise in {} aligns closely with the requirements outlined in your job posting, \
             and I am particularly drawn to {company}'s commitment to innovation.",
            join_natural(&shared)
        );
    }
    if !skills.is_empty() {
        return format!(
            "My expertise in {} would let me contribute quickly, and I am particularly drawn to \
             {company}'s commitment to innovation.",
            first_n(&skills, 3, ", ")
        );
    }
    let top: Vec<String> = keywords
        .iter()
        .take(JD_KEYWORDS_MENTIONED)
        .map(|k| k.keyword.clone())
        .collect();
    if !top.is_empty() {
        return format!(
            "I am eager to bring my skills to work on {} and I am particularly drawn to \
             {company}'s commitment to innovation.",
            join_natural(&top)
        );
    }
    format!(
        "I am particularly drawn to {company}'s commitment to innovation and would be excited to \
         contribute to your continued growth."
    )
}

fn highlights(resume: Option<&ResumeDocument>) -> String {
    let mut lines: Vec<String> = Vec::new();
    if let Some(resume) = resume {
        if !resume.experience.is_empty() {
            let years = (resume.experience.len() * 2).max(2);
            lines.push(format!(
                "{years}+ years of professional experience across {} role{}",
                resume.experience.len(),
                if resume.experience.len() == 1 { "" } else { "s" }
            ));
        }
        lines.extend(
            resume
                .experience
                .iter()
                .flat_map(|e| e.description.iter())
                .map(|b| b.trim())
                .filter(|b| !b.is_empty())
                .map(str::to_string),
        );
        if let Some(project) = resume.projects.iter().find(|p| !p.name.trim().is_empty()) {
            lines.push(format!("Built {}", project.name.trim()));
        }
    }
    if lines.is_empty() {
        lines = GENERIC_HIGHLIGHTS.iter().map(|s| s.to_string()).collect();
    }
    lines
        .iter()
        .take(MAX_HIGHLIGHTS)
        .map(|l| format!("• {l}"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn file_safe(company: &str) -> String {
    company
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '-' { c } else { '-' })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{ExperienceEntry, SkillGroup};

    fn request(tone: LetterTone) -> CoverLetterRequest {
        CoverLetterRequest {
            job_title: "Platform Engineer".to_string(),
            company_name: "Acme Corp".to_string(),
            job_description: "Platform Engineer\nRequirements: Rust, Kubernetes, Terraform"
                .to_string(),
            tone,
            ..Default::default()
        }
    }

    fn resume() -> ResumeDocument {
        let mut doc = ResumeDocument::empty();
        doc.personal_info.full_name = "Ada Lovelace".to_string();
        doc.experience.push(ExperienceEntry {
            position: "SRE".to_string(),
            company: "Initech".to_string(),
            description: vec!["Cut incident count by 60%".to_string()],
            ..Default::default()
        });
        doc.skills.push(SkillGroup {
            category: "Technical".to_string(),
            items: vec!["Kubernetes".to_string(), "Rust".to_string()],
            ..Default::default()
        });
        doc
    }

    #[test]
    fn test_missing_title_or_company_is_validation() {
        let mut req = request(LetterTone::Professional);
        req.company_name = "  ".to_string();
        assert!(matches!(
            generate_cover_letter(&req, None),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_generic_letter_without_resume() {
        let letter = generate_cover_letter(&request(LetterTone::Professional), None)
            .unwrap()
            .letter;
        assert!(letter.starts_with("Dear Hiring Manager,\n\nI am writing to express my strong interest in the Platform Engineer position at Acme Corp."));
        assert!(letter.ends_with("Sincerely,\nYour Name"));
        assert!(letter.contains("• Proven ability to deliver projects on time"));
        assert!(!letter.contains('{'), "unfilled placeholder in:\n{letter}");
    }

    #[test]
    fn test_resume_personalizes_letter() {
        let mut req = request(LetterTone::Confident);
        req.hiring_manager = Some("Grace".to_string());
        let letter = generate_cover_letter(&req, Some(&resume())).unwrap().letter;
        assert!(letter.starts_with("Dear Grace,\n\nI am the Platform Engineer that Acme Corp is looking for."));
        assert!(letter.contains("Drawing on my experience as SRE at Initech"));
        assert!(letter.contains("My expertise in Rust and Kubernetes aligns closely"));
        assert!(letter.contains("• 2+ years of professional experience across 1 role\n• Cut incident count by 60%"));
        assert!(letter.ends_with("Sincerely,\nAda Lovelace"));
        assert!(!letter.contains('{'), "unfilled placeholder in:\n{letter}");
    }

    #[test]
    fn test_tone_changes_opening_and_closing() {
        let professional = generate_cover_letter(&request(LetterTone::Professional), None).unwrap();
        let creative = generate_cover_letter(&request(LetterTone::Creative), None).unwrap();
        assert_ne!(professional.letter, creative.letter);
        assert!(creative.letter.contains("what we could build together at Acme Corp"));
        assert_eq!(creative.tone, LetterTone::Creative);
    }

    #[test]
    fn test_blank_hiring_manager_uses_default() {
        let mut req = request(LetterTone::Enthusiastic);
        req.hiring_manager = Some("   ".to_string());
        let letter = generate_cover_letter(&req, None).unwrap().letter;
        assert!(letter.starts_with("Dear Hiring Manager,"));
    }

    #[test]
    fn test_braces_in_user_text_are_not_substituted() {
        let mut req = request(LetterTone::Professional);
        req.hiring_manager = Some("{name}".to_string());
        req.company_name = "{job_title} Labs".to_string();
        let mut doc = resume();
        doc.experience[0].description = vec!["Shipped {company} rewrite".to_string()];

        let letter = generate_cover_letter(&req, Some(&doc)).unwrap().letter;
        assert!(letter.starts_with("Dear {name},\n\n"));
        assert!(letter.contains("Platform Engineer position at {job_title} Labs."));
        assert!(letter.contains("• Shipped {company} rewrite"));
        assert!(letter.ends_with("Sincerely,\nAda Lovelace"));
    }

    #[test]
    fn test_file_name_uses_company() {
        let out = generate_cover_letter(&request(LetterTone::Professional), None).unwrap();
        assert_eq!(out.file_name, "cover-letter-Acme-Corp.txt");
    }

    #[test]
    fn test_jd_keywords_used_when_resume_has_no_skills() {
        let letter = generate_cover_letter(&request(LetterTone::Professional), None)
            .unwrap()
            .letter;
        assert!(letter.contains("eager to bring my skills to work on Platform, Engineer and Rust"));
    }
}
