//! Professional summary generation: fills the category's template from what
//! the resume already contains. Deterministic; latency is simulated by the handler.

use crate::generation::templates::{
    CAREER_CHANGE_SUMMARY_TEMPLATE, DEFAULT_SUMMARY_TEMPLATE, EXPERIENCED_SUMMARY_TEMPLATE,
    fill_template, FRESHER_SUMMARY_TEMPLATE,
};
use crate::models::resume::{Category, ResumeDocument};

pub(crate) const TECHNICAL_GROUPS: &[&str] = &["technical", "programming"];
const SOFT_GROUPS: &[&str] = &["soft", "leadership"];

fn or_fallback<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    match value.trim() {
        "" => fallback,
        trimmed => trimmed,
    }
}

/// First `n` non-blank items joined with `separator`.
pub(crate) fn first_n(items: &[String], n: usize, separator: &str) -> String {
    items
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .take(n)
        .collect::<Vec<_>>()
        .join(separator)
}

/// "a", "a and b", "a, b and c".
pub(crate) fn join_natural(parts: &[String]) -> String {
    match parts {
        [] => String::new(),
        [only] => only.clone(),
        [init @ .., last] => format!("{} and {last}", init.join(", ")),
    }
}

fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

pub fn generate_summary(doc: &ResumeDocument) -> String {
    match doc.category {
        Some(Category::Fresher) => fresher_summary(doc),
        Some(Category::Experienced) => experienced_summary(doc, false),
        Some(Category::Senior) => experienced_summary(doc, true),
        Some(Category::CareerChange) => career_change_summary(doc),
        None => default_summary(doc),
    }
}

fn fresher_summary(doc: &ResumeDocument) -> String {
    let education = doc.education.first();
    let degree = education.map_or("", |e| e.degree.as_str());
    let field = education.map_or("", |e| e.field.as_str());
    let school = education.map_or("", |e| e.school.as_str());

    let technical = first_n(doc.skill_items_matching(TECHNICAL_GROUPS), 3, ", ");
    let skills = if technical.is_empty() {
        "a solid foundation in technology".to_string()
    } else {
        format!("strong technical skills in {technical}")
    };

    let mut hands_on = Vec::new();
    if !doc.projects.is_empty() {
        hands_on.push(plural(doc.projects.len(), "hands-on project"));
    }
    if !doc.internships.is_empty() {
        hands_on.push(plural(doc.internships.len(), "internship"));
    }
    let practice = if hands_on.is_empty() {
        "Brings strong problem-solving abilities and an eagerness to learn.".to_string()
    } else {
        format!(
            "Demonstrated practical experience through {}, showcasing problem-solving abilities and eagerness to learn.",
            join_natural(&hands_on)
        )
    };

    let experience = doc
        .experience
        .first()
        .filter(|e| !e.position.trim().is_empty())
        .map(|e| format!("Gained valuable experience in a {} role. ", e.position.trim()))
        .unwrap_or_default();

    fill_template(
        FRESHER_SUMMARY_TEMPLATE,
        &[
            ("degree", or_fallback(degree, "degree")),
            ("field", or_fallback(field, "studies")),
            ("school", or_fallback(school, "university")),
            ("skills", skills.as_str()),
            ("practice", practice.as_str()),
            ("experience", experience.as_str()),
        ],
    )
}

fn experienced_summary(doc: &ResumeDocument, senior: bool) -> String {
    let years = if doc.experience.is_empty() {
        "5+".to_string()
    } else {
        (doc.experience.len() * 2).max(2).to_string()
    };
    let role = doc.experience.first().map_or("", |e| e.position.as_str());
    let industry = if doc.experience.len() > 1 {
        "multiple industries"
    } else {
        "the industry"
    };

    let technical = first_n(doc.skill_items_matching(TECHNICAL_GROUPS), 3, ", ");
    let soft = first_n(doc.skill_items_matching(SOFT_GROUPS), 2, " and ");
    let focus = if soft.is_empty() {
        "Focused on".to_string()
    } else {
        format!("Strong {soft} skills, with a focus on")
    };
    let projects = if doc.projects.is_empty() {
        ""
    } else {
        "innovative project development and "
    };

    let (level, track_record, target) = if senior {
        (
            "Senior",
            "Proven track record of leading cross-functional teams and driving strategic initiatives",
            "leadership",
        )
    } else {
        (
            "Experienced",
            "Demonstrated ability to deliver high-quality solutions and collaborate effectively with diverse teams",
            "senior",
        )
    };

    fill_template(
        EXPERIENCED_SUMMARY_TEMPLATE,
        &[
            ("level", level),
            ("role", or_fallback(role, "professional")),
            ("years", years.as_str()),
            ("skills", or_fallback(&technical, "technology solutions")),
            ("track_record", track_record),
            ("industry", industry),
            ("focus", focus.as_str()),
            ("projects", projects),
            ("target", target),
        ],
    )
}

fn career_change_summary(doc: &ResumeDocument) -> String {
    let previous = doc.experience.first().map_or("", |e| e.position.as_str());

    let soft = first_n(doc.skill_items_matching(SOFT_GROUPS), 2, " and ");
    let transferable = if soft.is_empty() {
        "valuable transferable skills".to_string()
    } else {
        format!("strong {soft} skills")
    };

    let mut sources = Vec::new();
    if !doc.education.is_empty() {
        sources.push("formal education".to_string());
    }
    if !doc.projects.is_empty() {
        sources.push("hands-on projects".to_string());
    }
    sources.push("continuous learning".to_string());

    let technical = first_n(doc.skill_items_matching(TECHNICAL_GROUPS), 3, ", ");
    let learning = if technical.is_empty() {
        format!("Gained technical knowledge through {}", join_natural(&sources))
    } else {
        format!("Developed proficiency in {technical} through {}", join_natural(&sources))
    };

    let background = doc
        .experience
        .first()
        .filter(|e| !e.company.trim().is_empty())
        .map(|e| {
            format!(
                "Previous experience at {} provided a strong foundation in problem-solving and client relations. ",
                e.company.trim()
            )
        })
        .unwrap_or_default();

    fill_template(
        CAREER_CHANGE_SUMMARY_TEMPLATE,
        &[
            ("previous", or_fallback(previous, "a previous role")),
            ("transferable", transferable.as_str()),
            ("learning", learning.as_str()),
            ("background", background.as_str()),
        ],
    )
}

fn default_summary(doc: &ResumeDocument) -> String {
    let first_job = doc.experience.first();
    let role = first_job.map_or("", |e| e.position.as_str());

    let all_skills: Vec<String> = doc.skills.iter().flat_map(|g| g.items.clone()).collect();
    let skills = first_n(&all_skills, 4, ", ");

    let track_record = first_job
        .filter(|e| !e.company.trim().is_empty())
        .map(|e| format!("Proven track record at {}", e.company.trim()))
        .unwrap_or_default();
    let degree = doc
        .education
        .first()
        .filter(|e| !e.degree.trim().is_empty())
        .map(|e| match e.field.trim() {
            "" => e.degree.trim().to_string(),
            field => format!("{} in {field}", e.degree.trim()),
        });
    let credentials = match (track_record.is_empty(), degree) {
        (true, None) => String::new(),
        (true, Some(degree)) => format!("Holds a {degree}. "),
        (false, None) => format!("{track_record}. "),
        (false, Some(degree)) => format!("{track_record} with a {degree}. "),
    };

    let projects = if doc.projects.is_empty() {
        String::new()
    } else {
        format!(
            "Demonstrated technical abilities through {}. ",
            plural(doc.projects.len(), "project")
        )
    };

    fill_template(
        DEFAULT_SUMMARY_TEMPLATE,
        &[
            ("role", or_fallback(role, "professional")),
            ("skills", or_fallback(&skills, "various technologies")),
            ("credentials", credentials.as_str()),
            ("projects", projects.as_str()),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{
        EducationEntry, ExperienceEntry, InternshipEntry, ProjectEntry, SkillGroup,
    };

    fn skills(category: &str, items: &[&str]) -> SkillGroup {
        SkillGroup {
            category: category.to_string(),
            items: items.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    fn job(position: &str, company: &str) -> ExperienceEntry {
        ExperienceEntry {
            position: position.to_string(),
            company: company.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_join_natural() {
        let parts = |v: &[&str]| v.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        assert_eq!(join_natural(&[]), "");
        assert_eq!(join_natural(&parts(&["a"])), "a");
        assert_eq!(join_natural(&parts(&["a", "b"])), "a and b");
        assert_eq!(join_natural(&parts(&["a", "b", "c"])), "a, b and c");
    }

    #[test]
    fn test_fresher_uses_first_education_and_top_three_skills() {
        let mut doc = ResumeDocument::empty();
        doc.category = Some(Category::Fresher);
        doc.education.push(EducationEntry {
            school: "State University".to_string(),
            degree: "BSc".to_string(),
            field: "Computer Science".to_string(),
            ..Default::default()
        });
        doc.skills
            .push(skills("Technical Skills", &["Rust", "Go", "SQL", "Docker"]));
        doc.projects.push(ProjectEntry::default());
        doc.projects.push(ProjectEntry::default());
        doc.internships.push(InternshipEntry::default());

        let summary = generate_summary(&doc);
        assert!(summary.starts_with(
            "Recent BSc graduate in Computer Science from State University with strong technical skills in Rust, Go, SQL."
        ));
        assert!(!summary.contains("Docker"));
        assert!(summary.contains("through 2 hands-on projects and 1 internship, showcasing"));
    }

    #[test]
    fn test_fresher_falls_back_without_data() {
        let mut doc = ResumeDocument::empty();
        doc.category = Some(Category::Fresher);
        assert_eq!(
            generate_summary(&doc),
            "Recent degree graduate in studies from university with a solid foundation in technology. \
             Brings strong problem-solving abilities and an eagerness to learn. \
             Seeking to leverage academic knowledge and practical skills to contribute to \
             innovative projects and grow professionally in a dynamic technology environment."
        );
    }

    #[test]
    fn test_experienced_years_scale_with_entries() {
        let mut doc = ResumeDocument::empty();
        doc.category = Some(Category::Experienced);
        doc.experience.push(job("Backend Engineer", "Acme"));
        assert!(generate_summary(&doc).starts_with("Experienced Backend Engineer with 2 years"));

        doc.experience.push(job("Engineer", "Initech"));
        doc.experience.push(job("Intern", "Hooli"));
        let summary = generate_summary(&doc);
        assert!(summary.contains("with 6 years of expertise"));
        assert!(summary.contains("across multiple industries. Focused on continuous improvement."));
    }

    #[test]
    fn test_senior_without_experience_says_five_plus() {
        let mut doc = ResumeDocument::empty();
        doc.category = Some(Category::Senior);
        doc.skills
            .push(skills("Leadership", &["mentoring", "hiring", "strategy"]));
        let summary = generate_summary(&doc);
        assert!(summary
            .starts_with("Senior professional with 5+ years of expertise in technology solutions."));
        assert!(summary.contains("Strong mentoring and hiring skills, with a focus on continuous"));
        assert!(summary.ends_with("in a challenging leadership role."));
    }

    #[test]
    fn test_career_change_mentions_previous_role_and_company() {
        let mut doc = ResumeDocument::empty();
        doc.category = Some(Category::CareerChange);
        doc.experience.push(job("Account Manager", "Contoso"));
        doc.skills.push(skills("Programming", &["Python"]));
        doc.projects.push(ProjectEntry::default());
        let summary = generate_summary(&doc);
        assert!(summary
            .starts_with("Motivated professional transitioning from Account Manager to technology"));
        assert!(summary
            .contains("Developed proficiency in Python through hands-on projects and continuous learning. "));
        assert!(summary.contains("Previous experience at Contoso"));
    }

    #[test]
    fn test_default_summary_without_category() {
        let mut doc = ResumeDocument::empty();
        doc.experience.push(job("Designer", "Studio"));
        doc.education.push(EducationEntry {
            degree: "BA".to_string(),
            field: "Design".to_string(),
            ..Default::default()
        });
        doc.skills.push(skills("Tools", &["Figma", "Sketch"]));
        assert_eq!(
            generate_summary(&doc),
            "Dedicated Designer with expertise in Figma, Sketch. Proven track record at Studio with a BA in Design. \
             Seeking to leverage skills and experience to drive innovation and contribute to \
             organizational success in a challenging role."
        );
    }

    #[test]
    fn test_braces_in_resume_text_are_kept_verbatim() {
        let mut doc = ResumeDocument::empty();
        doc.category = Some(Category::Experienced);
        doc.experience.push(job("Lead {target}", "Acme"));
        let summary = generate_summary(&doc);
        assert!(summary.starts_with("Experienced Lead {target} with 2 years"));
        assert!(summary.ends_with("in a challenging senior role."));
    }

    #[test]
    fn test_generation_is_deterministic() {
        let mut doc = ResumeDocument::empty();
        doc.category = Some(Category::Experienced);
        doc.experience.push(job("SRE", "Acme"));
        assert_eq!(generate_summary(&doc), generate_summary(&doc));
    }
}
