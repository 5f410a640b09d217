//! Preview renderer: pure mapping from a resume document to a formatted view.
//!
//! Section order follows the document's category; empty sections are omitted.

pub mod handlers;

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::resume::{Category, ResumeDocument};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Preview {
    pub template_id: String,
    pub header: PreviewHeader,
    pub sections: Vec<PreviewSection>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreviewHeader {
    pub name: String,
    pub contact: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreviewSection {
    pub key: &'static str,
    pub title: &'static str,
    pub entries: Vec<PreviewEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PreviewEntry {
    pub heading: Option<String>,
    pub subheading: Option<String>,
    pub dates: Option<String>,
    pub lines: Vec<String>,
    /// Render `lines` as bullet points rather than paragraphs.
    pub bulleted: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Block {
    Experience(&'static str),
    Internships,
    Education,
    Projects,
    Skills,
    Certifications,
    Achievements,
}

fn layout_for(category: Option<Category>) -> &'static [Block] {
    match category {
        Some(Category::Fresher) => &[
            Block::Education,
            Block::Projects,
            Block::Internships,
            Block::Experience("Work Experience"),
            Block::Skills,
            Block::Certifications,
            Block::Achievements,
        ],
        Some(Category::CareerChange) => &[
            Block::Skills,
            Block::Experience("Relevant Experience"),
            Block::Education,
            Block::Projects,
            Block::Certifications,
        ],
        Some(Category::Experienced) | Some(Category::Senior) | None => &[
            Block::Experience("Professional Experience"),
            Block::Education,
            Block::Projects,
            Block::Skills,
            Block::Certifications,
        ],
    }
}

pub fn render(doc: &ResumeDocument) -> Preview {
    let mut sections = Vec::new();

    if !doc.summary.trim().is_empty() {
        sections.push(PreviewSection {
            key: "summary",
            title: "Professional Summary",
            entries: vec![PreviewEntry {
                lines: vec![doc.summary.trim().to_string()],
                ..Default::default()
            }],
        });
    }

    for block in layout_for(doc.category) {
        if let Some(section) = render_block(doc, *block) {
            sections.push(section);
        }
    }

    Preview {
        template_id: doc.template_id.clone(),
        header: render_header(doc),
        sections,
    }
}

fn render_header(doc: &ResumeDocument) -> PreviewHeader {
    let info = &doc.personal_info;
    let name = match info.full_name.trim() {
        "" => "Your Name".to_string(),
        name => name.to_string(),
    };

    let mut contact: Vec<String> = [&info.email, &info.phone, &info.location]
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();
    if let Some(website) = non_blank(&info.website) {
        contact.push(website.to_string());
    }
    if non_blank(&info.linkedin).is_some() {
        contact.push("LinkedIn".to_string());
    }
    if non_blank(&info.github).is_some() {
        contact.push("GitHub".to_string());
    }

    PreviewHeader { name, contact }
}

fn render_block(doc: &ResumeDocument, block: Block) -> Option<PreviewSection> {
    let (key, title, entries): (&'static str, &'static str, Vec<PreviewEntry>) = match block {
        Block::Experience(title) => (
            "experience",
            title,
            doc.experience
                .iter()
                .map(|exp| PreviewEntry {
                    heading: Some(exp.position.clone()),
                    subheading: Some(exp.company.clone()),
                    dates: date_range(&exp.start_date, &exp.end_date, exp.current),
                    lines: non_blank_lines(&exp.description),
                    bulleted: true,
                })
                .collect(),
        ),
        Block::Internships => (
            "internships",
            "Internships",
            doc.internships
                .iter()
                .map(|internship| PreviewEntry {
                    heading: Some(internship.position.clone()),
                    subheading: Some(internship.company.clone()),
                    dates: date_range(&internship.start_date, &internship.end_date, false),
                    lines: non_blank_lines(&internship.description),
                    bulleted: true,
                })
                .collect(),
        ),
        Block::Education => (
            "education",
            "Education",
            doc.education
                .iter()
                .map(|edu| {
                    let heading = match edu.field.trim() {
                        "" => edu.degree.clone(),
                        field => format!("{} in {}", edu.degree, field),
                    };
                    let subheading = match non_blank(&edu.gpa) {
                        Some(gpa) => format!("{} • GPA: {}", edu.school, gpa),
                        None => edu.school.clone(),
                    };
                    PreviewEntry {
                        heading: Some(heading),
                        subheading: Some(subheading),
                        dates: date_range(&edu.start_date, &edu.end_date, false),
                        ..Default::default()
                    }
                })
                .collect(),
        ),
        Block::Projects => (
            "projects",
            "Projects",
            doc.projects
                .iter()
                .map(|project| {
                    let mut lines = Vec::new();
                    if !project.description.trim().is_empty() {
                        lines.push(project.description.trim().to_string());
                    }
                    if !project.technologies.is_empty() {
                        lines.push(format!("Technologies: {}", project.technologies.join(", ")));
                    }
                    PreviewEntry {
                        heading: Some(project.name.clone()),
                        subheading: non_blank(&project.link).map(str::to_string),
                        lines,
                        ..Default::default()
                    }
                })
                .collect(),
        ),
        Block::Skills => (
            "skills",
            "Skills",
            doc.skills
                .iter()
                .filter(|g| !g.category.trim().is_empty() && !g.items.is_empty())
                .map(|g| PreviewEntry {
                    heading: Some(g.category.trim().to_string()),
                    lines: vec![g.items.join(", ")],
                    ..Default::default()
                })
                .collect(),
        ),
        Block::Certifications => (
            "certifications",
            "Certifications",
            doc.certifications
                .iter()
                .map(|cert| PreviewEntry {
                    heading: Some(cert.name.clone()),
                    subheading: Some(cert.issuer.clone()),
                    dates: non_empty(cert.date.trim()),
                    ..Default::default()
                })
                .collect(),
        ),
        Block::Achievements => (
            "achievements",
            "Achievements",
            doc.achievements
                .iter()
                .map(|a| PreviewEntry {
                    heading: Some(a.title.clone()),
                    dates: non_empty(a.date.trim()),
                    lines: non_empty(a.description.trim()).into_iter().collect(),
                    ..Default::default()
                })
                .collect(),
        ),
    };

    if entries.is_empty() {
        None
    } else {
        Some(PreviewSection {
            key,
            title,
            entries,
        })
    }
}

/// `YYYY-MM` → `Jan 2024`. Anything unparseable is returned verbatim.
pub fn format_month(raw: &str) -> String {
    let raw = raw.trim();
    if raw.is_empty() {
        return String::new();
    }
    match NaiveDate::parse_from_str(&format!("{raw}-01"), "%Y-%m-%d") {
        Ok(date) => date.format("%b %Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

fn date_range(start: &str, end: &str, current: bool) -> Option<String> {
    let start = format_month(start);
    let end = if current {
        "Present".to_string()
    } else {
        format_month(end)
    };
    match (start.is_empty(), end.is_empty()) {
        (true, true) => None,
        (false, true) => Some(start),
        (true, false) => Some(end),
        (false, false) => Some(format!("{start} - {end}")),
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

fn non_blank_lines(lines: &[String]) -> Vec<String> {
    lines
        .iter()
        .map(|l| l.trim())
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect()
}

/// Plain-text rendition of a preview, used for the text download.
pub fn render_text(preview: &Preview) -> String {
    let mut out = String::new();
    out.push_str(&preview.header.name);
    out.push('\n');
    if !preview.header.contact.is_empty() {
        out.push_str(&preview.header.contact.join(" | "));
        out.push('\n');
    }

    for section in &preview.sections {
        let title = section.title.to_uppercase();
        out.push('\n');
        out.push_str(&title);
        out.push('\n');
        out.push_str(&"-".repeat(title.chars().count()));
        out.push('\n');

        for entry in &section.entries {
            let mut head = entry.heading.clone().unwrap_or_default();
            if section.key == "skills" {
                head.push(':');
                if let Some(items) = entry.lines.first() {
                    head.push(' ');
                    head.push_str(items);
                }
                out.push_str(&head);
                out.push('\n');
                continue;
            }
            if let Some(dates) = &entry.dates {
                if head.is_empty() {
                    head = dates.clone();
                } else {
                    head = format!("{head} ({dates})");
                }
            }
            if !head.is_empty() {
                out.push_str(&head);
                out.push('\n');
            }
            if let Some(sub) = &entry.subheading {
                out.push_str(sub);
                out.push('\n');
            }
            for line in &entry.lines {
                if entry.bulleted {
                    out.push_str("• ");
                }
                out.push_str(line);
                out.push('\n');
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{
        EducationEntry, ExperienceEntry, InternshipEntry, ProjectEntry, SkillGroup,
    };

    fn keys(preview: &Preview) -> Vec<&'static str> {
        preview.sections.iter().map(|s| s.key).collect()
    }

    fn full_doc(category: Option<Category>) -> ResumeDocument {
        let mut doc = ResumeDocument::empty();
        doc.category = category;
        doc.summary = "Systems engineer.".to_string();
        doc.experience.push(ExperienceEntry {
            company: "Acme".to_string(),
            position: "Engineer".to_string(),
            start_date: "2021-03".to_string(),
            current: true,
            description: vec!["Shipped things".to_string(), "  ".to_string()],
            ..Default::default()
        });
        doc.internships.push(InternshipEntry {
            company: "Initech".to_string(),
            position: "Intern".to_string(),
            ..Default::default()
        });
        doc.education.push(EducationEntry {
            school: "MIT".to_string(),
            degree: "BSc".to_string(),
            field: "Computer Science".to_string(),
            start_date: "2016-09".to_string(),
            end_date: "2020-06".to_string(),
            gpa: Some("3.9".to_string()),
            ..Default::default()
        });
        doc.projects.push(ProjectEntry {
            name: "Compiler".to_string(),
            technologies: vec!["Rust".to_string(), "LLVM".to_string()],
            ..Default::default()
        });
        doc.skills.push(SkillGroup {
            category: "Languages".to_string(),
            items: vec!["Rust".to_string(), "Go".to_string()],
            ..Default::default()
        });
        doc
    }

    #[test]
    fn test_format_month() {
        assert_eq!(format_month("2024-01"), "Jan 2024");
        assert_eq!(format_month("2019-12"), "Dec 2019");
        assert_eq!(format_month(""), "");
        assert_eq!(format_month("Spring 2020"), "Spring 2020");
    }

    #[test]
    fn test_current_role_ends_in_present() {
        assert_eq!(
            date_range("2021-03", "", true).as_deref(),
            Some("Mar 2021 - Present")
        );
        assert_eq!(date_range("", "", false), None);
    }

    #[test]
    fn test_empty_document_has_placeholder_name_and_no_sections() {
        let preview = render(&ResumeDocument::empty());
        assert_eq!(preview.header.name, "Your Name");
        assert!(preview.header.contact.is_empty());
        assert!(preview.sections.is_empty());
    }

    #[test]
    fn test_experienced_leads_with_experience() {
        let preview = render(&full_doc(Some(Category::Experienced)));
        assert_eq!(
            keys(&preview),
            vec!["summary", "experience", "education", "projects", "skills"]
        );
        assert_eq!(preview.sections[1].title, "Professional Experience");
    }

    #[test]
    fn test_fresher_puts_experience_after_internships() {
        let preview = render(&full_doc(Some(Category::Fresher)));
        assert_eq!(
            keys(&preview),
            vec![
                "summary",
                "education",
                "projects",
                "internships",
                "experience",
                "skills"
            ]
        );
        let experience = preview.sections.iter().find(|s| s.key == "experience").unwrap();
        assert_eq!(experience.title, "Work Experience");
    }

    #[test]
    fn test_internships_only_for_freshers() {
        for category in [None, Some(Category::Senior), Some(Category::CareerChange)] {
            let preview = render(&full_doc(category));
            assert!(!keys(&preview).contains(&"internships"));
        }
    }

    #[test]
    fn test_career_change_leads_with_skills() {
        let preview = render(&full_doc(Some(Category::CareerChange)));
        assert_eq!(keys(&preview)[1], "skills");
        assert_eq!(preview.sections[2].title, "Relevant Experience");
    }

    #[test]
    fn test_blank_bullets_and_empty_skill_groups_dropped() {
        let mut doc = full_doc(Some(Category::Experienced));
        doc.skills.push(SkillGroup {
            category: "Empty".to_string(),
            ..Default::default()
        });
        let preview = render(&doc);
        let experience = &preview.sections[1];
        assert_eq!(experience.entries[0].lines, vec!["Shipped things".to_string()]);
        let skills = preview.sections.iter().find(|s| s.key == "skills").unwrap();
        assert_eq!(skills.entries.len(), 1);
    }

    #[test]
    fn test_education_heading_and_gpa() {
        let preview = render(&full_doc(Some(Category::Senior)));
        let edu = &preview.sections.iter().find(|s| s.key == "education").unwrap().entries[0];
        assert_eq!(edu.heading.as_deref(), Some("BSc in Computer Science"));
        assert_eq!(edu.subheading.as_deref(), Some("MIT • GPA: 3.9"));
        assert_eq!(edu.dates.as_deref(), Some("Sep 2016 - Jun 2020"));
    }

    #[test]
    fn test_header_contact_labels() {
        let mut doc = ResumeDocument::empty();
        doc.personal_info.full_name = "Ada".to_string();
        doc.personal_info.email = "ada@example.com".to_string();
        doc.personal_info.linkedin = Some("https://linkedin.com/in/ada".to_string());
        doc.personal_info.github = Some("   ".to_string());
        let header = render(&doc).header;
        assert_eq!(header.contact, vec!["ada@example.com", "LinkedIn"]);
    }

    #[test]
    fn test_render_text_contains_sections() {
        let text = render_text(&render(&full_doc(Some(Category::Experienced))));
        assert!(text.starts_with("Your Name\n"));
        assert!(text.contains("PROFESSIONAL EXPERIENCE\n-----------------------\n"));
        assert!(text.contains("Engineer (Mar 2021 - Present)\nAcme\n• Shipped things\n"));
        assert!(text.contains("Languages: Rust, Go\n"));
        assert!(text.contains("Technologies: Rust, LLVM\n"));
    }
}
