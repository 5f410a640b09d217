use serde::{Deserialize, Serialize};

use crate::models::resume::{Category, ResumeDocument};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum SectionStatus {
    Complete,
    Partial,
    Missing,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionHealth {
    pub section: String,
    pub score: f64,
    pub weight: f64,
    pub status: SectionStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletenessReport {
    /// 0 – 100
    pub overall_score: u32,
    pub sections: Vec<SectionHealth>,
    pub missing_sections: Vec<String>,
    pub tips: Vec<String>,
}

// Per-category emphasis. Sections not listed do not count toward the score.
const FRESHER_WEIGHTS: &[(&str, f64)] = &[
    ("personal_info", 0.20),
    ("summary", 0.10),
    ("education", 0.20),
    ("projects", 0.15),
    ("internships", 0.10),
    ("skills", 0.15),
    ("experience", 0.03),
    ("certifications", 0.04),
    ("achievements", 0.03),
];

const EXPERIENCED_WEIGHTS: &[(&str, f64)] = &[
    ("personal_info", 0.20),
    ("summary", 0.10),
    ("experience", 0.35),
    ("education", 0.10),
    ("skills", 0.15),
    ("projects", 0.05),
    ("certifications", 0.05),
];

const CAREER_CHANGE_WEIGHTS: &[(&str, f64)] = &[
    ("personal_info", 0.20),
    ("summary", 0.15),
    ("skills", 0.25),
    ("experience", 0.15),
    ("education", 0.10),
    ("projects", 0.10),
    ("certifications", 0.05),
];

const SENIOR_WEIGHTS: &[(&str, f64)] = &[
    ("personal_info", 0.20),
    ("summary", 0.15),
    ("experience", 0.40),
    ("skills", 0.10),
    ("education", 0.10),
    ("certifications", 0.05),
];

/// A summary at least this long counts as complete; shorter non-empty text is partial.
const FULL_SUMMARY_CHARS: usize = 100;

fn weights_for(category: Option<Category>) -> &'static [(&'static str, f64)] {
    match category {
        Some(Category::Fresher) => FRESHER_WEIGHTS,
        Some(Category::CareerChange) => CAREER_CHANGE_WEIGHTS,
        Some(Category::Senior) => SENIOR_WEIGHTS,
        Some(Category::Experienced) | None => EXPERIENCED_WEIGHTS,
    }
}

/// Guidance shown for the selected category.
pub fn tips_for(category: Option<Category>) -> Vec<String> {
    let tips: &[&str] = match category {
        Some(Category::Fresher) => &[
            "Focus on your education, projects, and internships",
            "Highlight relevant coursework and academic achievements",
            "Emphasize technical skills and certifications",
            "Include volunteer work and extracurricular activities",
        ],
        Some(Category::Experienced) => &[
            "Lead with your professional experience and achievements",
            "Quantify your impact with specific metrics and numbers",
            "Show career progression and increasing responsibilities",
            "Keep education section brief unless highly relevant",
        ],
        Some(Category::CareerChange) => &[
            "Highlight transferable skills relevant to your target role",
            "Use a functional or hybrid resume format",
            "Include relevant training, certifications, or courses",
            "Write a compelling summary explaining your transition",
        ],
        Some(Category::Senior) => &[
            "Focus on strategic impact and leadership achievements",
            "Highlight team management and organizational influence",
            "Include board positions, speaking engagements, or publications",
            "Keep technical details high-level and results-focused",
        ],
        None => &["Choose the path that best describes you to get tailored guidance"],
    };
    tips.iter().map(|t| t.to_string()).collect()
}

fn section_score(doc: &ResumeDocument, section: &str) -> f64 {
    match section {
        "personal_info" => {
            let info = &doc.personal_info;
            let filled = [&info.full_name, &info.email, &info.phone, &info.location]
                .iter()
                .filter(|f| !f.trim().is_empty())
                .count();
            filled as f64 / 4.0
        }
        "summary" => match doc.summary.trim().chars().count() {
            0 => 0.0,
            n if n >= FULL_SUMMARY_CHARS => 1.0,
            _ => 0.5,
        },
        "experience" => list_score(doc.experience.len()),
        "internships" => list_score(doc.internships.len()),
        "education" => list_score(doc.education.len()),
        "skills" => {
            let non_empty = doc.skills.iter().filter(|g| !g.items.is_empty()).count();
            list_score(non_empty)
        }
        "projects" => list_score(doc.projects.len()),
        "certifications" => list_score(doc.certifications.len()),
        "achievements" => list_score(doc.achievements.len()),
        _ => 0.0,
    }
}

fn list_score(len: usize) -> f64 {
    if len == 0 {
        0.0
    } else {
        1.0
    }
}

pub fn compute_completeness_report(doc: &ResumeDocument) -> CompletenessReport {
    let weights = weights_for(doc.category);
    let mut sections = Vec::with_capacity(weights.len());
    let mut missing_sections = Vec::new();
    let mut weighted_sum = 0.0;

    for (section, weight) in weights {
        let score = section_score(doc, section);
        let status = if score >= 1.0 {
            SectionStatus::Complete
        } else if score > 0.0 {
            SectionStatus::Partial
        } else {
            missing_sections.push(section.to_string());
            SectionStatus::Missing
        };
        weighted_sum += score * weight;
        sections.push(SectionHealth {
            section: section.to_string(),
            score,
            weight: *weight,
            status,
        });
    }

    let total_weight: f64 = weights.iter().map(|(_, w)| w).sum();
    let overall_score = if total_weight > 0.0 {
        ((weighted_sum / total_weight).clamp(0.0, 1.0) * 100.0).round() as u32
    } else {
        0
    };

    CompletenessReport {
        overall_score,
        sections,
        missing_sections,
        tips: tips_for(doc.category),
    }
}
