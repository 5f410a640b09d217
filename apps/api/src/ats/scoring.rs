//! ATS scoring: pluggable, trait-based scorer that measures a resume against a
//! job description's keyword inventory.
//!
//! Default: `KeywordAtsScorer` (pure-Rust, deterministic, fully testable).
//! `AppState` holds an `Arc<dyn AtsScorer>`.

use std::collections::HashSet;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::ats::keywords::{tokenize, KeywordEntry};
use crate::errors::AppError;
use crate::models::resume::{Category, ResumeDocument};

// ────────────────────────────────────────────────────────────────────────────
// Output data models
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreStatus {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl ScoreStatus {
    pub fn from_score(score: u32) -> Self {
        match score {
            90.. => ScoreStatus::Excellent,
            75..=89 => ScoreStatus::Good,
            60..=74 => ScoreStatus::Fair,
            _ => ScoreStatus::Poor,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectionScore {
    pub score: u32, // 0 – 100
    pub status: ScoreStatus,
}

impl SectionScore {
    fn new(score: f32) -> Self {
        let score = score.round().clamp(0.0, 100.0) as u32;
        SectionScore {
            score,
            status: ScoreStatus::from_score(score),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionScores {
    pub keyword_match: SectionScore,
    pub formatting: SectionScore,
    pub experience: SectionScore,
    pub skills: SectionScore,
    pub education: SectionScore,
}

/// A JD keyword and where the resume covers it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordMatch {
    pub keyword: String,
    /// 1.0 when listed as a skill or technology, 0.6 when only mentioned in text.
    pub strength: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AtsReport {
    pub overall_score: u32, // 0 – 100
    pub sections: SectionScores,
    pub matched_keywords: Vec<KeywordMatch>,
    pub missing_keywords: Vec<String>,
    pub recommendations: Vec<String>,
    pub scorer_backend: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Implement this to swap ATS backends without touching the handler.
#[async_trait]
pub trait AtsScorer: Send + Sync {
    async fn analyze(
        &self,
        doc: &ResumeDocument,
        keywords: &[KeywordEntry],
    ) -> Result<AtsReport, AppError>;
}

/// Keyword-based scorer. For each JD keyword:
/// - listed skill / technology → strength 1.0
/// - mentioned anywhere else in the resume text → strength 0.6
/// - absent → missing
///
/// keyword_match = Σ(strength × weighted_score) / Σ(weighted_score) × 100
pub struct KeywordAtsScorer;

#[async_trait]
impl AtsScorer for KeywordAtsScorer {
    async fn analyze(
        &self,
        doc: &ResumeDocument,
        keywords: &[KeywordEntry],
    ) -> Result<AtsReport, AppError> {
        Ok(compute_ats_report(doc, keywords))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Core algorithm
// ────────────────────────────────────────────────────────────────────────────

const LISTED_STRENGTH: f32 = 1.0;
const MENTIONED_STRENGTH: f32 = 0.6;

// overall = Σ section × weight
const KEYWORD_WEIGHT: f32 = 0.40;
const FORMATTING_WEIGHT: f32 = 0.15;
const EXPERIENCE_WEIGHT: f32 = 0.20;
const SKILLS_WEIGHT: f32 = 0.15;
const EDUCATION_WEIGHT: f32 = 0.10;

/// Lower-cased terms a resume explicitly lists (skills, technologies).
fn listed_terms(doc: &ResumeDocument) -> HashSet<String> {
    doc.skills
        .iter()
        .flat_map(|g| g.items.iter())
        .chain(doc.projects.iter().flat_map(|p| p.technologies.iter()))
        .map(|t| t.trim().to_lowercase())
        .filter(|t| !t.is_empty())
        .collect()
}

/// All free text of the resume, lower-cased, one field per line.
fn resume_text(doc: &ResumeDocument) -> String {
    let mut text = vec![doc.summary.clone()];
    for exp in &doc.experience {
        text.push(exp.position.clone());
        text.push(exp.company.clone());
        text.extend(exp.description.iter().cloned());
    }
    for internship in &doc.internships {
        text.push(internship.position.clone());
        text.extend(internship.description.iter().cloned());
    }
    for edu in &doc.education {
        text.push(edu.degree.clone());
        text.push(edu.field.clone());
    }
    for project in &doc.projects {
        text.push(project.name.clone());
        text.push(project.description.clone());
    }
    for cert in &doc.certifications {
        text.push(cert.name.clone());
    }
    for achievement in &doc.achievements {
        text.push(achievement.title.clone());
        text.push(achievement.description.clone());
    }
    for group in &doc.skills {
        text.extend(group.items.iter().cloned());
    }

    text.join("\n").to_lowercase()
}

/// A bullet counts as quantified if it carries a number, percentage or currency.
fn is_quantified(text: &str) -> bool {
    text.chars().any(|c| c.is_ascii_digit())
        || text.contains('%')
        || text.contains('$')
        || text.contains('€')
        || text.contains('£')
}

pub fn compute_ats_report(doc: &ResumeDocument, keywords: &[KeywordEntry]) -> AtsReport {
    let listed = listed_terms(doc);
    let text = resume_text(doc);
    let mentioned: HashSet<String> = tokenize(&text).into_iter().collect();

    let mut matched_keywords = Vec::new();
    let mut missing_keywords = Vec::new();
    let mut total_weight = 0.0_f32;
    let mut covered_weight = 0.0_f32;
    let mut listed_hits = 0usize;

    for kw in keywords {
        let lower = kw.keyword.to_lowercase();
        total_weight += kw.weighted_score;

        let strength = if listed.contains(&lower) {
            listed_hits += 1;
            LISTED_STRENGTH
        } else if mentioned.contains(&lower) || (lower.contains(' ') && text.contains(&lower)) {
            MENTIONED_STRENGTH
        } else {
            0.0
        };

        covered_weight += strength * kw.weighted_score;
        if strength > 0.0 {
            matched_keywords.push(KeywordMatch {
                keyword: kw.keyword.clone(),
                strength,
            });
        } else {
            missing_keywords.push(kw.keyword.clone());
        }
    }

    let keyword_score = if total_weight > 0.0 {
        covered_weight / total_weight * 100.0
    } else {
        0.0
    };

    let bullets: Vec<&String> = doc
        .experience
        .iter()
        .flat_map(|e| e.description.iter())
        .chain(doc.internships.iter().flat_map(|i| i.description.iter()))
        .filter(|b| !b.trim().is_empty())
        .collect();
    let quantified_ratio = if bullets.is_empty() {
        0.0
    } else {
        bullets.iter().filter(|b| is_quantified(b)).count() as f32 / bullets.len() as f32
    };

    let sections = SectionScores {
        keyword_match: SectionScore::new(keyword_score),
        formatting: SectionScore::new(formatting_score(doc)),
        experience: SectionScore::new(experience_score(doc, quantified_ratio)),
        skills: SectionScore::new(skills_score(doc, listed_hits, keywords.len())),
        education: SectionScore::new(education_score(doc)),
    };

    let overall = sections.keyword_match.score as f32 * KEYWORD_WEIGHT
        + sections.formatting.score as f32 * FORMATTING_WEIGHT
        + sections.experience.score as f32 * EXPERIENCE_WEIGHT
        + sections.skills.score as f32 * SKILLS_WEIGHT
        + sections.education.score as f32 * EDUCATION_WEIGHT;

    let recommendations = build_recommendations(
        doc,
        &sections,
        &missing_keywords,
        &mentioned,
        keywords,
        quantified_ratio,
    );

    AtsReport {
        overall_score: overall.round().clamp(0.0, 100.0) as u32,
        sections,
        matched_keywords,
        missing_keywords,
        recommendations,
        scorer_backend: "keyword".to_string(),
    }
}

fn formatting_score(doc: &ResumeDocument) -> f32 {
    let info = &doc.personal_info;
    let mut score = 100.0;
    if info.full_name.trim().is_empty() {
        score -= 20.0;
    }
    if info.email.trim().is_empty() {
        score -= 15.0;
    }
    if info.phone.trim().is_empty() {
        score -= 10.0;
    }
    if info.location.trim().is_empty() {
        score -= 5.0;
    }
    if doc.summary.trim().is_empty() {
        score -= 10.0;
    }
    if doc.experience.iter().any(|e| e.description.iter().all(|b| b.trim().is_empty())) {
        score -= 10.0;
    }
    score
}

fn experience_score(doc: &ResumeDocument, quantified_ratio: f32) -> f32 {
    let entries = doc.experience.len() + doc.internships.len();
    if entries == 0 {
        // Entry-level resumes lean on projects instead.
        return match (doc.category, doc.projects.is_empty()) {
            (Some(Category::Fresher), false) => 60.0,
            _ => 30.0,
        };
    }
    let depth = entries.min(2) as f32 / 2.0;
    50.0 + 25.0 * depth + 25.0 * quantified_ratio
}

fn skills_score(doc: &ResumeDocument, listed_hits: usize, keyword_count: usize) -> f32 {
    if doc.skills.iter().all(|g| g.items.is_empty()) {
        return 20.0;
    }
    if keyword_count == 0 {
        return 40.0;
    }
    // Listing a third of the JD's keywords already reads as a full match.
    let coverage = (listed_hits as f32 / keyword_count as f32 * 3.0).min(1.0);
    40.0 + 60.0 * coverage
}

fn education_score(doc: &ResumeDocument) -> f32 {
    match doc.education.first() {
        None => 40.0,
        Some(edu) => {
            let mut score = 70.0;
            if !edu.field.trim().is_empty() {
                score += 15.0;
            }
            if !edu.end_date.trim().is_empty() {
                score += 15.0;
            }
            score
        }
    }
}

fn build_recommendations(
    doc: &ResumeDocument,
    sections: &SectionScores,
    missing: &[String],
    mentioned: &HashSet<String>,
    keywords: &[KeywordEntry],
    quantified_ratio: f32,
) -> Vec<String> {
    let mut recs = Vec::new();

    if !missing.is_empty() {
        let top: Vec<&str> = missing.iter().take(5).map(String::as_str).collect();
        recs.push(format!(
            "Add more industry-specific keywords from the job description: {}",
            top.join(", ")
        ));
    }
    if quantified_ratio < 0.5 {
        recs.push("Quantify your achievements with specific numbers and metrics".to_string());
    }
    if sections.skills.score < 75 {
        recs.push(
            "Include more relevant technical skills mentioned in the job posting".to_string(),
        );
    }
    let summary_tokens: HashSet<String> = tokenize(&doc.summary)
        .into_iter()
        .map(|t| t.to_lowercase())
        .collect();
    let summary_hits = keywords
        .iter()
        .filter(|k| summary_tokens.contains(&k.keyword.to_lowercase()))
        .count();
    if doc.summary.trim().is_empty() || (summary_hits == 0 && !keywords.is_empty()) {
        recs.push(
            "Optimize your professional summary to better match the role requirements".to_string(),
        );
    }
    if sections.formatting.score < 75 {
        recs.push("Complete your contact details so recruiters can reach you".to_string());
    }
    if mentioned.is_empty() {
        recs.push("Fill in your resume sections before running the analysis".to_string());
    }
    if recs.is_empty() {
        recs.push("Your resume is well aligned with this job description".to_string());
    }
    recs
}
