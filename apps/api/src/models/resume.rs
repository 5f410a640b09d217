use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Career stage picked on the first wizard step. Drives step order and section order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Fresher,
    Experienced,
    CareerChange,
    Senior,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Fresher,
        Category::Experienced,
        Category::CareerChange,
        Category::Senior,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Fresher => "fresher",
            Category::Experienced => "experienced",
            Category::CareerChange => "career-change",
            Category::Senior => "senior",
        }
    }

    /// Human-readable title shown next to the category picker.
    pub fn title(&self) -> &'static str {
        match self {
            Category::Fresher => "Fresh Graduate / Entry Level",
            Category::Experienced => "Experienced Professional",
            Category::CareerChange => "Career Changer",
            Category::Senior => "Senior Executive",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonalInfo {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub website: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperienceEntry {
    pub id: Uuid,
    pub company: String,
    pub position: String,
    /// `YYYY-MM`, as entered.
    pub start_date: String,
    pub end_date: String,
    pub current: bool,
    pub description: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InternshipEntry {
    pub id: Uuid,
    pub company: String,
    pub position: String,
    pub start_date: String,
    pub end_date: String,
    pub description: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EducationEntry {
    pub id: Uuid,
    pub school: String,
    pub degree: String,
    pub field: String,
    pub start_date: String,
    pub end_date: String,
    pub gpa: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillGroup {
    pub id: Uuid,
    pub category: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectEntry {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub link: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CertificationEntry {
    pub id: Uuid,
    pub name: String,
    pub issuer: String,
    pub date: String,
    pub link: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AchievementEntry {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub date: String,
}

/// The single editable record holding every resume section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeDocument {
    pub id: Uuid,
    pub category: Option<Category>,
    pub personal_info: PersonalInfo,
    pub summary: String,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub skills: Vec<SkillGroup>,
    pub projects: Vec<ProjectEntry>,
    pub certifications: Vec<CertificationEntry>,
    pub internships: Vec<InternshipEntry>,
    pub achievements: Vec<AchievementEntry>,
    pub template_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub const DEFAULT_TEMPLATE_ID: &str = "modern";

impl ResumeDocument {
    pub fn empty() -> Self {
        let now = Utc::now();
        ResumeDocument {
            id: Uuid::new_v4(),
            category: None,
            personal_info: PersonalInfo::default(),
            summary: String::new(),
            experience: vec![],
            education: vec![],
            skills: vec![],
            projects: vec![],
            certifications: vec![],
            internships: vec![],
            achievements: vec![],
            template_id: DEFAULT_TEMPLATE_ID.to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Items of the first skill group whose name mentions any of `needles`.
    pub fn skill_items_matching(&self, needles: &[&str]) -> &[String] {
        self.skills
            .iter()
            .find(|g| {
                let name = g.category.to_lowercase();
                needles.iter().any(|n| name.contains(n))
            })
            .map(|g| g.items.as_slice())
            .unwrap_or(&[])
    }
}
