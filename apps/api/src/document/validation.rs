//! Required-field checks run before the wizard leaves a step.
//!
//! Optional sections pass when empty; once an item exists its required fields
//! must be filled in.

use crate::errors::FieldProblem;
use crate::models::resume::ResumeDocument;
use crate::wizard::Step;

/// Validates everything the given step collects. Returns every failing field.
pub fn validate_step(step: Step, doc: &ResumeDocument) -> Vec<FieldProblem> {
    let mut problems = Problems::new(step);

    match step {
        Step::Category => {
            if doc.category.is_none() {
                problems.push("category", "Select the option that best describes you");
            }
        }
        Step::PersonalInfo => {
            let info = &doc.personal_info;
            if is_blank(&info.full_name) {
                problems.push("full_name", "Full name is required");
            }
            if is_blank(&info.email) {
                problems.push("email", "Email is required");
            } else if !is_valid_email(&info.email) {
                problems.push("email", "Email address is not valid");
            }
        }
        Step::Experience => {
            for (i, exp) in doc.experience.iter().enumerate() {
                require(&mut problems, i, "company", &exp.company, "Company is required");
                require(&mut problems, i, "position", &exp.position, "Position is required");
                require(&mut problems, i, "start_date", &exp.start_date, "Start date is required");
                if !exp.current && is_blank(&exp.end_date) {
                    problems.push_at(
                        i,
                        "end_date",
                        "End date is required unless this is your current role",
                    );
                }
            }
        }
        Step::Internships => {
            for (i, internship) in doc.internships.iter().enumerate() {
                require(&mut problems, i, "company", &internship.company, "Company is required");
                require(&mut problems, i, "position", &internship.position, "Position is required");
                require(
                    &mut problems,
                    i,
                    "start_date",
                    &internship.start_date,
                    "Start date is required",
                );
            }
        }
        Step::Education => {
            for (i, edu) in doc.education.iter().enumerate() {
                require(&mut problems, i, "school", &edu.school, "School is required");
                require(&mut problems, i, "degree", &edu.degree, "Degree is required");
            }
        }
        Step::Skills => {
            for (i, group) in doc.skills.iter().enumerate() {
                if !group.items.is_empty() && is_blank(&group.category) {
                    problems.push_at(i, "category", "Name this skill category");
                }
            }
        }
        Step::Projects => {
            for (i, project) in doc.projects.iter().enumerate() {
                require(&mut problems, i, "name", &project.name, "Project name is required");
            }
        }
        // Summary is optional and the preview has nothing to collect.
        Step::Summary | Step::Preview => {}
    }

    problems.into_vec()
}

/// Minimal shape check: non-empty local part, and a dotted domain with no empty labels.
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    if email.contains(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && domain.split('.').all(|label| !label.is_empty())
}

fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

fn require(problems: &mut Problems, index: usize, field: &str, value: &str, message: &str) {
    if is_blank(value) {
        problems.push_at(index, field, message);
    }
}

struct Problems {
    step: Step,
    items: Vec<FieldProblem>,
}

impl Problems {
    fn new(step: Step) -> Self {
        Problems {
            step,
            items: Vec::new(),
        }
    }

    fn push(&mut self, field: &str, message: &str) {
        self.items.push(FieldProblem {
            step: self.step.as_str().to_string(),
            field: field.to_string(),
            message: message.to_string(),
        });
    }

    fn push_at(&mut self, index: usize, field: &str, message: &str) {
        self.push(&format!("{index}.{field}"), message);
    }

    fn into_vec(self) -> Vec<FieldProblem> {
        self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{Category, EducationEntry, ExperienceEntry, SkillGroup};

    fn doc_with_contact(name: &str, email: &str) -> ResumeDocument {
        let mut doc = ResumeDocument::empty();
        doc.personal_info.full_name = name.to_string();
        doc.personal_info.email = email.to_string();
        doc
    }

    #[test]
    fn test_category_required() {
        let mut doc = ResumeDocument::empty();
        assert_eq!(validate_step(Step::Category, &doc).len(), 1);
        doc.category = Some(Category::Fresher);
        assert!(validate_step(Step::Category, &doc).is_empty());
    }

    #[test]
    fn test_personal_info_requires_name_and_email() {
        let problems = validate_step(Step::PersonalInfo, &ResumeDocument::empty());
        let fields: Vec<_> = problems.iter().map(|p| p.field.as_str()).collect();
        assert_eq!(fields, vec!["full_name", "email"]);
        assert!(problems.iter().all(|p| p.step == "personal_info"));
    }

    #[test]
    fn test_personal_info_rejects_malformed_email() {
        let problems = validate_step(Step::PersonalInfo, &doc_with_contact("Ada", "ada.example.com"));
        assert_eq!(problems.len(), 1);
        assert!(problems[0].message.contains("not valid"));
    }

    #[test]
    fn test_personal_info_passes_when_complete() {
        let doc = doc_with_contact("Ada Lovelace", "ada@example.com");
        assert!(validate_step(Step::PersonalInfo, &doc).is_empty());
    }

    #[test]
    fn test_email_shapes() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email(" ada@mail.example.org "));
        assert!(!is_valid_email("@b.co"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a@b..co"));
        assert!(!is_valid_email("a@@b.co"));
        assert!(!is_valid_email("a b@c.co"));
    }

    #[test]
    fn test_empty_optional_sections_pass() {
        let doc = ResumeDocument::empty();
        for step in [Step::Experience, Step::Education, Step::Skills, Step::Projects] {
            assert!(validate_step(step, &doc).is_empty(), "{step:?} should pass when empty");
        }
    }

    #[test]
    fn test_current_role_needs_no_end_date() {
        let mut doc = ResumeDocument::empty();
        doc.experience.push(ExperienceEntry {
            company: "Acme".to_string(),
            position: "Engineer".to_string(),
            start_date: "2021-03".to_string(),
            current: true,
            ..Default::default()
        });
        assert!(validate_step(Step::Experience, &doc).is_empty());

        doc.experience[0].current = false;
        let problems = validate_step(Step::Experience, &doc);
        assert_eq!(problems.len(), 1);
        assert_eq!(problems[0].field, "0.end_date");
    }

    #[test]
    fn test_education_reports_item_index() {
        let mut doc = ResumeDocument::empty();
        doc.education.push(EducationEntry {
            school: "MIT".to_string(),
            degree: "BSc".to_string(),
            ..Default::default()
        });
        doc.education.push(EducationEntry::default());
        let fields: Vec<_> = validate_step(Step::Education, &doc)
            .into_iter()
            .map(|p| p.field)
            .collect();
        assert_eq!(fields, vec!["1.school".to_string(), "1.degree".to_string()]);
    }

    #[test]
    fn test_unnamed_skill_group_with_items_fails() {
        let mut doc = ResumeDocument::empty();
        doc.skills.push(SkillGroup {
            items: vec!["Rust".to_string()],
            ..Default::default()
        });
        assert_eq!(validate_step(Step::Skills, &doc).len(), 1);
        doc.skills[0].items.clear();
        assert!(validate_step(Step::Skills, &doc).is_empty());
    }
}
