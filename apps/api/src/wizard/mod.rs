//! Wizard controller: the linear sequence of form steps.
//!
//! Step order is derived from the document's category on every call, so a
//! category change takes effect immediately. The session only remembers
//! where the user is.

pub mod handlers;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::document::validation::validate_step;
use crate::errors::{AppError, FieldProblem};
use crate::models::resume::{Category, ResumeDocument};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    Category,
    PersonalInfo,
    Experience,
    Internships,
    Education,
    Skills,
    Projects,
    Summary,
    Preview,
}

impl Step {
    pub fn as_str(&self) -> &'static str {
        match self {
            Step::Category => "category",
            Step::PersonalInfo => "personal_info",
            Step::Experience => "experience",
            Step::Internships => "internships",
            Step::Education => "education",
            Step::Skills => "skills",
            Step::Projects => "projects",
            Step::Summary => "summary",
            Step::Preview => "preview",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Step::Category => "Choose Your Path",
            Step::PersonalInfo => "Personal Information",
            Step::Experience => "Work Experience",
            Step::Internships => "Internships",
            Step::Education => "Education",
            Step::Skills => "Skills",
            Step::Projects => "Projects",
            Step::Summary => "Professional Summary",
            Step::Preview => "Preview",
        }
    }
}

/// Step order for a category. Without a category only the picker is reachable.
pub fn steps_for(category: Option<Category>) -> &'static [Step] {
    match category {
        None => &[Step::Category],
        Some(Category::Fresher) => &[
            Step::Category,
            Step::PersonalInfo,
            Step::Education,
            Step::Projects,
            Step::Internships,
            Step::Skills,
            Step::Summary,
            Step::Preview,
        ],
        Some(Category::Experienced) => &[
            Step::Category,
            Step::PersonalInfo,
            Step::Experience,
            Step::Education,
            Step::Skills,
            Step::Projects,
            Step::Summary,
            Step::Preview,
        ],
        Some(Category::CareerChange) => &[
            Step::Category,
            Step::PersonalInfo,
            Step::Skills,
            Step::Experience,
            Step::Education,
            Step::Projects,
            Step::Summary,
            Step::Preview,
        ],
        Some(Category::Senior) => &[
            Step::Category,
            Step::PersonalInfo,
            Step::Experience,
            Step::Skills,
            Step::Education,
            Step::Projects,
            Step::Summary,
            Step::Preview,
        ],
    }
}

/// Where the user currently is in the wizard.
#[derive(Debug, Clone, Default)]
pub struct WizardSession {
    current: Option<Step>,
}

/// Serializable snapshot of the wizard for a document.
#[derive(Debug, Clone, Serialize)]
pub struct WizardView {
    pub current: Step,
    pub index: usize,
    pub total: usize,
    pub steps: Vec<StepView>,
    pub can_go_back: bool,
    pub is_last: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct StepView {
    pub step: Step,
    pub title: &'static str,
}

impl WizardSession {
    pub fn reset(&mut self) {
        self.current = None;
    }

    pub fn steps(&self, doc: &ResumeDocument) -> &'static [Step] {
        steps_for(doc.category)
    }

    /// The current step, falling back to the category picker if the remembered
    /// step is not part of the document's order.
    pub fn current(&self, doc: &ResumeDocument) -> Step {
        match self.current {
            Some(step) if self.steps(doc).contains(&step) => step,
            _ => Step::Category,
        }
    }

    /// Zero-based index of the current step and the number of steps.
    pub fn progress(&self, doc: &ResumeDocument) -> (usize, usize) {
        let steps = self.steps(doc);
        let current = self.current(doc);
        let index = steps.iter().position(|s| *s == current).unwrap_or(0);
        (index, steps.len())
    }

    /// Validates the current step and advances. Stays put on the last step.
    pub fn next(&mut self, doc: &ResumeDocument) -> Result<Step, AppError> {
        let current = self.current(doc);
        let problems = validate_step(current, doc);
        if !problems.is_empty() {
            debug!(
                "Wizard blocked at {:?}: {} field problem(s)",
                current,
                problems.len()
            );
            return Err(AppError::InvalidFields(problems));
        }

        let (index, total) = self.progress(doc);
        let steps = self.steps(doc);
        let next = if index + 1 < total {
            steps[index + 1]
        } else {
            current
        };
        self.current = Some(next);
        Ok(next)
    }

    /// Moves one step back, saturating at the first step.
    pub fn back(&mut self, doc: &ResumeDocument) -> Step {
        let (index, _) = self.progress(doc);
        let prev = self.steps(doc)[index.saturating_sub(1)];
        self.current = Some(prev);
        prev
    }

    /// Jumps to `target`. Backward jumps always succeed; a forward jump requires
    /// every step from the current one up to (not including) the target to validate.
    pub fn go_to(&mut self, doc: &ResumeDocument, target: Step) -> Result<Step, AppError> {
        let steps = self.steps(doc);
        let target_index = steps.iter().position(|s| *s == target).ok_or_else(|| {
            AppError::Validation(format!(
                "Step '{}' is not part of this resume's wizard",
                target.as_str()
            ))
        })?;

        let (index, _) = self.progress(doc);
        if target_index > index {
            let problems: Vec<FieldProblem> = steps[index..target_index]
                .iter()
                .flat_map(|step| validate_step(*step, doc))
                .collect();
            if !problems.is_empty() {
                return Err(AppError::InvalidFields(problems));
            }
        }

        self.current = Some(target);
        Ok(target)
    }

    pub fn view(&self, doc: &ResumeDocument) -> WizardView {
        let (index, total) = self.progress(doc);
        WizardView {
            current: self.current(doc),
            index,
            total,
            steps: self
                .steps(doc)
                .iter()
                .map(|step| StepView {
                    step: *step,
                    title: step.title(),
                })
                .collect(),
            can_go_back: index > 0,
            is_last: index + 1 == total,
        }
    }
}
