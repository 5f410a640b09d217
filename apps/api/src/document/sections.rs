//! Form section editors for adding, editing and reordering the items of each resume list.
//!
//! Every list item carries an id that is unique within its list. The editors
//! address items by that id only; list position is display order.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::resume::{
    AchievementEntry, CertificationEntry, EducationEntry, ExperienceEntry, InternshipEntry,
    ProjectEntry, ResumeDocument, SkillGroup,
};

/// The list sections of a resume that are edited item by item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Experience,
    Internships,
    Education,
    Skills,
    Projects,
    Certifications,
    Achievements,
}

impl SectionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionKind::Experience => "experience",
            SectionKind::Internships => "internships",
            SectionKind::Education => "education",
            SectionKind::Skills => "skills",
            SectionKind::Projects => "projects",
            SectionKind::Certifications => "certifications",
            SectionKind::Achievements => "achievements",
        }
    }
}

/// An item living in one of the resume lists.
pub trait SectionItem: Clone {
    fn id(&self) -> Uuid;
    fn set_id(&mut self, id: Uuid);

    /// The nested string list edited one entry at a time
    /// (bullets, skill items, technologies), if the item has one.
    fn sub_items_mut(&mut self) -> Option<&mut Vec<String>> {
        None
    }
}

macro_rules! section_item {
    ($ty:ty) => {
        impl SectionItem for $ty {
            fn id(&self) -> Uuid {
                self.id
            }
            fn set_id(&mut self, id: Uuid) {
                self.id = id;
            }
        }
    };
    ($ty:ty, $sub:ident) => {
        impl SectionItem for $ty {
            fn id(&self) -> Uuid {
                self.id
            }
            fn set_id(&mut self, id: Uuid) {
                self.id = id;
            }
            fn sub_items_mut(&mut self) -> Option<&mut Vec<String>> {
                Some(&mut self.$sub)
            }
        }
    };
}

section_item!(ExperienceEntry, description);
section_item!(InternshipEntry, description);
section_item!(EducationEntry);
section_item!(SkillGroup, items);
section_item!(ProjectEntry, technologies);
section_item!(CertificationEntry);
section_item!(AchievementEntry);

// ────────────────────────────────────────────────────────────────────────────
// Generic list operations
// ────────────────────────────────────────────────────────────────────────────

/// Appends `draft` under a freshly assigned id and returns that id.
pub fn add<T: SectionItem>(list: &mut Vec<T>, mut draft: T) -> Uuid {
    let id = Uuid::new_v4();
    draft.set_id(id);
    list.push(draft);
    id
}

/// Replaces the item with `id` by `draft`, keeping its id and position.
pub fn update<T: SectionItem>(list: &mut [T], id: Uuid, mut draft: T) -> Result<(), AppError> {
    let slot = find_mut(list, id)?;
    draft.set_id(id);
    *slot = draft;
    Ok(())
}

pub fn remove<T: SectionItem>(list: &mut Vec<T>, id: Uuid) -> Result<T, AppError> {
    let index = position(list, id)?;
    Ok(list.remove(index))
}

/// Moves the item with `id` to `index`, clamped to the list bounds.
pub fn move_to<T: SectionItem>(list: &mut Vec<T>, id: Uuid, index: usize) -> Result<(), AppError> {
    let from = position(list, id)?;
    let item = list.remove(from);
    let to = index.min(list.len());
    list.insert(to, item);
    Ok(())
}

/// Appends a trimmed entry to the item's nested list. Blank input is ignored
/// and reported as `false`.
pub fn add_sub_item<T: SectionItem>(
    list: &mut [T],
    id: Uuid,
    text: &str,
) -> Result<bool, AppError> {
    let item = find_mut(list, id)?;
    let sub = item
        .sub_items_mut()
        .ok_or_else(|| AppError::Validation("This section has no nested items".to_string()))?;
    let text = text.trim();
    if text.is_empty() {
        return Ok(false);
    }
    sub.push(text.to_string());
    Ok(true)
}

pub fn remove_sub_item<T: SectionItem>(
    list: &mut [T],
    id: Uuid,
    index: usize,
) -> Result<String, AppError> {
    let item = find_mut(list, id)?;
    let sub = item
        .sub_items_mut()
        .ok_or_else(|| AppError::Validation("This section has no nested items".to_string()))?;
    if index >= sub.len() {
        return Err(AppError::Validation(format!(
            "Item index {index} is out of range (len {})",
            sub.len()
        )));
    }
    Ok(sub.remove(index))
}

fn position<T: SectionItem>(list: &[T], id: Uuid) -> Result<usize, AppError> {
    list.iter()
        .position(|item| item.id() == id)
        .ok_or_else(|| AppError::NotFound(format!("Item {id} not found")))
}

fn find_mut<T: SectionItem>(list: &mut [T], id: Uuid) -> Result<&mut T, AppError> {
    list.iter_mut()
        .find(|item| item.id() == id)
        .ok_or_else(|| AppError::NotFound(format!("Item {id} not found")))
}

// ────────────────────────────────────────────────────────────────────────────
// Dispatch by section kind (JSON drafts from the HTTP layer)
// ────────────────────────────────────────────────────────────────────────────

/// Binds `$list` to the document list selected by `$kind` and evaluates `$body`.
/// Each arm is typed independently, so generic calls infer the item type.
macro_rules! with_section {
    ($doc:expr, $kind:expr, |$list:ident| $body:expr) => {
        match $kind {
            SectionKind::Experience => {
                let $list = &mut $doc.experience;
                $body
            }
            SectionKind::Internships => {
                let $list = &mut $doc.internships;
                $body
            }
            SectionKind::Education => {
                let $list = &mut $doc.education;
                $body
            }
            SectionKind::Skills => {
                let $list = &mut $doc.skills;
                $body
            }
            SectionKind::Projects => {
                let $list = &mut $doc.projects;
                $body
            }
            SectionKind::Certifications => {
                let $list = &mut $doc.certifications;
                $body
            }
            SectionKind::Achievements => {
                let $list = &mut $doc.achievements;
                $body
            }
        }
    };
}

fn parse_draft<T: DeserializeOwned>(kind: SectionKind, draft: Value) -> Result<T, AppError> {
    serde_json::from_value(draft)
        .map_err(|e| AppError::Validation(format!("Invalid {} entry: {e}", kind.as_str())))
}

pub fn add_item(doc: &mut ResumeDocument, kind: SectionKind, draft: Value) -> Result<Uuid, AppError> {
    with_section!(doc, kind, |list| Ok(add(list, parse_draft(kind, draft)?)))
}

pub fn update_item(
    doc: &mut ResumeDocument,
    kind: SectionKind,
    id: Uuid,
    draft: Value,
) -> Result<(), AppError> {
    with_section!(doc, kind, |list| update(list, id, parse_draft(kind, draft)?))
}

pub fn remove_item(doc: &mut ResumeDocument, kind: SectionKind, id: Uuid) -> Result<(), AppError> {
    with_section!(doc, kind, |list| remove(list, id).map(|_| ()))
}

pub fn move_item(
    doc: &mut ResumeDocument,
    kind: SectionKind,
    id: Uuid,
    index: usize,
) -> Result<(), AppError> {
    with_section!(doc, kind, |list| move_to(list, id, index))
}

pub fn add_nested(
    doc: &mut ResumeDocument,
    kind: SectionKind,
    id: Uuid,
    text: &str,
) -> Result<bool, AppError> {
    with_section!(doc, kind, |list| add_sub_item(list, id, text))
}

pub fn remove_nested(
    doc: &mut ResumeDocument,
    kind: SectionKind,
    id: Uuid,
    index: usize,
) -> Result<String, AppError> {
    with_section!(doc, kind, |list| remove_sub_item(list, id, index))
}
