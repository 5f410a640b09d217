//! Document store: one current (being edited) resume plus the saved collection.
//!
//! A document only enters the saved collection on an explicit save. There is a
//! single owner, so no versioning or conflict resolution.

use chrono::Utc;
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::resume::ResumeDocument;

#[derive(Debug, Default)]
struct StoreState {
    current: Option<ResumeDocument>,
    saved: Vec<ResumeDocument>,
}

#[derive(Debug, Default)]
pub struct DocumentStore {
    state: RwLock<StoreState>,
}

impl DocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the current document with a fresh empty one.
    pub async fn create_new(&self) -> ResumeDocument {
        let doc = ResumeDocument::empty();
        self.set_current(doc.clone()).await;
        info!("Created new resume {}", doc.id);
        doc
    }

    pub async fn current(&self) -> Option<ResumeDocument> {
        self.state.read().await.current.clone()
    }

    pub async fn require_current(&self) -> Result<ResumeDocument, AppError> {
        self.current().await.ok_or_else(no_current)
    }

    /// Makes `doc` the document being edited, replacing any other.
    pub async fn set_current(&self, doc: ResumeDocument) {
        self.state.write().await.current = Some(doc);
    }

    pub async fn clear_current(&self) {
        self.state.write().await.current = None;
    }

    /// Applies `edit` to the current document and bumps `updated_at` on success.
    /// A failed edit leaves the document untouched.
    pub async fn update_current<F, R>(&self, edit: F) -> Result<(R, ResumeDocument), AppError>
    where
        F: FnOnce(&mut ResumeDocument) -> Result<R, AppError>,
    {
        let mut state = self.state.write().await;
        let current = state.current.as_mut().ok_or_else(no_current)?;

        let mut draft = current.clone();
        let out = edit(&mut draft)?;
        draft.touch();
        *current = draft.clone();
        Ok((out, draft))
    }

    /// Like `update_current`, but only while document `id` is still the one open.
    /// Guards edits computed from an earlier snapshot.
    pub async fn update_open<F, R>(&self, id: Uuid, edit: F) -> Result<(R, ResumeDocument), AppError>
    where
        F: FnOnce(&mut ResumeDocument) -> Result<R, AppError>,
    {
        self.update_current(|doc| {
            if doc.id != id {
                return Err(AppError::NotFound(format!("Resume {id} is no longer open")));
            }
            edit(doc)
        })
        .await
    }

    /// Stamps `updated_at`, upserts into the saved list by id and makes it current.
    pub async fn save(&self, mut doc: ResumeDocument) -> ResumeDocument {
        doc.touch();
        let mut state = self.state.write().await;
        match state.saved.iter().position(|r| r.id == doc.id) {
            Some(index) => state.saved[index] = doc.clone(),
            None => state.saved.push(doc.clone()),
        }
        state.current = Some(doc.clone());
        info!("Saved resume {} ({} saved)", doc.id, state.saved.len());
        doc
    }

    pub async fn save_current(&self) -> Result<ResumeDocument, AppError> {
        let doc = self.require_current().await?;
        Ok(self.save(doc).await)
    }

    /// Removes a saved resume; clears the current document when it has the same id.
    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let mut state = self.state.write().await;
        let before = state.saved.len();
        state.saved.retain(|r| r.id != id);
        if state.saved.len() == before {
            return Err(AppError::NotFound(format!("Resume {id} not found")));
        }
        if state.current.as_ref().is_some_and(|c| c.id == id) {
            state.current = None;
        }
        info!("Deleted resume {id}");
        Ok(())
    }

    /// Deletes every listed id that exists. Returns how many were removed.
    pub async fn bulk_delete(&self, ids: &[Uuid]) -> usize {
        let mut removed = 0;
        for id in ids {
            if self.delete(*id).await.is_ok() {
                removed += 1;
            }
        }
        removed
    }

    /// Loads a saved resume as the current document.
    pub async fn open(&self, id: Uuid) -> Result<ResumeDocument, AppError> {
        let doc = self.get_saved(id).await?;
        self.set_current(doc.clone()).await;
        Ok(doc)
    }

    /// Copies a saved resume under a new id and name, making the copy current
    /// without saving it.
    pub async fn duplicate(&self, id: Uuid) -> Result<ResumeDocument, AppError> {
        let mut copy = self.get_saved(id).await?;

        let now = Utc::now();
        copy.id = Uuid::new_v4();
        copy.personal_info.full_name = format!("{} (Copy)", copy.personal_info.full_name);
        copy.created_at = now;
        copy.updated_at = now;

        self.set_current(copy.clone()).await;
        info!("Duplicated resume {id} as {}", copy.id);
        Ok(copy)
    }

    pub async fn list_saved(&self) -> Vec<ResumeDocument> {
        self.state.read().await.saved.clone()
    }

    pub async fn get_saved(&self, id: Uuid) -> Result<ResumeDocument, AppError> {
        self.state
            .read()
            .await
            .saved
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Resume {id} not found")))
    }

    /// Saved resumes whose name, or any experience company or position, contains `term`.
    pub async fn search(&self, term: &str) -> Vec<ResumeDocument> {
        let needle = term.trim().to_lowercase();
        let state = self.state.read().await;
        state
            .saved
            .iter()
            .filter(|r| needle.is_empty() || matches_search(r, &needle))
            .cloned()
            .collect()
    }
}

fn matches_search(doc: &ResumeDocument, needle: &str) -> bool {
    doc.personal_info.full_name.to_lowercase().contains(needle)
        || doc.experience.iter().any(|exp| {
            exp.company.to_lowercase().contains(needle)
                || exp.position.to_lowercase().contains(needle)
        })
}

fn no_current() -> AppError {
    AppError::NotFound("No resume is currently open".to_string())
}
