//! In-memory job application board. Applications keep insertion order;
//! the board view groups them into one column per status.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::job::{ApplicationStatus, JobApplication};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewApplication {
    pub title: String,
    pub company: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub salary: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Partial edit. Absent fields are left alone; an empty salary or notes clears it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApplicationUpdate {
    pub title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub status: Option<ApplicationStatus>,
    pub salary: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BoardColumn {
    pub status: ApplicationStatus,
    pub title: &'static str,
    pub applications: Vec<JobApplication>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TrackerStats {
    pub total: usize,
    pub applied: usize,
    pub interview: usize,
    pub offer: usize,
    pub rejected: usize,
}

#[derive(Debug, Default)]
pub struct JobTracker {
    applications: RwLock<Vec<JobApplication>>,
}

struct Sample {
    title: &'static str,
    company: &'static str,
    location: &'static str,
    applied: (i32, u32, u32),
    status: ApplicationStatus,
    salary: &'static str,
    notes: Option<&'static str>,
}

const SAMPLE_APPLICATIONS: &[Sample] = &[
    Sample {
        title: "Senior Frontend Developer",
        company: "TechCorp",
        location: "San Francisco, CA",
        applied: (2024, 1, 15),
        status: ApplicationStatus::Interview,
        salary: "$120,000 - $150,000",
        notes: Some("Great team culture, remote-friendly"),
    },
    Sample {
        title: "Full Stack Engineer",
        company: "StartupXYZ",
        location: "New York, NY",
        applied: (2024, 1, 10),
        status: ApplicationStatus::Applied,
        salary: "$100,000 - $130,000",
        notes: None,
    },
    Sample {
        title: "Software Engineer",
        company: "BigTech Inc",
        location: "Seattle, WA",
        applied: (2024, 1, 5),
        status: ApplicationStatus::Offer,
        salary: "$140,000 - $180,000",
        notes: Some("Excellent benefits package"),
    },
];

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Job application {id} not found"))
}

impl JobTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// A board pre-filled with three example applications.
    pub fn with_sample_applications() -> Self {
        let applications = SAMPLE_APPLICATIONS
            .iter()
            .filter_map(|s| {
                let (y, m, d) = s.applied;
                Some(JobApplication {
                    id: Uuid::new_v4(),
                    title: s.title.to_string(),
                    company: s.company.to_string(),
                    location: s.location.to_string(),
                    applied_date: NaiveDate::from_ymd_opt(y, m, d)?,
                    status: s.status,
                    salary: Some(s.salary.to_string()),
                    notes: s.notes.map(str::to_string),
                })
            })
            .collect();
        JobTracker {
            applications: RwLock::new(applications),
        }
    }

    /// Records a new application dated today with status `applied`.
    pub async fn add(&self, new: NewApplication) -> Result<JobApplication, AppError> {
        let title = new.title.trim();
        let company = new.company.trim();
        if title.is_empty() || company.is_empty() {
            return Err(AppError::Validation(
                "title and company are required".to_string(),
            ));
        }

        let application = JobApplication {
            id: Uuid::new_v4(),
            title: title.to_string(),
            company: company.to_string(),
            location: new.location.trim().to_string(),
            applied_date: Utc::now().date_naive(),
            status: ApplicationStatus::Applied,
            salary: non_blank(new.salary),
            notes: non_blank(new.notes),
        };
        self.applications.write().await.push(application.clone());
        info!(
            "Tracking application {} ({} at {})",
            application.id, application.title, application.company
        );
        Ok(application)
    }

    /// Moves an application to another column.
    pub async fn move_to(
        &self,
        id: Uuid,
        status: ApplicationStatus,
    ) -> Result<JobApplication, AppError> {
        let mut applications = self.applications.write().await;
        let application = applications
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| not_found(id))?;
        application.status = status;
        Ok(application.clone())
    }

    pub async fn update(
        &self,
        id: Uuid,
        update: ApplicationUpdate,
    ) -> Result<JobApplication, AppError> {
        let title = update.title.map(|t| t.trim().to_string());
        let company = update.company.map(|c| c.trim().to_string());
        if title.as_deref() == Some("") || company.as_deref() == Some("") {
            return Err(AppError::Validation(
                "title and company cannot be blank".to_string(),
            ));
        }

        let mut applications = self.applications.write().await;
        let application = applications
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| not_found(id))?;

        if let Some(title) = title {
            application.title = title;
        }
        if let Some(company) = company {
            application.company = company;
        }
        if let Some(location) = update.location {
            application.location = location.trim().to_string();
        }
        if let Some(status) = update.status {
            application.status = status;
        }
        if update.salary.is_some() {
            application.salary = non_blank(update.salary);
        }
        if update.notes.is_some() {
            application.notes = non_blank(update.notes);
        }
        Ok(application.clone())
    }

    pub async fn remove(&self, id: Uuid) -> Result<(), AppError> {
        let mut applications = self.applications.write().await;
        let before = applications.len();
        applications.retain(|a| a.id != id);
        if applications.len() == before {
            return Err(not_found(id));
        }
        info!("Removed application {id}");
        Ok(())
    }

    pub async fn list(&self) -> Vec<JobApplication> {
        self.applications.read().await.clone()
    }

    /// Four columns in fixed order: applied, interview, offer, rejected.
    pub async fn board(&self) -> Vec<BoardColumn> {
        let applications = self.applications.read().await;
        ApplicationStatus::ALL
            .iter()
            .map(|&status| BoardColumn {
                status,
                title: status.title(),
                applications: applications
                    .iter()
                    .filter(|a| a.status == status)
                    .cloned()
                    .collect(),
            })
            .collect()
    }

    pub async fn stats(&self) -> TrackerStats {
        let applications = self.applications.read().await;
        let count = |status: ApplicationStatus| applications.iter().filter(|a| a.status == status).count();
        TrackerStats {
            total: applications.len(),
            applied: count(ApplicationStatus::Applied),
            interview: count(ApplicationStatus::Interview),
            offer: count(ApplicationStatus::Offer),
            rejected: count(ApplicationStatus::Rejected),
        }
    }
}
