// Edit service - Use cases behind the dashboard form (edit, create, delete)
use crate::application::dashboard_repository::{DashboardRepository, RepositoryError};
use crate::domain::dashboard::Dashboard;
use crate::domain::form::{DashboardForm, FormAction, ValidationError};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

/// Simulated latency of a dashboard write.
pub const SUBMIT_DELAY: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationVariant {
    Default,
    Destructive,
}

/// Toast-style message reported back to the user after a submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub variant: NotificationVariant,
}

impl Notification {
    pub fn success(description: impl Into<String>) -> Self {
        Self {
            title: "Success".to_string(),
            description: description.into(),
            variant: NotificationVariant::Default,
        }
    }

    pub fn error(description: impl Into<String>) -> Self {
        Self {
            title: "Error".to_string(),
            description: description.into(),
            variant: NotificationVariant::Destructive,
        }
    }
}

#[derive(Debug, Error)]
pub enum EditError {
    #[error("dashboard {0} not found")]
    NotFound(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("{message}: {source}")]
    WriteFailed {
        message: &'static str,
        source: RepositoryError,
    },
}

impl EditError {
    pub fn notification(&self) -> Notification {
        match self {
            EditError::NotFound(_) => Notification::error("Dashboard not found"),
            EditError::Validation(e) => Notification::error(e.to_string()),
            EditError::WriteFailed { message, .. } => Notification::error(*message),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitOutcome {
    pub notification: Notification,
    pub redirect: String,
    pub dashboard: Dashboard,
}

#[derive(Clone)]
pub struct EditService {
    repository: Arc<dyn DashboardRepository>,
    submit_delay: Duration,
}

impl EditService {
    pub fn new(repository: Arc<dyn DashboardRepository>) -> Self {
        Self::with_delay(repository, SUBMIT_DELAY)
    }

    pub fn with_delay(repository: Arc<dyn DashboardRepository>, submit_delay: Duration) -> Self {
        Self {
            repository,
            submit_delay,
        }
    }

    /// Form seeded from the stored dashboard, `None` when the id is unknown.
    pub async fn load_form(&self, id: &str) -> Option<DashboardForm> {
        self.repository
            .get(id)
            .await
            .map(|dashboard| DashboardForm::from_dashboard(&dashboard))
    }

    pub fn apply_action(&self, mut form: DashboardForm, action: FormAction) -> DashboardForm {
        form.apply(action);
        form
    }

    pub async fn submit_update(&self, id: &str, form: &DashboardForm) -> Result<SubmitOutcome, EditError> {
        if self.repository.get(id).await.is_none() {
            return Err(EditError::NotFound(id.to_string()));
        }

        let draft = form.validate().inspect_err(|e| {
            tracing::warn!("Rejected update for dashboard {}: {}", id, e);
        })?;

        tokio::time::sleep(self.submit_delay).await;

        let dashboard = self
            .repository
            .update(id, draft)
            .await
            .map_err(|source| EditError::WriteFailed {
                message: "Failed to update dashboard",
                source,
            })?;

        tracing::info!("Updated dashboard {}", dashboard.id);

        Ok(SubmitOutcome {
            notification: Notification::success("Dashboard updated successfully!"),
            redirect: format!("/dashboards/{}", dashboard.id),
            dashboard,
        })
    }

    pub async fn submit_create(&self, form: &DashboardForm) -> Result<SubmitOutcome, EditError> {
        let draft = form.validate().inspect_err(|e| {
            tracing::warn!("Rejected new dashboard: {}", e);
        })?;

        tokio::time::sleep(self.submit_delay).await;

        let dashboard = self
            .repository
            .create(draft)
            .await
            .map_err(|source| EditError::WriteFailed {
                message: "Failed to create dashboard",
                source,
            })?;

        tracing::info!("Created dashboard {} ({})", dashboard.id, dashboard.name);

        Ok(SubmitOutcome {
            notification: Notification::success("Dashboard created successfully!"),
            redirect: format!("/dashboards/{}", dashboard.id),
            dashboard,
        })
    }

    pub async fn delete(&self, id: &str) -> Result<(), EditError> {
        self.repository.delete(id).await.map_err(|e| match e {
            RepositoryError::NotFound(id) => EditError::NotFound(id),
        })?;
        tracing::info!("Deleted dashboard {}", id);
        Ok(())
    }
}
