// HTTP error responses shared by the handlers
use crate::application::edit_service::{EditError, Notification};
use crate::domain::form::ValidationError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct NotFoundBody {
    title: &'static str,
    message: String,
    back_href: &'static str,
}

#[derive(Debug, Serialize)]
struct NotificationBody {
    notification: Notification,
}

#[derive(Debug)]
pub enum ApiError {
    /// No dashboard with this id
    NotFound(String),
    /// Form rejected before any write
    Validation(ValidationError),
    /// Write attempted but failed; carries the user-facing description
    Failed(Notification),
}

impl From<EditError> for ApiError {
    fn from(err: EditError) -> Self {
        match err {
            EditError::NotFound(id) => ApiError::NotFound(id),
            EditError::Validation(e) => ApiError::Validation(e),
            failed @ EditError::WriteFailed { .. } => {
                tracing::error!("Dashboard write failed: {}", failed);
                ApiError::Failed(failed.notification())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound(id) => (
                StatusCode::NOT_FOUND,
                Json(NotFoundBody {
                    title: "Dashboard Not Found",
                    message: format!("No dashboard with id {}", id),
                    back_href: "/",
                }),
            )
                .into_response(),
            ApiError::Validation(e) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(NotificationBody {
                    notification: Notification::error(e.to_string()),
                }),
            )
                .into_response(),
            ApiError::Failed(notification) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(NotificationBody { notification }),
            )
                .into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dashboard_repository::RepositoryError;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_not_found_response() {
        let response = ApiError::NotFound("7".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_json(response).await;
        assert_eq!(body["title"], "Dashboard Not Found");
        assert_eq!(body["backHref"], "/");
    }

    #[tokio::test]
    async fn test_validation_response() {
        let response = ApiError::Validation(ValidationError::MissingBuckets).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body = body_json(response).await;
        assert_eq!(body["notification"]["title"], "Error");
        assert_eq!(body["notification"]["description"], "At least one bucket is required");
        assert_eq!(body["notification"]["variant"], "destructive");
    }

    #[tokio::test]
    async fn test_write_failure_response() {
        let err = EditError::WriteFailed {
            message: "Failed to update dashboard",
            source: RepositoryError::NotFound("1".to_string()),
        };
        let response = ApiError::from(err).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["notification"]["description"], "Failed to update dashboard");
    }
}
