use actix_web::{HttpResponse, http::StatusCode};
use derive_more::Display;

use crate::store::StoreError;

/// Business errors raised by the scheduling and attendance services. All are
/// synchronous and non-retryable; the HTTP layer maps them to 4xx responses.
/// Storage failures ride along as a distinct kind and map to 500.
#[derive(Debug, Display)]
pub enum ServiceError {
    #[display(fmt = "attendance record not found for this shift/user")]
    RecordNotFound,

    #[display(fmt = "cannot clock out before clocking in")]
    InvalidSequence,

    #[display(fmt = "{}", _0)]
    InvalidInput(String),

    #[display(fmt = "duplicate shift exists")]
    DuplicateShift,

    #[display(fmt = "storage error: {}", _0)]
    Store(StoreError),
}

impl std::error::Error for ServiceError {}

impl From<StoreError> for ServiceError {
    fn from(e: StoreError) -> Self {
        ServiceError::Store(e)
    }
}

impl actix_web::ResponseError for ServiceError {
    fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::RecordNotFound => StatusCode::NOT_FOUND,
            ServiceError::InvalidSequence | ServiceError::InvalidInput(_) => {
                StatusCode::BAD_REQUEST
            }
            ServiceError::DuplicateShift => StatusCode::CONFLICT,
            ServiceError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let ServiceError::Store(e) = self {
            tracing::error!(error = %e, "storage failure");
            // Driver details stay out of the response body
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "message": "Internal Server Error"
            }));
        }
        HttpResponse::build(self.status_code()).json(serde_json::json!({
            "message": self.to_string()
        }))
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;
