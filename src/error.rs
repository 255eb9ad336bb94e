use actix_web::error::JsonPayloadError;
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

/// Every failure surfaces to the client as HTTP 400 with the underlying
/// error text in the `error` field. Missing-id updates and deletes are not
/// errors at all; they succeed silently.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Database(#[from] sqlx::Error),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({ "error": self.to_string() }))
    }
}

/// Shapes actix's JSON body deserialization failures like every other error.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    ApiError::Validation(err.to_string()).into()
}

#[cfg(test)]
mod tests {
    use super::ApiError;
    use actix_web::{ResponseError, http::StatusCode};

    #[test]
    fn all_variants_map_to_bad_request() {
        let validation = ApiError::Validation("missing field 'name'".into());
        assert_eq!(validation.status_code(), StatusCode::BAD_REQUEST);

        let database = ApiError::Database(sqlx::Error::RowNotFound);
        assert_eq!(database.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn validation_message_is_preserved() {
        let err = ApiError::Validation("Expected a list of attendance records".into());
        assert_eq!(err.to_string(), "Expected a list of attendance records");
    }
}
