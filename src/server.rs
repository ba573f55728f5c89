use std::net::SocketAddr;

use axum::{
    Json, Router,
    extract::Query,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use log::{error, info};
use serde::{Deserialize, Serialize};

use crate::{
    BatchError,
    generate::generate_persons,
    item::fake::{Person, PhoneMode},
};

pub const DEFAULT_RECORDS: usize = 10;

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct HealthBody {
    pub status: String,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct ErrorBody {
    pub error: String,
}

/// Query of `GET /api/persons`. Kept as raw strings so bad values get our own 400.
#[derive(Deserialize, Debug, Default, PartialEq)]
pub struct PersonsQuery {
    pub n: Option<String>,
    pub phones: Option<String>,
}

impl PersonsQuery {
    /// Keeps the first value of each known key, ignoring repeats and unknown keys.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut query = PersonsQuery::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "n" => &mut query.n,
                "phones" => &mut query.phones,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        query
    }
}

pub struct ApiError(BatchError);

impl From<BatchError> for ApiError {
    fn from(err: BatchError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.0 {
            BatchError::Validation(_) => StatusCode::BAD_REQUEST,
            _ => {
                error!("Request failed: {}", self.0);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        let body = ErrorBody {
            error: self.0.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

pub fn router() -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/persons", get(get_persons))
}

async fn health() -> Json<HealthBody> {
    Json(HealthBody {
        status: "ok".to_string(),
    })
}

async fn get_persons(
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<Vec<Person>>, ApiError> {
    let query = PersonsQuery::from_pairs(pairs);
    let count = parse_count(query.n.as_deref())?;
    let phone_mode = match query.phones.as_deref() {
        None => PhoneMode::Single,
        Some(raw) => raw.parse::<PhoneMode>().map_err(BatchError::Validation)?,
    };

    info!("Generating {} persons", count);
    let persons = tokio::task::spawn_blocking(move || generate_persons(count, None, phone_mode))
        .await
        .map_err(BatchError::from)??;
    Ok(Json(persons))
}

/// Record count from the `n` query parameter; 10 when absent.
fn parse_count(raw: Option<&str>) -> Result<usize, BatchError> {
    let Some(raw) = raw else {
        return Ok(DEFAULT_RECORDS);
    };

    let count: i64 = raw
        .parse()
        .map_err(|_| BatchError::Validation("Invalid number of records".to_string()))?;

    if count <= 0 {
        return Err(BatchError::Validation(
            "Number of records must be greater than 0".to_string(),
        ));
    }

    usize::try_from(count)
        .map_err(|_| BatchError::Validation("Invalid number of records".to_string()))
}

/// Serves [`router`] on `addr` until Ctrl-C.
pub async fn serve(addr: SocketAddr) -> Result<(), BatchError> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, router())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!("Unable to listen for shutdown signal: {}", err);
    }
}

#[cfg(test)]
mod tests {
    use axum::{
        body::to_bytes,
        http::{StatusCode, header},
        response::IntoResponse,
    };

    use super::{ApiError, DEFAULT_RECORDS, ErrorBody, PersonsQuery, parse_count};
    use crate::{BatchError, item::fake::age::calculate_age};

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect()
    }

    #[test]
    fn first_value_of_a_repeated_key_wins() {
        let query = PersonsQuery::from_pairs(pairs(&[
            ("n", "5"),
            ("phones", "single"),
            ("n", "6"),
            ("page", "2"),
            ("phones", "by-category"),
        ]));

        assert_eq!(query.n.as_deref(), Some("5"));
        assert_eq!(query.phones.as_deref(), Some("single"));
    }

    #[test]
    fn absent_keys_stay_empty() {
        assert_eq!(PersonsQuery::from_pairs(Vec::new()), PersonsQuery::default());
    }

    #[tokio::test]
    async fn generation_failure_is_a_json_500() {
        let parse_error = calculate_age("01/01/2000").unwrap_err();
        let response = ApiError(BatchError::Generation(Box::new(parse_error))).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let error: ErrorBody = serde_json::from_slice(&body).unwrap();
        assert!(
            error.error.starts_with("error generating person record: error parsing birthday:"),
            "{}",
            error.error
        );
    }

    #[tokio::test]
    async fn failed_blocking_task_is_a_json_500() {
        let join_error = tokio::task::spawn_blocking(|| panic!("generator panicked"))
            .await
            .unwrap_err();
        let response = ApiError(BatchError::from(join_error)).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let error: ErrorBody = serde_json::from_slice(&body).unwrap();
        assert!(
            error.error.starts_with("generation task failed:"),
            "{}",
            error.error
        );
    }

    #[tokio::test]
    async fn validation_failure_is_a_json_400() {
        let response =
            ApiError(BatchError::Validation("Invalid number of records".to_string())).into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], br#"{"error":"Invalid number of records"}"#);
    }

    #[test]
    fn count_defaults_to_ten() {
        assert_eq!(parse_count(None).unwrap(), DEFAULT_RECORDS);
    }

    #[test]
    fn count_accepts_positive_integers() {
        assert_eq!(parse_count(Some("5")).unwrap(), 5);
        assert_eq!(parse_count(Some("+3")).unwrap(), 3);
    }

    #[test]
    fn count_rejects_bad_values() {
        for raw in ["abc", "", "1.5", "0", "-5", "99999999999999999999"] {
            assert!(
                matches!(parse_count(Some(raw)), Err(BatchError::Validation(_))),
                "{:?}",
                raw
            );
        }
    }

    #[test]
    fn messages_match_the_api() {
        let invalid = parse_count(Some("abc")).unwrap_err().to_string();
        assert_eq!(invalid, "Invalid number of records");

        let negative = parse_count(Some("-5")).unwrap_err().to_string();
        assert_eq!(negative, "Number of records must be greater than 0");
    }
}
