//! Lenient JSON body: what the validators see for a product payload.

use crate::error::AppError;
use async_trait::async_trait;
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::{header, HeaderMap},
    Json,
};
use serde_json::Value;

/// Parsed request body. A missing body, an empty body, or a body that is not declared as
/// JSON all become `Value::Null`, so the field validators report what is missing.
/// Malformed JSON and buffering failures keep the status axum assigns them (400, 413, ...).
#[derive(Clone, Debug)]
pub struct JsonBody(pub Value);

#[async_trait]
impl<S> FromRequest<S> for JsonBody
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let json_typed = has_json_content_type(req.headers());
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|r| AppError::Rejected {
                status: r.status(),
                message: r.body_text(),
            })?;
        if !json_typed || bytes.is_empty() {
            return Ok(JsonBody(Value::Null));
        }
        let Json(value) = Json::<Value>::from_bytes(&bytes).map_err(|r| AppError::Rejected {
            status: r.status(),
            message: r.body_text(),
        })?;
        Ok(JsonBody(value))
    }
}

fn has_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers.get(header::CONTENT_TYPE).and_then(|v| v.to_str().ok()) else {
        return false;
    };
    let essence = content_type.split(';').next().unwrap_or("").trim().to_ascii_lowercase();
    essence == "application/json" || (essence.starts_with("application/") && essence.ends_with("+json"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::StatusCode};
    use axum::http::Request as HttpRequest;
    use serde_json::json;

    async fn extract(content_type: Option<&str>, body: &'static str) -> Result<Value, AppError> {
        let mut builder = HttpRequest::builder().method("POST").uri("/");
        if let Some(ct) = content_type {
            builder = builder.header(header::CONTENT_TYPE, ct);
        }
        let req = builder.body(Body::from(body)).unwrap();
        JsonBody::from_request(req, &()).await.map(|JsonBody(v)| v)
    }

    #[tokio::test]
    async fn empty_json_body_is_null() {
        assert_eq!(extract(Some("application/json"), "").await.unwrap(), Value::Null);
    }

    #[tokio::test]
    async fn untyped_body_is_null() {
        assert_eq!(extract(None, "{\"name\":\"x\"}").await.unwrap(), Value::Null);
        assert_eq!(extract(Some("text/plain"), "{\"name\":\"x\"}").await.unwrap(), Value::Null);
    }

    #[tokio::test]
    async fn json_body_is_parsed() {
        let value = extract(Some("application/json; charset=utf-8"), "{\"price\":10}").await.unwrap();
        assert_eq!(value, json!({ "price": 10 }));
        let value = extract(Some("application/merge-patch+json"), "{}").await.unwrap();
        assert_eq!(value, json!({}));
    }

    #[tokio::test]
    async fn broken_json_keeps_a_client_error_status() {
        match extract(Some("application/json"), "{\"name\": ").await {
            Err(AppError::Rejected { status, .. }) => assert_eq!(status, StatusCode::BAD_REQUEST),
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
