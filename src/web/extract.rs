// src/web/extract.rs
// JSON body extractor that reports which field failed and why

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::header,
};
use serde::de::DeserializeOwned;
use serde_json::error::Category;
use serde_path_to_error::Segment;
use tracing::debug;

use super::error::{ApiError, FieldError};

/// Like `axum::Json`, but rejections carry a structured `detail` list
#[derive(Debug, Clone)]
pub struct ApiJson<T>(pub T);

impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !has_json_content_type(&req) {
            return Err(ApiError::unsupported_media_type(
                "Expected request with `Content-Type: application/json`",
            ));
        }

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| ApiError::custom(e.status(), e.body_text()))?;

        parse_body(&bytes).map(ApiJson)
    }
}

/// A missing header is read as JSON; only an explicit other type is refused
fn has_json_content_type(req: &Request) -> bool {
    let Some(content_type) = req.headers().get(header::CONTENT_TYPE) else {
        return true;
    };
    let Ok(content_type) = content_type.to_str() else {
        return false;
    };

    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    essence == "application/json"
        || (essence.starts_with("application/") && essence.ends_with("+json"))
}

/// Deserialize `bytes` into `T`, mapping failures onto `ApiError`
pub fn parse_body<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, ApiError> {
    let mut de = serde_json::Deserializer::from_slice(bytes);

    let value = serde_path_to_error::deserialize(&mut de).map_err(|err| {
        let mut loc = vec![serde_json::Value::from("body")];
        for segment in err.path().iter() {
            match segment {
                Segment::Seq { index } => loc.push((*index).into()),
                Segment::Map { key } => loc.push(key.clone().into()),
                Segment::Enum { variant } => loc.push(variant.clone().into()),
                Segment::Unknown => {}
            }
        }
        schema_error(err.into_inner(), loc, bytes)
    })?;

    de.end()
        .map_err(|err| schema_error(err, vec!["body".into()], bytes))?;
    Ok(value)
}

fn schema_error(err: serde_json::Error, mut loc: Vec<serde_json::Value>, body: &[u8]) -> ApiError {
    let msg = strip_position(&err.to_string());
    debug!(error = %msg, "Rejected request body");

    match err.classify() {
        Category::Syntax | Category::Eof | Category::Io => {
            let offset = byte_offset(body, err.line(), err.column());
            let mut error = ApiError::validation(vec![FieldError {
                loc: vec!["body".into(), offset.into()],
                msg: msg.clone(),
                kind: "json_invalid".to_string(),
            }]);
            error.message = format!("Invalid JSON body: {msg}");
            error
        }
        Category::Data => {
            let kind = match missing_field(&msg) {
                Some(field) => {
                    loc.push(field.into());
                    "missing"
                }
                None => "type_error",
            };
            ApiError::validation(vec![FieldError {
                loc,
                msg,
                kind: kind.to_string(),
            }])
        }
    }
}

/// serde_json appends " at line N column M" to its messages
fn strip_position(msg: &str) -> String {
    match msg.rsplit_once(" at line ") {
        Some((head, _)) => head.to_string(),
        None => msg.to_string(),
    }
}

/// Byte position of a 1-based line/column pair reported by serde_json
fn byte_offset(body: &[u8], line: usize, column: usize) -> usize {
    if line == 0 {
        return 0;
    }
    let line_start: usize = body
        .split(|b| *b == b'\n')
        .take(line - 1)
        .map(|l| l.len() + 1)
        .sum();
    (line_start + column.saturating_sub(1)).min(body.len())
}

/// Field name from a "missing field `name`" message
fn missing_field(msg: &str) -> Option<&str> {
    msg.strip_prefix("missing field `")?.split('`').next()
}
