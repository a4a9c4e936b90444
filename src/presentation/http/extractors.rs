// src/presentation/http/extractors.rs
use super::error::HttpError;
use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
};
use serde::de::DeserializeOwned;

/// `Json` whose rejections use the API error body instead of plain text.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(reject_json)?;
        Ok(Self(value))
    }
}

fn reject_json(rejection: JsonRejection) -> HttpError {
    HttpError::new(rejection.status(), "INVALID_REQUEST", rejection.body_text())
}

/// Parse an optional JSON body: an empty body yields `T::default()`.
pub fn parse_optional_body<T>(body: &[u8]) -> Result<T, HttpError>
where
    T: DeserializeOwned + Default,
{
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    serde_json::from_slice(body)
        .map_err(|err| HttpError::bad_request(format!("failed to parse request body: {err}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Default, Deserialize)]
    struct Probe {
        value: Option<String>,
    }

    #[test]
    fn empty_body_is_default() {
        let probe: Probe = parse_optional_body(b"").unwrap();
        assert!(probe.value.is_none());
        let probe: Probe = parse_optional_body(b" \n").unwrap();
        assert!(probe.value.is_none());
    }

    #[test]
    fn json_body_is_parsed() {
        let probe: Probe = parse_optional_body(br#"{"value":"x"}"#).unwrap();
        assert_eq!(probe.value.as_deref(), Some("x"));
    }

    #[test]
    fn malformed_body_is_bad_request() {
        let err = parse_optional_body::<Probe>(b"{oops").unwrap_err();
        assert_eq!(err.status(), axum::http::StatusCode::BAD_REQUEST);
    }
}
