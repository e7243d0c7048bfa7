//! HTTP client for the activities backend.
//!
//! Three same-origin endpoints: list, signup, unregister. Activity names
//! and emails are percent-encoded into the path/query here, and every
//! failure is folded into [`ApiError`] so callers never see a raw
//! transport error.

use crate::model::ActivityCollection;
use gloo_net::http::{Request, Response};
use serde::Deserialize;
use std::fmt;

pub const ACTIVITIES_URL: &str = "/activities";

#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Server answered with a non-2xx status; `detail` is the parsed
    /// `{detail}` field when the body carried one.
    Status { status: u16, detail: Option<String> },
    /// The request never produced a response (offline, CORS, aborted).
    Network(String),
    /// The response body was not the JSON shape we expected.
    Parse(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Status {
                status,
                detail: Some(detail),
            } => write!(f, "request failed with status {status}: {detail}"),
            ApiError::Status { status, detail: None } => {
                write!(f, "request failed with status {status}")
            }
            ApiError::Network(e) => write!(f, "network error: {e}"),
            ApiError::Parse(e) => write!(f, "invalid response body: {e}"),
        }
    }
}

impl ApiError {
    /// True for the paths the page treats as "the request itself broke"
    /// (as opposed to the server rejecting it with a status + detail).
    pub fn is_transport(&self) -> bool {
        !matches!(self, ApiError::Status { .. })
    }
}

pub fn signup_url(activity: &str, email: &str) -> String {
    format!(
        "{}/{}/signup?email={}",
        ACTIVITIES_URL,
        urlencoding::encode(activity),
        urlencoding::encode(email)
    )
}

pub fn unregister_url(activity: &str, email: &str) -> String {
    format!(
        "{}/{}/unregister?email={}",
        ACTIVITIES_URL,
        urlencoding::encode(activity),
        urlencoding::encode(email)
    )
}

#[derive(Debug, Deserialize)]
struct SignupBody {
    #[serde(default)]
    message: String,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<String>,
}

/// `GET /activities` → the full name → activity map.
pub async fn fetch_activities() -> Result<ActivityCollection, ApiError> {
    let resp = Request::get(ACTIVITIES_URL)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if !resp.ok() {
        return Err(status_error(resp).await);
    }
    resp.json::<ActivityCollection>()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))
}

/// `POST /activities/{name}/signup?email=…` → the server's `message`.
pub async fn signup(activity: &str, email: &str) -> Result<String, ApiError> {
    let resp = Request::post(&signup_url(activity, email))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if !resp.ok() {
        return Err(status_error(resp).await);
    }
    let body = resp
        .json::<SignupBody>()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))?;
    Ok(body.message)
}

/// `DELETE /activities/{name}/unregister?email=…`; the 2xx body is ignored.
pub async fn unregister(activity: &str, email: &str) -> Result<(), ApiError> {
    let resp = Request::delete(&unregister_url(activity, email))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if !resp.ok() {
        return Err(status_error(resp).await);
    }
    Ok(())
}

async fn status_error(resp: Response) -> ApiError {
    let status = resp.status();
    match resp.json::<ErrorBody>().await {
        Ok(body) => ApiError::Status {
            status,
            detail: body.detail,
        },
        // A non-JSON error body reads as a broken response, same as the
        // transport path.
        Err(e) => ApiError::Parse(e.to_string()),
    }
}
