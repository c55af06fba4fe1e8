//! REST API client for the hospital backend.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`, always with cookie
//! credentials so the session rides along on every call.
//! Host-side: stubs returning `ApiError::Unavailable` since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call races a 10 second deadline and aborts the underlying fetch on
//! expiry. Non-2xx responses are classified into `ApiError` with the
//! server's `message` field preserved when one was sent, so callers can
//! distinguish a stale session (401) from everything else.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use thiserror::Error;

use super::types::{AuthEnvelope, Patient, PatientPayload, User, UserPayload};
#[cfg(feature = "csr")]
use super::types::LoginRequest;
#[cfg(feature = "csr")]
use serde::Deserialize;
#[cfg(feature = "csr")]
use serde::de::DeserializeOwned;

/// Production backend. Override at build time with `PORTAL_API_URL`.
#[cfg(any(test, feature = "csr"))]
const DEFAULT_BASE_URL: &str = "https://healthcare-backend-216484913698.europe-west1.run.app";

#[cfg(feature = "csr")]
const REQUEST_DEADLINE: std::time::Duration = std::time::Duration::from_secs(10);

/// Failure taxonomy for backend calls.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Transport-level failure before any HTTP status arrived.
    #[error("network error: {0}")]
    Network(String),
    /// The request deadline elapsed and the call was aborted.
    #[error("request timed out")]
    Timeout,
    /// HTTP 401: the session cookie is missing or stale.
    #[error("not authenticated")]
    Unauthorized { message: Option<String> },
    /// Any other non-2xx status, with the server's message when one was sent.
    #[error("request failed with status {status}")]
    Status { status: u16, message: Option<String> },
    /// 2xx response whose body did not match the expected shape.
    #[error("malformed response: {0}")]
    Decode(String),
    /// Browser networking is not available in this build.
    #[error("browser networking unavailable")]
    Unavailable,
}

impl ApiError {
    /// True when the backend rejected the session cookie outright.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized { .. })
    }

    /// Server-provided human-readable message, when the error carried one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Unauthorized { message } | ApiError::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

#[cfg(any(test, feature = "csr"))]
fn base_url() -> &'static str {
    option_env!("PORTAL_API_URL").unwrap_or(DEFAULT_BASE_URL)
}

#[cfg(any(test, feature = "csr"))]
fn api_url(path: &str) -> String {
    format!("{}{path}", base_url())
}

#[cfg(any(test, feature = "csr"))]
fn patient_url(id: &str) -> String {
    api_url(&format!("/api/patients/{id}"))
}

#[cfg(any(test, feature = "csr"))]
fn user_url(id: &str) -> String {
    api_url(&format!("/api/users/{id}"))
}

#[cfg(any(test, feature = "csr"))]
fn classify_status(status: u16, message: Option<String>) -> ApiError {
    if status == 401 {
        ApiError::Unauthorized { message }
    } else {
        ApiError::Status { status, message }
    }
}

/// JSON error body most backend failures carry.
#[cfg(feature = "csr")]
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

#[cfg(feature = "csr")]
fn abort_handle() -> Result<(web_sys::AbortController, web_sys::AbortSignal), ApiError> {
    let controller = web_sys::AbortController::new()
        .map_err(|_| ApiError::Network("AbortController unavailable".to_owned()))?;
    let signal = controller.signal();
    Ok((controller, signal))
}

/// Race an in-flight request against the deadline, aborting the fetch when
/// the deadline wins so the connection does not linger.
#[cfg(feature = "csr")]
async fn race_deadline<F>(
    send: F,
    controller: &web_sys::AbortController,
) -> Result<gloo_net::http::Response, ApiError>
where
    F: std::future::Future<Output = Result<gloo_net::http::Response, gloo_net::Error>>,
{
    use futures::future::{Either, select};

    let deadline = gloo_timers::future::sleep(REQUEST_DEADLINE);
    match select(Box::pin(send), Box::pin(deadline)).await {
        Either::Left((result, _)) => result.map_err(|e| ApiError::Network(e.to_string())),
        Either::Right(((), _)) => {
            controller.abort();
            Err(ApiError::Timeout)
        }
    }
}

#[cfg(feature = "csr")]
async fn error_from_response(resp: gloo_net::http::Response) -> ApiError {
    let status = resp.status();
    let message = resp.json::<ErrorBody>().await.ok().and_then(|body| body.message);
    classify_status(status, message)
}

#[cfg(feature = "csr")]
async fn decode_json<T: DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

/// Sign in via `POST /api/auth/login`.
///
/// # Errors
///
/// Returns an `ApiError` on transport failure, timeout, or a non-2xx status;
/// a 401 here means bad credentials, not a stale session.
pub async fn login(email: &str, password: &str) -> Result<AuthEnvelope, ApiError> {
    #[cfg(feature = "csr")]
    {
        let body = LoginRequest {
            email: email.to_owned(),
            password: password.to_owned(),
        };
        let (controller, signal) = abort_handle()?;
        let send = gloo_net::http::Request::post(&api_url("/api/auth/login"))
            .credentials(web_sys::RequestCredentials::Include)
            .abort_signal(Some(&signal))
            .json(&body)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send();
        let resp = race_deadline(send, &controller).await?;
        if !resp.ok() {
            return Err(error_from_response(resp).await);
        }
        decode_json(resp).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (email, password);
        Err(ApiError::Unavailable)
    }
}

/// Probe the cookie session via `GET /api/auth/me`.
///
/// # Errors
///
/// Returns an `ApiError` on transport failure, timeout, or a non-2xx status.
pub async fn fetch_session() -> Result<AuthEnvelope, ApiError> {
    #[cfg(feature = "csr")]
    {
        let (controller, signal) = abort_handle()?;
        let send = gloo_net::http::Request::get(&api_url("/api/auth/me"))
            .credentials(web_sys::RequestCredentials::Include)
            .abort_signal(Some(&signal))
            .send();
        let resp = race_deadline(send, &controller).await?;
        if !resp.ok() {
            return Err(error_from_response(resp).await);
        }
        decode_json(resp).await
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Invalidate the server session via `POST /api/auth/logout`.
///
/// # Errors
///
/// Returns an `ApiError` on transport failure, timeout, or a non-2xx status.
pub async fn logout() -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        let (controller, signal) = abort_handle()?;
        let send = gloo_net::http::Request::post(&api_url("/api/auth/logout"))
            .credentials(web_sys::RequestCredentials::Include)
            .abort_signal(Some(&signal))
            .send();
        let resp = race_deadline(send, &controller).await?;
        if !resp.ok() {
            return Err(error_from_response(resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Fetch every patient record via `GET /api/patients`.
///
/// # Errors
///
/// Returns an `ApiError` on transport failure, timeout, a non-2xx status,
/// or an undecodable body.
pub async fn fetch_patients() -> Result<Vec<Patient>, ApiError> {
    #[cfg(feature = "csr")]
    {
        let (controller, signal) = abort_handle()?;
        let send = gloo_net::http::Request::get(&api_url("/api/patients"))
            .credentials(web_sys::RequestCredentials::Include)
            .abort_signal(Some(&signal))
            .send();
        let resp = race_deadline(send, &controller).await?;
        if !resp.ok() {
            return Err(error_from_response(resp).await);
        }
        decode_json(resp).await
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Fetch a single patient record via `GET /api/patients/{id}`.
///
/// # Errors
///
/// Returns an `ApiError` on transport failure, timeout, a non-2xx status,
/// or an undecodable body.
pub async fn fetch_patient(id: &str) -> Result<Patient, ApiError> {
    #[cfg(feature = "csr")]
    {
        let (controller, signal) = abort_handle()?;
        let send = gloo_net::http::Request::get(&patient_url(id))
            .credentials(web_sys::RequestCredentials::Include)
            .abort_signal(Some(&signal))
            .send();
        let resp = race_deadline(send, &controller).await?;
        if !resp.ok() {
            return Err(error_from_response(resp).await);
        }
        decode_json(resp).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = id;
        Err(ApiError::Unavailable)
    }
}

/// Create a patient record via `POST /api/patients`.
///
/// The created record in the response body is not decoded; list pages
/// refetch instead.
///
/// # Errors
///
/// Returns an `ApiError` on transport failure, timeout, or a non-2xx status.
pub async fn create_patient(payload: &PatientPayload) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        let (controller, signal) = abort_handle()?;
        let send = gloo_net::http::Request::post(&api_url("/api/patients"))
            .credentials(web_sys::RequestCredentials::Include)
            .abort_signal(Some(&signal))
            .json(payload)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send();
        let resp = race_deadline(send, &controller).await?;
        if !resp.ok() {
            return Err(error_from_response(resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = payload;
        Err(ApiError::Unavailable)
    }
}

/// Update a patient record via `PUT /api/patients/{id}`.
///
/// # Errors
///
/// Returns an `ApiError` on transport failure, timeout, or a non-2xx status.
pub async fn update_patient(id: &str, payload: &PatientPayload) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        let (controller, signal) = abort_handle()?;
        let send = gloo_net::http::Request::put(&patient_url(id))
            .credentials(web_sys::RequestCredentials::Include)
            .abort_signal(Some(&signal))
            .json(payload)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send();
        let resp = race_deadline(send, &controller).await?;
        if !resp.ok() {
            return Err(error_from_response(resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (id, payload);
        Err(ApiError::Unavailable)
    }
}

/// Delete a patient record via `DELETE /api/patients/{id}`.
///
/// # Errors
///
/// Returns an `ApiError` on transport failure, timeout, or a non-2xx status.
pub async fn delete_patient(id: &str) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        let (controller, signal) = abort_handle()?;
        let send = gloo_net::http::Request::delete(&patient_url(id))
            .credentials(web_sys::RequestCredentials::Include)
            .abort_signal(Some(&signal))
            .send();
        let resp = race_deadline(send, &controller).await?;
        if !resp.ok() {
            return Err(error_from_response(resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = id;
        Err(ApiError::Unavailable)
    }
}

/// Fetch every portal account via `GET /api/users`.
///
/// # Errors
///
/// Returns an `ApiError` on transport failure, timeout, a non-2xx status,
/// or an undecodable body.
pub async fn fetch_users() -> Result<Vec<User>, ApiError> {
    #[cfg(feature = "csr")]
    {
        let (controller, signal) = abort_handle()?;
        let send = gloo_net::http::Request::get(&api_url("/api/users"))
            .credentials(web_sys::RequestCredentials::Include)
            .abort_signal(Some(&signal))
            .send();
        let resp = race_deadline(send, &controller).await?;
        if !resp.ok() {
            return Err(error_from_response(resp).await);
        }
        decode_json(resp).await
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Fetch a single portal account via `GET /api/users/{id}`.
///
/// # Errors
///
/// Returns an `ApiError` on transport failure, timeout, a non-2xx status,
/// or an undecodable body.
pub async fn fetch_user(id: &str) -> Result<User, ApiError> {
    #[cfg(feature = "csr")]
    {
        let (controller, signal) = abort_handle()?;
        let send = gloo_net::http::Request::get(&user_url(id))
            .credentials(web_sys::RequestCredentials::Include)
            .abort_signal(Some(&signal))
            .send();
        let resp = race_deadline(send, &controller).await?;
        if !resp.ok() {
            return Err(error_from_response(resp).await);
        }
        decode_json(resp).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = id;
        Err(ApiError::Unavailable)
    }
}

/// Create a portal account via `POST /api/users`.
///
/// # Errors
///
/// Returns an `ApiError` on transport failure, timeout, or a non-2xx status.
pub async fn create_user(payload: &UserPayload) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        let (controller, signal) = abort_handle()?;
        let send = gloo_net::http::Request::post(&api_url("/api/users"))
            .credentials(web_sys::RequestCredentials::Include)
            .abort_signal(Some(&signal))
            .json(payload)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send();
        let resp = race_deadline(send, &controller).await?;
        if !resp.ok() {
            return Err(error_from_response(resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = payload;
        Err(ApiError::Unavailable)
    }
}

/// Update a portal account via `PUT /api/users/{id}`.
///
/// # Errors
///
/// Returns an `ApiError` on transport failure, timeout, or a non-2xx status.
pub async fn update_user(id: &str, payload: &UserPayload) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        let (controller, signal) = abort_handle()?;
        let send = gloo_net::http::Request::put(&user_url(id))
            .credentials(web_sys::RequestCredentials::Include)
            .abort_signal(Some(&signal))
            .json(payload)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send();
        let resp = race_deadline(send, &controller).await?;
        if !resp.ok() {
            return Err(error_from_response(resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (id, payload);
        Err(ApiError::Unavailable)
    }
}

/// Delete a portal account via `DELETE /api/users/{id}`.
///
/// # Errors
///
/// Returns an `ApiError` on transport failure, timeout, or a non-2xx status.
pub async fn delete_user(id: &str) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        let (controller, signal) = abort_handle()?;
        let send = gloo_net::http::Request::delete(&user_url(id))
            .credentials(web_sys::RequestCredentials::Include)
            .abort_signal(Some(&signal))
            .send();
        let resp = race_deadline(send, &controller).await?;
        if !resp.ok() {
            return Err(error_from_response(resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = id;
        Err(ApiError::Unavailable)
    }
}
