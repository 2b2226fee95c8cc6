//! ApiClient - handles communication with the facial-recognition backend.

use serde::Serialize;

use super::models::{FacesResponse, ImageRequest, PeopleResponse, RegisterRequest, RegisterResponse};
use crate::validate::is_valid_name;

/// Default base URL of the backend (the Flask development default).
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

/// Endpoint used both to list people and as the connectivity probe target.
pub const PEOPLE_ENDPOINT: &str = "/api/pessoas";

/// Registration endpoint.
const REGISTER_ENDPOINT: &str = "/api/cadastrar";

/// Recognition endpoint.
const RECOGNIZE_ENDPOINT: &str = "/api/reconhecer";

/// Detection-only endpoint (no matching against known faces).
const DETECT_ENDPOINT: &str = "/api/detectar_rosto";

/// Errors produced by [`ApiClient`].
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The pre-flight connectivity probe failed; the request was never sent.
    #[error("no connection to server at {base_url}; check that the backend is running")]
    NoConnection {
        /// Base URL that the probe could not reach.
        base_url: String,
    },

    /// The server answered with a non-success status.
    #[error("HTTP {status}: {body}")]
    HttpStatus {
        /// HTTP status code of the response.
        status: u16,
        /// Raw response body, kept verbatim for server-side diagnostics.
        body: String,
    },

    /// A 2xx response whose declared content type is not JSON, typically an
    /// HTML error page served with status 200.
    #[error("server response is not valid JSON (content-type: {content_type})")]
    NotJson {
        /// The `content-type` header value, or empty if absent.
        content_type: String,
    },

    /// Name rejected before any network traffic.
    #[error("invalid name {name:?}: must have at least 2 characters")]
    InvalidName {
        /// The rejected name, as given.
        name: String,
    },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("malformed JSON in response body: {0}")]
    Json(#[from] serde_json::Error),
}

/// Client for the facial-recognition backend API.
///
/// Holds no state beyond the base URL and a reusable HTTP connection pool;
/// every method is an independent call. No timeout is imposed on requests,
/// so callers that need one should wrap calls in their own.
pub struct ApiClient {
    base_url: String,
    http_client: reqwest::Client,
}

impl ApiClient {
    /// Create a client pointing at [`DEFAULT_BASE_URL`].
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL.to_string())
    }

    /// Create a client with a custom base URL.
    ///
    /// Useful for non-default deployments and for testing against a mock
    /// server. A trailing slash on `base_url` is trimmed so endpoint paths
    /// join cleanly.
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http_client: reqwest::Client::new(),
        }
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Probe the backend for reachability.
    ///
    /// Issues a GET to `/api/pessoas` and reports whether the server
    /// answered with a success status. Transport failures (connection
    /// refused, DNS, reset) are absorbed: this method never fails, it only
    /// resolves `true` or `false`. Each outcome is logged.
    pub async fn check_connectivity(&self) -> bool {
        let url = format!("{}{}", self.base_url, PEOPLE_ENDPOINT);

        match self
            .http_client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await
        {
            Ok(response) if response.status().is_success() => {
                log::info!("server reachable at {}", self.base_url);
                true
            }
            Ok(response) => {
                log::warn!(
                    "server at {} answered probe with status {}",
                    self.base_url,
                    response.status()
                );
                false
            }
            Err(e) => {
                log::error!("connectivity probe to {} failed: {}", url, e);
                false
            }
        }
    }

    /// POST a JSON payload to an endpoint path, probing connectivity first.
    ///
    /// The probe runs before the POST so that a stopped backend surfaces as
    /// a clear [`ApiError::NoConnection`] instead of a low-level transport
    /// error from the POST itself. When the probe fails the POST is never
    /// attempted.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::NoConnection` when the probe fails,
    /// `ApiError::HttpStatus` for a non-2xx response (embedding the status
    /// code and raw body), `ApiError::NotJson` for a 2xx response whose
    /// content type is not JSON, or `ApiError::Json` when the body fails to
    /// parse. Every failure is logged before being returned.
    pub async fn request_api<T: Serialize + ?Sized>(
        &self,
        path: &str,
        payload: &T,
    ) -> Result<serde_json::Value, ApiError> {
        let url = format!("{}{}", self.base_url, path);

        match self.post_json(&url, payload).await {
            Ok(value) => Ok(value),
            Err(e) => {
                log::error!("API request to {} failed: {}", url, e);
                Err(e)
            }
        }
    }

    async fn post_json<T: Serialize + ?Sized>(
        &self,
        url: &str,
        payload: &T,
    ) -> Result<serde_json::Value, ApiError> {
        if !self.check_connectivity().await {
            return Err(ApiError::NoConnection {
                base_url: self.base_url.clone(),
            });
        }

        let response = self
            .http_client
            .post(url)
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .json(payload)
            .send()
            .await?;

        Self::decode_json_response(response).await
    }

    /// Shared response decoding for GET and POST paths: status check, then
    /// content-type check, then JSON parse.
    async fn decode_json_response(
        response: reqwest::Response,
    ) -> Result<serde_json::Value, ApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string();
        if !content_type.contains("application/json") {
            return Err(ApiError::NotJson { content_type });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// List the names of all registered people.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::HttpStatus`, `ApiError::NotJson` or
    /// `ApiError::Json` under the same rules as [`Self::request_api`], and
    /// `ApiError::Http` for transport failures (no probe runs for a plain
    /// GET; the call itself already is the cheapest possible request).
    pub async fn list_people(&self) -> Result<Vec<String>, ApiError> {
        let url = format!("{}{}", self.base_url, PEOPLE_ENDPOINT);

        let result = async {
            let response = self
                .http_client
                .get(&url)
                .header("Accept", "application/json")
                .send()
                .await?;
            let value = Self::decode_json_response(response).await?;
            let parsed: PeopleResponse = serde_json::from_value(value)?;
            Ok(parsed.people)
        }
        .await;

        if let Err(e) = &result {
            log::error!("listing people from {} failed: {}", url, e);
        }
        result
    }

    /// Register a person's face.
    ///
    /// `image` must be a base64 data URL (`data:image/...;base64,...`); the
    /// server splits on the comma to recover the pixel data. The name is
    /// validated locally before any network traffic, mirroring the
    /// server-side rule.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidName` without contacting the server when
    /// the trimmed name is shorter than two characters, otherwise the
    /// failure modes of [`Self::request_api`].
    pub async fn register_face(&self, name: &str, image: &str) -> Result<String, ApiError> {
        if !is_valid_name(name) {
            return Err(ApiError::InvalidName {
                name: name.to_string(),
            });
        }

        let request = RegisterRequest {
            name: name.trim().to_string(),
            image: image.to_string(),
        };
        let value = self.request_api(REGISTER_ENDPOINT, &request).await?;
        let parsed: RegisterResponse = serde_json::from_value(value)?;
        Ok(parsed.success)
    }

    /// Recognize known faces in an image given as a base64 data URL.
    pub async fn recognize_faces(&self, image: &str) -> Result<FacesResponse, ApiError> {
        let request = ImageRequest {
            image: image.to_string(),
        };
        let value = self.request_api(RECOGNIZE_ENDPOINT, &request).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Detect face locations in an image without matching against known
    /// people. Faster than recognition; results carry no names.
    pub async fn detect_faces(&self, image: &str) -> Result<FacesResponse, ApiError> {
        let request = ImageRequest {
            image: image.to_string(),
        };
        let value = self.request_api(DETECT_ENDPOINT, &request).await?;
        Ok(serde_json::from_value(value)?)
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}
