//! Wire types for the backend API.
//!
//! The server speaks Portuguese on the wire; field names are kept as-is
//! via serde renames so the Rust side stays readable.

use serde::{Deserialize, Serialize};

/// Response of `GET /api/pessoas`.
#[derive(Debug, Deserialize)]
pub struct PeopleResponse {
    /// Names of every registered person.
    #[serde(rename = "pessoas")]
    pub people: Vec<String>,
}

/// Request body for `POST /api/cadastrar`.
#[derive(Debug, Serialize)]
pub(crate) struct RegisterRequest {
    #[serde(rename = "nome")]
    pub name: String,
    /// Image as a base64 data URL (`data:image/...;base64,...`).
    #[serde(rename = "imagem")]
    pub image: String,
}

/// Success response of `POST /api/cadastrar`.
#[derive(Debug, Deserialize)]
pub struct RegisterResponse {
    /// Human-readable confirmation message.
    #[serde(rename = "sucesso")]
    pub success: String,
}

/// Request body for the recognition and detection endpoints.
#[derive(Debug, Serialize)]
pub(crate) struct ImageRequest {
    #[serde(rename = "imagem")]
    pub image: String,
}

/// Response of `POST /api/reconhecer` and `POST /api/detectar_rosto`.
#[derive(Debug, Deserialize)]
pub struct FacesResponse {
    #[serde(rename = "rostos")]
    pub faces: Vec<Face>,
}

/// A single face found in a submitted image.
#[derive(Debug, Deserialize)]
pub struct Face {
    /// Matched name. Absent for detection-only results; the server uses
    /// "Desconhecido" for unmatched faces during recognition.
    #[serde(rename = "nome", default)]
    pub name: Option<String>,
    #[serde(rename = "localizacao")]
    pub location: FaceLocation,
}

/// Bounding box of a face, in pixel coordinates of the submitted image.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct FaceLocation {
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
    pub left: i32,
}
