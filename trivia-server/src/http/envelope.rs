//! Success envelope shared by every endpoint

use axum::Json;
use serde::Serialize;

/// `{success: true, ...body}`
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(flatten)]
    pub body: T,
}

/// Body for endpoints that only report success
#[derive(Debug, Serialize)]
pub struct Empty {}

impl<T: Serialize> Envelope<T> {
    pub fn ok(body: T) -> Json<Self> {
        Json(Self {
            success: true,
            body,
        })
    }
}

/// Bare `{success: true}`
pub fn success() -> Json<Envelope<Empty>> {
    Envelope::ok(Empty {})
}
