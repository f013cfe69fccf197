//! Wire types shared by every resource.
//!
//! # Design
//! These mirror the mock-server's schema but are defined independently;
//! integration tests catch any drift between the two crates.

use serde::{Deserialize, Serialize};

/// Envelope wrapping the payload of every API response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub data: T,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            data,
            message: None,
        }
    }

    pub fn into_inner(self) -> T {
        self.data
    }
}
