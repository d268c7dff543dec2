//! Wire types for the course backend.
//!
//! Every list endpoint answers with [`ApiEnvelope`]:
//!
//! ```json
//! { "data": [ ... ], "total": 42 }
//! ```
//!
//! `total` is optional. Anything else (a bare array, `results`, `items`)
//! is a decode error rather than something to guess at.

use serde::{Deserialize, Serialize};

/// The list response envelope.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub data: Vec<T>,
    #[serde(default)]
    pub total: Option<u64>,
}

/// Body of `POST /auth/refresh`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RefreshRequest<'a> {
    pub refresh_token: &'a str,
}

/// Response of `POST /auth/refresh`.
///
/// Backends that rotate refresh tokens send a new one; otherwise the
/// previous token stays valid.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct RefreshResponse {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Module;

    #[test]
    fn test_envelope_decodes() {
        let env: ApiEnvelope<Module> = serde_json::from_str(
            r#"{"data": [{"id": 1, "title": "Basics", "description": null, "order_index": 0}], "total": 1}"#,
        )
        .unwrap();
        assert_eq!(env.data.len(), 1);
        assert_eq!(env.total, Some(1));
    }

    #[test]
    fn test_envelope_rejects_other_shapes() {
        assert!(serde_json::from_str::<ApiEnvelope<Module>>(r#"[{"id": 1, "title": "a"}]"#).is_err());
        assert!(
            serde_json::from_str::<ApiEnvelope<Module>>(r#"{"results": [{"id": 1, "title": "a"}]}"#)
                .is_err()
        );
    }
}
