//! The paged-scan contract consumed by the fetch layer.
//!
//! Any key-value store that can hand back bounded pages of records with an
//! opaque continuation token satisfies this contract; the fetcher never
//! assumes anything about ordering or token structure. Absence of a token
//! signals the last page.

use std::future::Future;

use serde::{Deserialize, Serialize};

/// Opaque continuation token returned by a scan.
///
/// Callers pass it back verbatim to resume where the previous page left off.
/// The contents are an implementation detail of the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScanToken(String);

impl ScanToken {
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for ScanToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One bounded-size result set from a single scan call.
#[derive(Debug, Clone)]
pub struct ScanPage<T> {
    pub items: Vec<T>,
    /// Token for the next page; `None` when the scan is exhausted.
    pub next_token: Option<ScanToken>,
    /// Number of records in this page.
    pub count: usize,
}

/// A table that can be read in fixed-size pages.
///
/// The page size is chosen by the implementation; callers cannot override
/// it. Each call is independent — implementations hold no cursor state
/// beyond what the token encodes.
pub trait PagedScan {
    /// Record type produced by a scan of this table.
    type Record;
    /// Backend failure type, propagated unchanged to fetcher callers.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Reads one page, starting after `token` (or from the beginning when
    /// `None`).
    fn scan(
        &self,
        token: Option<&ScanToken>,
    ) -> impl Future<Output = Result<ScanPage<Self::Record>, Self::Error>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_roundtrips_as_transparent_string() {
        let token = ScanToken::new("ord-0099");
        let json = serde_json::to_string(&token).expect("serialize");
        assert_eq!(json, "\"ord-0099\"");
        let decoded: ScanToken = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(decoded, token);
    }

    #[test]
    fn token_accessors_expose_inner() {
        let token = ScanToken::new("k1");
        assert_eq!(token.as_str(), "k1");
        assert_eq!(token.to_string(), "k1");
        assert_eq!(token.into_inner(), "k1");
    }
}
