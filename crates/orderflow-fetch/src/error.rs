use thiserror::Error;

/// Fetch-layer failure.
///
/// Backend errors pass through unchanged — the fetcher adds no retry, no
/// backoff, and no wrapping of its own beyond the cycling-token guard.
#[derive(Debug, Error)]
pub enum FetchError<E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    /// The underlying paged scan failed; surfaced verbatim.
    #[error(transparent)]
    Backend(#[from] E),

    /// The scan kept returning continuation tokens past the page cap,
    /// which points at a cycling token rather than a real table.
    #[error("pagination limit reached: exceeded {max_pages} pages")]
    PageLimit { max_pages: usize },
}
