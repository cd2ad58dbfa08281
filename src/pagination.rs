// src/pagination.rs

/// Returns the 1-based `page` window of `items`: `items[(p-1)*size .. p*size]`.
/// Out-of-range pages yield an empty slice, not an error; whether an empty
/// page is a not-found condition is the caller's decision.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let start = page.saturating_sub(1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = (start + page_size).min(items.len());
    &items[start..end]
}

/// Parses the `page` query parameter. Missing, non-numeric, or non-positive
/// input defaults to page 1.
pub fn parse_page(raw: Option<&str>) -> usize {
    raw.and_then(|s| s.parse::<usize>().ok())
        .filter(|&p| p >= 1)
        .unwrap_or(1)
}
