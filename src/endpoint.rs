//! Path builders for the objects resource.
//!
//! Every function returns a relative path; the client resolves it against the
//! configured base URL.

/// Collection root.
pub fn objects() -> String {
    "/objects".to_owned()
}

/// Single object by identifier.
pub fn object_by_id(id: &str) -> String {
    format!("/objects/{id}")
}

/// Batch create/update endpoint.
pub fn objects_batch() -> String {
    "/objects/batch".to_owned()
}

/// Collection root with a pre-rendered filter query string.
///
/// Pairs are appended in the order given; repeated keys stay repeated.
pub fn objects_filter<'a, I>(params: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let query: Vec<String> = params
        .into_iter()
        .map(|(key, value)| {
            format!("{}={}", urlencoding::encode(key), urlencoding::encode(value))
        })
        .collect();
    if query.is_empty() {
        objects()
    } else {
        format!("/objects?{}", query.join("&"))
    }
}

/// Service health probe.
pub fn health() -> String {
    "/health".to_owned()
}
