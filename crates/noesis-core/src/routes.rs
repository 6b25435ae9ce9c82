//! Navigation URL helpers for view code.

/// Build an app-internal navigation URL: `/{path}` plus `?key=value` pairs
/// joined with `&`, in given order. Values are URL-encoded.
#[must_use]
pub fn route_url(path: &str, params: &[(&str, &str)]) -> String {
    let mut url = format!("/{path}");
    for (index, (key, value)) in params.iter().enumerate() {
        let separator = if index == 0 { '?' } else { '&' };
        url.push(separator);
        url.push_str(key);
        url.push('=');
        url.push_str(&urlencoding::encode(value));
    }
    url
}
