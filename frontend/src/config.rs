use web_sys::window;

/// Directory of the current page, ending in `/`. Assets live next to
/// `index.html`, so the site works from any subpath.
pub fn get_base_url() -> String {
    window()
        .and_then(|w| w.document())
        .and_then(|d| d.base_uri().ok().flatten())
        .map(|uri| match uri.rfind('/') {
            Some(pos) => uri[..=pos].to_string(),
            None => format!("{}/", uri),
        })
        .unwrap_or_default()
}

pub fn get_asset_url(path: &str) -> String {
    if path.starts_with("http") {
        path.to_string()
    } else {
        format!("{}{}", get_base_url(), path.trim_start_matches('/'))
    }
}
