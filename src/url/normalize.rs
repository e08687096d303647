use url::Url;

/// Schemes that never lead to a crawlable page
const SKIPPED_SCHEMES: &[&str] = &["javascript:", "mailto:", "tel:", "data:"];

/// Resolves a link href to an absolute, fragment-free URL
///
/// Returns None if the link should be excluded:
/// - empty or fragment-only hrefs (same page anchors)
/// - javascript:, mailto:, tel: and data: links
/// - hrefs that cannot be resolved against `base_url`
/// - anything that is not HTTP(S) after resolution
///
/// # Examples
///
/// ```
/// use shop_harvest::url::resolve_link;
/// use url::Url;
///
/// let base = Url::parse("https://scrapeme.live/shop/").unwrap();
/// assert_eq!(
///     resolve_link("page/2/#top", &base).as_deref(),
///     Some("https://scrapeme.live/shop/page/2/")
/// );
/// assert_eq!(resolve_link("mailto:a@b.c", &base), None);
/// ```
pub fn resolve_link(href: &str, base_url: &Url) -> Option<String> {
    let href = href.trim();

    if href.is_empty() || href.starts_with('#') {
        return None;
    }

    let lowered = href.to_ascii_lowercase();
    if SKIPPED_SCHEMES
        .iter()
        .any(|scheme| lowered.starts_with(scheme))
    {
        return None;
    }

    let mut absolute_url = base_url.join(href).ok()?;
    if absolute_url.scheme() != "http" && absolute_url.scheme() != "https" {
        return None;
    }

    absolute_url.set_fragment(None);
    Some(absolute_url.into())
}
