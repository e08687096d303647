/// Checks if a host belongs to a site domain
///
/// A host matches when it is the site domain itself or any subdomain of it:
/// `scrapeme.live` matches `scrapeme.live`, `www.scrapeme.live` and
/// `cdn.eu.scrapeme.live`, but not `notscrapeme.live` or
/// `scrapeme.live.example.com`.
///
/// Both arguments are expected to be lowercase already.
///
/// # Examples
///
/// ```
/// use shop_harvest::url::host_matches_site;
///
/// assert!(host_matches_site("scrapeme.live", "scrapeme.live"));
/// assert!(host_matches_site("scrapeme.live", "www.scrapeme.live"));
/// assert!(!host_matches_site("scrapeme.live", "fakescrapeme.live"));
/// ```
pub fn host_matches_site(site_domain: &str, host: &str) -> bool {
    if site_domain.is_empty() || host.is_empty() {
        return false;
    }

    host == site_domain
        || host
            .strip_suffix(site_domain)
            .is_some_and(|prefix| prefix.ends_with('.'))
}
