//! Active-entry resolution against the current path.
//!
//! Reconciled matching policy:
//! - The root route `/` is active only on an exact match, so the home link
//!   does not light up for every sub-page.
//! - Any other route matches on equality or as a path prefix followed by
//!   `/`, so a parent link stays highlighted while viewing its descendants.
//!
//! When the route table allows overlapping prefixes, the most specific
//! (longest) matching route wins.

/// Length of the match between an entry route and the current path.
///
/// Returns `None` if the route does not match, otherwise the route length
/// as a specificity score for longest-prefix tie-breaking.
fn match_len(route: &str, path: &str) -> Option<usize> {
    if route == "/" {
        // Root matches exactly, never as a prefix
        return (path == "/").then_some(1);
    }

    if path == route {
        return Some(route.len());
    }

    if path.starts_with(route) && path[route.len()..].starts_with('/') {
        return Some(route.len());
    }

    None
}

/// Check whether an entry with `route` is active for `path`.
pub fn is_active(route: &str, path: &str) -> bool {
    match_len(route, path).is_some()
}

/// Resolve the active entry among `routes`, returning the index of the
/// most specific match. `None` when nothing matches.
///
/// Ties cannot occur between distinct routes (equal match length implies
/// equal route text); duplicate routes resolve to the first occurrence.
pub fn resolve_active<'a, I>(routes: I, path: &str) -> Option<usize>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut best: Option<(usize, usize)> = None; // (index, specificity)

    for (index, route) in routes.into_iter().enumerate() {
        if let Some(len) = match_len(route, path) {
            let better = match best {
                Some((_, best_len)) => len > best_len,
                None => true,
            };
            if better {
                best = Some((index, len));
            }
        }
    }

    best.map(|(index, _)| index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_matches_only_exact_path() {
        assert!(is_active("/", "/"));
        assert!(!is_active("/", "/settings"));
        assert!(!is_active("/", "/settings/profile"));
        assert!(!is_active("/", "/anything"));
    }

    #[test]
    fn test_non_root_exact_match() {
        assert!(is_active("/settings", "/settings"));
        assert!(is_active("/inbox", "/inbox"));
    }

    #[test]
    fn test_non_root_prefix_match() {
        assert!(is_active("/settings", "/settings/profile"));
        assert!(is_active("/settings", "/settings/profile/security"));
    }

    #[test]
    fn test_prefix_requires_separator() {
        // "/settings-old" is a sibling, not a descendant of "/settings"
        assert!(!is_active("/settings", "/settings-old"));
        assert!(!is_active("/doc", "/docs"));
    }

    #[test]
    fn test_no_match() {
        assert!(!is_active("/settings", "/inbox"));
        assert!(!is_active("/settings", "/"));
    }

    #[test]
    fn test_resolve_active_single_match() {
        let routes = ["/", "/settings", "/inbox"];
        assert_eq!(resolve_active(routes, "/settings/profile"), Some(1));
        assert_eq!(resolve_active(routes, "/inbox"), Some(2));
        assert_eq!(resolve_active(routes, "/"), Some(0));
    }

    #[test]
    fn test_resolve_active_none() {
        let routes = ["/", "/settings"];
        assert_eq!(resolve_active(routes, "/unknown"), None);
    }

    #[test]
    fn test_resolve_active_longest_prefix_wins() {
        // Overlapping prefixes: the most specific route is active
        let routes = ["/docs", "/docs/api", "/docs/api/reference"];
        assert_eq!(resolve_active(routes, "/docs/api/reference/types"), Some(2));
        assert_eq!(resolve_active(routes, "/docs/api"), Some(1));
        assert_eq!(resolve_active(routes, "/docs/guide"), Some(0));
    }

    #[test]
    fn test_resolve_active_longest_prefix_order_independent() {
        // Declaration order must not affect the winner
        let routes = ["/docs/api", "/docs"];
        assert_eq!(resolve_active(routes, "/docs/api/reference"), Some(0));
    }

    #[test]
    fn test_resolve_active_duplicate_routes_first_wins() {
        let routes = ["/inbox", "/inbox"];
        assert_eq!(resolve_active(routes, "/inbox"), Some(0));
    }

    #[test]
    fn test_root_not_swallowed_by_resolver() {
        // Root entry never wins for sub-paths even when nothing else matches
        let routes = ["/"];
        assert_eq!(resolve_active(routes, "/orphan"), None);
    }
}
