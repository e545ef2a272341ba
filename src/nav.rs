// Active-page highlighting for the primary navigation.

use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

/// Exact string match between a link's href attribute and the current
/// document path. No trailing-slash or query normalization; "/map/" does
/// not activate "/map".
pub fn is_active(href: Option<&str>, current_path: &str) -> bool {
    href == Some(current_path)
}

/// Marks the nav link matching the current location with the theme primary
/// color and bold weight. Non-matching links are left untouched. Runs once
/// per page load, after the first render.
pub fn highlight_active_nav() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    let Ok(current_path) = window.location().pathname() else {
        return;
    };
    let Ok(links) = document.query_selector_all("a.nav-link") else {
        return;
    };
    for i in 0..links.length() {
        let Some(node) = links.get(i) else { continue };
        let Some(link) = node.dyn_ref::<HtmlElement>() else {
            continue;
        };
        let href = link.get_attribute("href");
        if is_active(href.as_deref(), &current_path) {
            let style = link.style();
            let _ = style.set_property("color", "var(--primary-color)");
            let _ = style.set_property("font-weight", "bold");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_exact_path() {
        assert!(is_active(Some("/map"), "/map"));
        assert!(is_active(Some("/"), "/"));
    }

    #[test]
    fn rejects_other_paths() {
        assert!(!is_active(Some("/map"), "/routes"));
        assert!(!is_active(Some("/"), "/about"));
    }

    #[test]
    fn no_normalization() {
        assert!(!is_active(Some("/map"), "/map/"));
        assert!(!is_active(Some("/map/"), "/map"));
        assert!(!is_active(Some("/map"), "/map?route=A"));
    }

    #[test]
    fn missing_href_never_matches() {
        assert!(!is_active(None, "/map"));
    }
}
