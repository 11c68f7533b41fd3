//! Address normalization and tab-label formatting.
//!
//! Both are purely syntactic. Nothing here resolves hosts or checks that an
//! address is reachable; malformed input is handed to the engine as-is.

/// Scheme prepended to input that does not carry one.
pub const DEFAULT_SCHEME: &str = "http://";

/// Maximum number of characters shown in a tab label before it is cut.
pub const TAB_LABEL_MAX_CHARS: usize = 15;

/// Appended to a cut tab label.
pub const ELLIPSIS: &str = "...";

/// Label used for a tab until its page reports a title.
pub const NEW_TAB_LABEL: &str = "New Tab";

/// Schemes whose addresses carry no `//` authority part. Matched case-insensitively.
const OPAQUE_SCHEMES: &[&str] = &[
    "about:", "data:", "mailto:", "javascript:", "view-source:", "blob:",
];

/// Scheme syntax: a letter followed by letters, digits, `+`, `-` or `.`.
fn is_scheme_name(name: &str) -> bool {
    let mut chars = name.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// Returns true if `target` already names a scheme.
///
/// Any well-formed scheme followed by `://` counts, as does one of the
/// opaque schemes. `localhost:8080` is a host and port, not a scheme.
pub fn has_recognized_scheme(target: &str) -> bool {
    if let Some((name, _)) = target.split_once("://") {
        if is_scheme_name(name) {
            return true;
        }
    }
    OPAQUE_SCHEMES.iter().any(|scheme| {
        target
            .get(..scheme.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(scheme))
    })
}

/// Turns user input into an address for the engine.
///
/// Input with a recognized scheme is returned unchanged; anything else gets
/// `http://` in front. No trimming, no search fallback.
pub fn normalize_url(target: &str) -> String {
    if has_recognized_scheme(target) {
        target.to_string()
    } else {
        format!("{}{}", DEFAULT_SCHEME, target)
    }
}

/// Shortens a page title for the tab strip.
///
/// Counts characters, not bytes, so multi-byte titles never split mid-char.
pub fn tab_label(title: &str) -> String {
    match title.char_indices().nth(TAB_LABEL_MAX_CHARS) {
        Some((cut, _)) => format!("{}{}", &title[..cut], ELLIPSIS),
        None => title.to_string(),
    }
}

/// Window title for a page: `"<page title> - <app name>"`.
pub fn window_title(page_title: &str, app_name: &str) -> String {
    format!("{} - {}", page_title, app_name)
}
