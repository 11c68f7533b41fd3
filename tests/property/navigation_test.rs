//! Property-based tests for address normalization and tab labels.

use proptest::prelude::*;
use simple_browser::services::navigation::{
    has_recognized_scheme, normalize_url, tab_label, TAB_LABEL_MAX_CHARS,
};

fn arb_scheme() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just("http://"),
        Just("https://"),
        Just("file://"),
        Just("ftp://"),
        Just("ws://"),
        Just("wss://"),
        Just("chrome://"),
        Just("git+ssh://"),
        Just("about:"),
        Just("data:"),
        Just("mailto:"),
        Just("javascript:"),
        Just("view-source:"),
        Just("blob:"),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn schemeless_input_gets_http_prefix(target in "[a-zA-Z0-9./:?=_-]{0,40}") {
        prop_assume!(!has_recognized_scheme(&target));
        prop_assert_eq!(normalize_url(&target), format!("http://{}", target));
    }

    #[test]
    fn input_with_scheme_passes_through(scheme in arb_scheme(), rest in "\\PC{0,40}") {
        let target = format!("{}{}", scheme, rest);
        prop_assert_eq!(normalize_url(&target), target);
    }

    #[test]
    fn any_well_formed_scheme_passes_through(
        name in "[a-zA-Z][a-zA-Z0-9+.-]{0,10}",
        rest in "[a-z0-9./]{0,30}",
    ) {
        let target = format!("{}://{}", name, rest);
        prop_assert_eq!(normalize_url(&target), target);
    }

    #[test]
    fn host_and_port_is_not_a_scheme(host in "[a-z][a-z0-9-]{0,15}", port in 1u16..) {
        let target = format!("{}:{}", host, port);
        prop_assume!(!has_recognized_scheme(&target));
        prop_assert_eq!(normalize_url(&target), format!("http://{}", target));
    }

    #[test]
    fn normalized_address_always_has_scheme(target in "\\PC{0,40}") {
        prop_assert!(has_recognized_scheme(&normalize_url(&target)));
    }

    #[test]
    fn short_titles_are_verbatim(title in "\\PC{0,15}") {
        prop_assume!(title.chars().count() <= TAB_LABEL_MAX_CHARS);
        prop_assert_eq!(tab_label(&title), title);
    }

    #[test]
    fn long_titles_are_cut_to_fifteen_plus_ellipsis(title in "\\PC{16,80}") {
        prop_assume!(title.chars().count() > TAB_LABEL_MAX_CHARS);
        let label = tab_label(&title);
        let prefix: String = title.chars().take(TAB_LABEL_MAX_CHARS).collect();
        prop_assert_eq!(label, format!("{}...", prefix));
    }
}
