use simple_browser::types::errors::*;

// === TabError Tests ===

#[test]
fn tab_error_not_found_display() {
    let err = TabError::NotFound("tab-123".to_string());
    assert_eq!(err.to_string(), "Tab not found: tab-123");
}

#[test]
fn tab_error_invalid_index_display() {
    let err = TabError::InvalidIndex(99);
    assert_eq!(err.to_string(), "Invalid tab index: 99");
}

#[test]
fn tab_error_implements_error_trait() {
    let err: Box<dyn std::error::Error> = Box::new(TabError::NotFound("id".to_string()));
    assert!(err.source().is_none());
}

// === EngineError Tests ===

#[test]
fn engine_error_display_variants() {
    assert_eq!(
        EngineError::Create("no display".to_string()).to_string(),
        "Failed to create web view: no display"
    );
    assert_eq!(
        EngineError::Navigation("bad url".to_string()).to_string(),
        "Navigation request failed: bad url"
    );
    assert_eq!(
        EngineError::Script("view gone".to_string()).to_string(),
        "Script evaluation failed: view gone"
    );
}

// === ConfigError Tests ===

#[test]
fn config_error_display_variants() {
    assert_eq!(
        ConfigError::Io("denied".to_string()).to_string(),
        "Config I/O error: denied"
    );
    assert_eq!(
        ConfigError::Parse("eof".to_string()).to_string(),
        "Config parse error: eof"
    );
}

// === UiError Tests ===

#[test]
fn ui_error_wraps_engine_error_transparently() {
    let err: UiError = EngineError::Create("no display".to_string()).into();
    assert_eq!(err.to_string(), "Failed to create web view: no display");
    assert_eq!(
        UiError::Window("no monitor".to_string()).to_string(),
        "Window creation failed: no monitor"
    );
}
