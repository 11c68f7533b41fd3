//! Simple Browser UI layer.
//!
//! Uses `wry` web views inside a `tao` window:
//! - Windows: WebView2
//! - Linux: WebKitGTK
//! - macOS: WKWebView
//!
//! The tab strip, toolbar and status bar are two small HTML chrome views.
//! Every tab is its own child web view stacked between them; only the
//! active one is visible. Chrome input comes back over wry IPC.

pub mod chrome;
pub mod webview_app;
pub mod wry_engine;
