//! [`Engine`] backed by a child `wry` web view.

use std::rc::Rc;

use log::warn;
use serde::Deserialize;
use tao::event_loop::EventLoopProxy;
use wry::{PageLoadEvent, Rect, WebView, WebViewBuilder};

use super::chrome::PROGRESS_JS;
use super::webview_app::{page_region, Region, UserEvent, ViewHost};
use crate::engine::{Engine, EngineFactory};
use crate::types::engine::EngineEvent;
use crate::types::errors::EngineError;

/// One tab's web view.
pub struct WryEngine {
    webview: WebView,
    requested: String,
}

impl WryEngine {
    pub fn set_visible(&self, visible: bool) {
        if let Err(e) = self.webview.set_visible(visible) {
            warn!("set_visible failed: {}", e);
        }
    }

    pub fn set_bounds(&self, region: Region) {
        if let Err(e) = self.webview.set_bounds(region.into()) {
            warn!("set_bounds failed: {}", e);
        }
    }

    fn eval(&self, js: &str) -> Result<(), EngineError> {
        self.webview
            .evaluate_script(js)
            .map_err(|e| EngineError::Script(e.to_string()))
    }
}

impl Engine for WryEngine {
    fn load_url(&mut self, url: &str) -> Result<(), EngineError> {
        self.requested = url.to_string();
        self.webview
            .load_url(url)
            .map_err(|e| EngineError::Navigation(e.to_string()))
    }

    fn back(&mut self) -> Result<(), EngineError> {
        self.eval("history.back()")
    }

    fn forward(&mut self) -> Result<(), EngineError> {
        self.eval("history.forward()")
    }

    fn reload(&mut self) -> Result<(), EngineError> {
        self.eval("location.reload()")
    }

    /// Falls back to the last requested address while the view has not
    /// committed a navigation yet.
    fn url(&self) -> String {
        match self.webview.url() {
            Ok(url) if !url.is_empty() => url,
            _ => self.requested.clone(),
        }
    }
}

// ─── Load outcome ───

/// Address prefixes of the error pages the platform views show in place of
/// a page that failed to load.
const ERROR_PAGE_PREFIXES: &[&str] = &["chrome-error:", "about:neterror", "about:certerror"];

/// Turns a finished page load into an engine event.
///
/// The platform views report no failure flag on finish. A load counts as
/// failed when it never committed an address or when it landed on an engine
/// error page. The injected script reports the same condition from inside
/// the page (see [`parse_page_message`]) for views whose finish callback
/// carries the requested address rather than the error page's.
pub fn finished_event(url: String) -> EngineEvent {
    let lower = url.to_ascii_lowercase();
    let failed = url.is_empty() || ERROR_PAGE_PREFIXES.iter().any(|p| lower.starts_with(p));
    EngineEvent::LoadFinished {
        success: !failed,
        url,
    }
}

/// Messages posted by [`PROGRESS_JS`] from inside a tab's page.
#[derive(Deserialize)]
#[serde(untagged)]
enum PageMessage {
    Progress {
        progress: u8,
    },
    LoadFailed {
        #[serde(rename = "loadFailed")]
        load_failed: bool,
        url: String,
    },
}

/// Parses an IPC body from a tab's page. Unknown messages yield `None`.
pub fn parse_page_message(body: &str) -> Option<EngineEvent> {
    match serde_json::from_str(body).ok()? {
        PageMessage::Progress { progress } => Some(EngineEvent::LoadProgress(progress)),
        PageMessage::LoadFailed {
            load_failed: true,
            url,
        } => Some(EngineEvent::LoadFinished {
            success: false,
            url,
        }),
        PageMessage::LoadFailed { .. } => None,
    }
}

// ─── Factory ───

/// Builds a web view per tab and routes its callbacks to the event loop.
pub struct WryFactory {
    host: Rc<ViewHost>,
    proxy: EventLoopProxy<UserEvent>,
}

impl WryFactory {
    pub fn new(host: Rc<ViewHost>, proxy: EventLoopProxy<UserEvent>) -> Self {
        Self { host, proxy }
    }
}

impl EngineFactory for WryFactory {
    type Engine = WryEngine;

    fn create(&mut self, tab_id: &str, url: &str) -> Result<WryEngine, EngineError> {
        let send = {
            let proxy = self.proxy.clone();
            let tab_id = tab_id.to_string();
            move |event: EngineEvent| {
                let _ = proxy.send_event(UserEvent::Engine {
                    tab_id: tab_id.clone(),
                    event,
                });
            }
        };
        let on_load = send.clone();
        let on_title = send.clone();
        let on_ipc = send;

        let bounds: Rect = page_region(self.host.window()).into();
        let builder = WebViewBuilder::new()
            .with_url(url)
            .with_bounds(bounds)
            .with_initialization_script(PROGRESS_JS)
            .with_on_page_load_handler(move |event, url| {
                on_load(match event {
                    PageLoadEvent::Started => EngineEvent::LoadStarted,
                    PageLoadEvent::Finished => finished_event(url),
                })
            })
            .with_document_title_changed_handler(move |title| {
                on_title(EngineEvent::TitleChanged(title))
            })
            .with_ipc_handler(move |msg: wry::http::Request<String>| {
                if let Some(event) = parse_page_message(msg.body()) {
                    on_ipc(event);
                }
            })
            .with_devtools(cfg!(debug_assertions));
        let webview = self
            .host
            .attach(builder)
            .map_err(|e| EngineError::Create(e.to_string()))?;

        Ok(WryEngine {
            webview,
            requested: url.to_string(),
        })
    }
}
