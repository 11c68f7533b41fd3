//! Browser window built from `tao` + `wry`.
//!
//! Architecture:
//! - Two chrome web views, the tab strip and toolbar on top and the status
//!   bar at the bottom, load inline HTML and post `ChromeCommand`s over IPC.
//! - Every tab owns a child web view filling the space between them. Only
//!   the active tab's view is visible.
//! - All callbacks are forwarded to the event loop as `UserEvent`s and applied
//!   to the `BrowserWindow` model on the UI thread. After each change both
//!   chrome views are redrawn from `ChromeState`.

use std::rc::Rc;
use std::time::Instant;

use log::{debug, info, warn};
use tao::dpi::{LogicalPosition, LogicalSize};
use tao::event::{Event, StartCause, WindowEvent};
use tao::event_loop::{ControlFlow, EventLoopBuilder, EventLoopProxy};
use tao::window::{Window, WindowBuilder};
use wry::{Rect, WebView, WebViewBuilder};

use super::chrome::{self, CHROME_HEIGHT, STATUS_HEIGHT};
use super::wry_engine::WryFactory;
use crate::app::BrowserWindow;
use crate::types::chrome::ChromeCommand;
use crate::types::config::BrowserConfig;
use crate::types::engine::EngineEvent;
use crate::types::errors::UiError;

#[derive(Debug)]
pub enum UserEvent {
    /// Input from the tab strip, toolbar or status bar.
    Chrome(ChromeCommand),
    /// Lifecycle callback from the web view of tab `tab_id`.
    Engine { tab_id: String, event: EngineEvent },
}

/// Rectangle in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl From<Region> for Rect {
    fn from(r: Region) -> Self {
        Rect {
            position: wry::dpi::LogicalPosition::new(r.x, r.y).into(),
            size: wry::dpi::LogicalSize::new(r.width, r.height).into(),
        }
    }
}

/// Splits a window of `width` x `height` into chrome, page and status regions.
pub fn split_regions(width: f64, height: f64) -> (Region, Region, Region) {
    let page_height = (height - CHROME_HEIGHT - STATUS_HEIGHT).max(0.0);
    let chrome = Region {
        x: 0.0,
        y: 0.0,
        width,
        height: CHROME_HEIGHT.min(height),
    };
    let page = Region {
        x: 0.0,
        y: CHROME_HEIGHT,
        width,
        height: page_height,
    };
    let status = Region {
        x: 0.0,
        y: (height - STATUS_HEIGHT).max(CHROME_HEIGHT),
        width,
        height: STATUS_HEIGHT,
    };
    (chrome, page, status)
}

fn logical_size(window: &Window) -> LogicalSize<f64> {
    window.inner_size().to_logical(window.scale_factor())
}

/// Region a tab's web view occupies in `window` right now.
pub fn page_region(window: &Window) -> Region {
    let size = logical_size(window);
    split_regions(size.width, size.height).1
}

// ─── View host ───

/// Native parent all web views are attached to.
///
/// On Linux the views live in a `gtk::Fixed` packed into the window's
/// default vbox, which works under both X11 and Wayland and still honors
/// per-view bounds. Elsewhere they are child views of the window.
pub struct ViewHost {
    window: Rc<Window>,
    #[cfg(target_os = "linux")]
    fixed: gtk::Fixed,
}

impl ViewHost {
    #[cfg(target_os = "linux")]
    pub fn new(window: Rc<Window>) -> Result<Self, UiError> {
        use gtk::prelude::*;
        use tao::platform::unix::WindowExtUnix;

        let vbox = window
            .default_vbox()
            .ok_or_else(|| UiError::Window("window has no GTK vbox".into()))?;
        let fixed = gtk::Fixed::new();
        vbox.pack_start(&fixed, true, true, 0);
        fixed.show_all();
        Ok(Self { window, fixed })
    }

    #[cfg(not(target_os = "linux"))]
    pub fn new(window: Rc<Window>) -> Result<Self, UiError> {
        Ok(Self { window })
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    /// Builds `builder` inside this host.
    pub fn attach<'a>(&'a self, builder: WebViewBuilder<'a>) -> wry::Result<WebView> {
        #[cfg(target_os = "linux")]
        {
            use wry::WebViewBuilderExtUnix;
            builder.build_gtk(&self.fixed)
        }
        #[cfg(not(target_os = "linux"))]
        {
            builder.build_as_child(self.window.as_ref())
        }
    }
}

/// The native pieces around the model: view host plus the two chrome views.
struct Shell {
    host: Rc<ViewHost>,
    chrome: WebView,
    status: WebView,
}

impl Shell {
    fn render(&self, model: &BrowserWindow<WryFactory>) {
        let script = chrome::render_script(&model.chrome_state());
        for view in [&self.chrome, &self.status] {
            if let Err(e) = view.evaluate_script(&script) {
                warn!("chrome render failed: {}", e);
            }
        }
        self.host.window().set_title(model.window_title());

        let active = model.active_index();
        for (i, tab) in model.tabs().iter().enumerate() {
            tab.engine().set_visible(Some(i) == active);
        }
    }

    fn layout(&self, model: &BrowserWindow<WryFactory>) {
        let size = logical_size(self.host.window());
        let (chrome, page, status) = split_regions(size.width, size.height);
        for (view, region) in [(&self.chrome, chrome), (&self.status, status)] {
            if let Err(e) = view.set_bounds(region.into()) {
                warn!("chrome set_bounds failed: {}", e);
            }
        }
        for tab in model.tabs() {
            tab.engine().set_bounds(page);
        }
    }
}

fn build_chrome_view(
    host: &ViewHost,
    html: String,
    region: Region,
    proxy: EventLoopProxy<UserEvent>,
) -> Result<WebView, UiError> {
    let builder = WebViewBuilder::new()
        .with_html(html)
        .with_bounds(region.into())
        .with_ipc_handler(move |msg: wry::http::Request<String>| {
            let body = msg.body().as_str();
            match ChromeCommand::parse(body) {
                Some(cmd) => {
                    let _ = proxy.send_event(UserEvent::Chrome(cmd));
                }
                None => debug!(
                    "ignoring chrome message {}",
                    body.chars().take(200).collect::<String>()
                ),
            }
        })
        .with_devtools(cfg!(debug_assertions));
    host.attach(builder).map_err(|e| UiError::WebView(e.to_string()))
}

// ─── Main entry point ───

/// Opens the browser window and runs the event loop until it is closed.
pub fn run(config: BrowserConfig) -> Result<(), UiError> {
    let event_loop = EventLoopBuilder::<UserEvent>::with_user_event().build();
    let proxy = event_loop.create_proxy();

    let window = WindowBuilder::new()
        .with_title(config.window_title.as_str())
        .with_inner_size(LogicalSize::new(
            config.window_width as f64,
            config.window_height as f64,
        ))
        .with_position(LogicalPosition::new(
            config.window_x as f64,
            config.window_y as f64,
        ))
        .build(&event_loop)
        .map_err(|e| UiError::Window(e.to_string()))?;
    let host = Rc::new(ViewHost::new(Rc::new(window))?);

    let size = logical_size(host.window());
    let (chrome_region, _, status_region) = split_regions(size.width, size.height);
    let shell = Shell {
        chrome: build_chrome_view(&host, chrome::chrome_html(), chrome_region, proxy.clone())?,
        status: build_chrome_view(&host, chrome::status_html(), status_region, proxy.clone())?,
        host: host.clone(),
    };

    let factory = WryFactory::new(host, proxy);
    let mut model = BrowserWindow::open(config, factory)?;
    shell.render(&model);
    info!("browser window open");

    event_loop.run(move |event, _, control_flow| {
        match event {
            Event::NewEvents(StartCause::ResumeTimeReached { .. }) => {
                if model.tick(Instant::now()) {
                    shell.render(&model);
                }
            }

            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                info!("window closed");
                *control_flow = ControlFlow::Exit;
                return;
            }

            Event::WindowEvent {
                event: WindowEvent::Resized(_),
                ..
            } => shell.layout(&model),

            Event::UserEvent(UserEvent::Chrome(cmd)) => {
                debug!("chrome {:?}", cmd);
                model.apply_command(cmd);
                shell.render(&model);
            }

            Event::UserEvent(UserEvent::Engine { tab_id, event }) => {
                model.handle_engine_event(&tab_id, event);
                shell.render(&model);
            }

            _ => {}
        }

        *control_flow = match model.next_deadline() {
            Some(deadline) => ControlFlow::WaitUntil(deadline),
            None => ControlFlow::Wait,
        };
    })
}
