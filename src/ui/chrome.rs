//! HTML for the chrome views and the script that redraws them.

use crate::types::chrome::ChromeState;

/// Height of the tab strip plus toolbar, in logical pixels.
pub const CHROME_HEIGHT: f64 = 80.0;

/// Height of the status bar, in logical pixels.
pub const STATUS_HEIGHT: f64 = 24.0;

const SHARED_CSS: &str = "*{margin:0;padding:0;box-sizing:border-box}\
html,body{height:100%;overflow:hidden;background:#f3f3f3;color:#222;\
font:13px -apple-system,BlinkMacSystemFont,\"Segoe UI\",Helvetica,Arial,sans-serif;user-select:none}";

const SHARED_JS: &str = r#"
function send(cmd, extra) {
  var msg = Object.assign({cmd: cmd}, extra || {});
  window.ipc.postMessage(JSON.stringify(msg));
}
"#;

/// Tab strip on top, navigation toolbar below it.
pub const CHROME_BODY: &str = r#"
<div id="tabs"></div>
<div id="toolbar">
  <button title="Go back to the previous page" onclick="send('back')">&#8592;</button>
  <button title="Go forward to the next page" onclick="send('forward')">&#8594;</button>
  <button title="Reload the current page" onclick="send('reload')">&#8635;</button>
  <button title="Go to the home page" onclick="send('home')">&#127968;</button>
  <input id="url" type="text" spellcheck="false" />
  <button title="Open a new tab" onclick="send('new_tab')">+</button>
</div>
"#;

const CHROME_CSS: &str = "#tabs{display:flex;height:36px;padding:4px 4px 0;gap:2px;background:#dedede;overflow:hidden}\
.tab{display:flex;align-items:center;gap:6px;max-width:200px;padding:0 8px;border-radius:6px 6px 0 0;background:#cfcfcf;cursor:default;white-space:nowrap}\
.tab.active{background:#f3f3f3}\
.tab .close{border:none;background:none;width:18px;height:18px;border-radius:9px;cursor:pointer}\
.tab .close:hover{background:#bbb}\
#toolbar{display:flex;align-items:center;gap:4px;height:44px;padding:0 6px;border-bottom:1px solid #ccc}\
#toolbar button{width:30px;height:30px;border:none;background:none;border-radius:4px;font-size:16px;cursor:pointer}\
#toolbar button:hover{background:#ddd}\
#url{flex:1;height:28px;padding:0 10px;border:1px solid #bbb;border-radius:14px;font:inherit;outline:none}\
#url:focus{border-color:#4a90d9}";

const CHROME_JS: &str = r#"
window.__sb_render = function(s) {
  var strip = document.getElementById('tabs');
  strip.innerHTML = '';
  s.tabs.forEach(function(t, i) {
    var el = document.createElement('div');
    el.className = 'tab' + (t.active ? ' active' : '');
    el.title = t.title || t.label;
    var label = document.createElement('span');
    label.textContent = t.label;
    el.appendChild(label);
    var close = document.createElement('button');
    close.className = 'close';
    close.textContent = '×';
    close.title = 'Close tab';
    close.onclick = function(e) { e.stopPropagation(); send('close_tab', {index: i}); };
    el.appendChild(close);
    el.onclick = function() { send('switch_tab', {index: i}); };
    strip.appendChild(el);
  });
  var url = document.getElementById('url');
  if (document.activeElement !== url) url.value = s.url_bar;
};
document.getElementById('url').addEventListener('keydown', function(e) {
  if (e.key === 'Enter') { send('navigate', {url: this.value}); this.blur(); }
});
document.getElementById('url').addEventListener('focus', function() { this.select(); });
send('ready');
"#;

/// Status line with a permanent progress bar on the right.
pub const STATUS_BODY: &str = r#"
<div id="statusbar"><span id="status"></span><div id="progress"><div id="bar"></div></div></div>
"#;

const STATUS_CSS: &str = "#statusbar{display:flex;align-items:center;height:100%;padding:0 8px;border-top:1px solid #ccc;font-size:12px}\
#status{flex:1;overflow:hidden;white-space:nowrap;text-overflow:ellipsis}\
#progress{display:none;width:120px;height:12px;border:1px solid #aaa;border-radius:2px;background:#fff}\
#bar{height:100%;width:0;background:#4a90d9}";

const STATUS_JS: &str = r#"
window.__sb_render = function(s) {
  document.getElementById('status').textContent = s.status || '';
  document.getElementById('progress').style.display = s.progress_visible ? 'block' : 'none';
  document.getElementById('bar').style.width = s.progress + '%';
};
send('ready');
"#;

fn page(css: &str, body: &str, js: &str) -> String {
    let mut html = String::with_capacity(SHARED_CSS.len() + css.len() + body.len() + js.len() + 256);
    html.push_str("<!DOCTYPE html><html><head><meta charset=\"UTF-8\"><style>");
    html.push_str(SHARED_CSS);
    html.push_str(css);
    html.push_str("</style></head><body>");
    html.push_str(body);
    html.push_str("<script>");
    html.push_str(SHARED_JS);
    html.push_str(js);
    html.push_str("</script></body></html>");
    html
}

pub fn chrome_html() -> String {
    page(CHROME_CSS, CHROME_BODY, CHROME_JS)
}

pub fn status_html() -> String {
    page(STATUS_CSS, STATUS_BODY, STATUS_JS)
}

/// Script that pushes `state` into a chrome view.
pub fn render_script(state: &ChromeState) -> String {
    let json = serde_json::to_string(state).unwrap_or_else(|_| "null".to_string());
    format!("if(window.__sb_render&&{0})window.__sb_render({0})", json)
}

/// Injected into every page: reports `document.readyState` as load progress,
/// and `loadFailed` when the finished document is an engine error page.
pub const PROGRESS_JS: &str = r#"
(function() {
  var steps = {loading: 30, interactive: 70, complete: 100};
  var errorPages = ['chrome-error:', 'about:neterror', 'about:certerror'];
  function post(msg) {
    try { window.ipc.postMessage(JSON.stringify(msg)); } catch (e) {}
  }
  function isErrorPage() {
    var href = String(location.href).toLowerCase();
    return errorPages.some(function(p) { return href.indexOf(p) === 0; });
  }
  function report() {
    post({progress: steps[document.readyState] || 10});
    if (document.readyState === 'complete' && isErrorPage()) {
      post({loadFailed: true, url: String(location.href)});
    }
  }
  report();
  document.addEventListener('readystatechange', report);
})();
"#;
