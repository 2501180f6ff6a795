use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::response::Html;
use axum::routing::get;
use axum::Router;
use notify::{Event, RecursiveMode, Watcher};
use tower_livereload::LiveReloadLayer;

use crate::config::CompileOptions;

/// Which widget family the watched JSON file describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewKind {
    Cta,
    ProsCons,
    TextLink,
}

struct DevState {
    source_path: PathBuf,
    kind: PreviewKind,
    opts: CompileOptions,
}

/// Start the dev server with hot-reload for a widget JSON file.
pub async fn run_dev_server(
    path: PathBuf,
    kind: PreviewKind,
    opts: CompileOptions,
    port: u16,
) -> Result<(), Box<dyn std::error::Error>> {
    let state = Arc::new(Mutex::new(DevState {
        source_path: path.clone(),
        kind,
        opts,
    }));

    let livereload = LiveReloadLayer::new();
    let reloader = livereload.reloader();

    // File watcher
    let watch_path = path.clone();
    let mut watcher = notify::recommended_watcher(move |res: Result<Event, _>| {
        if let Ok(event) = res {
            if event.kind.is_modify() {
                reloader.reload();
            }
        }
    })?;
    watcher.watch(path.parent().unwrap_or(path.as_ref()), RecursiveMode::NonRecursive)?;

    let app = Router::new()
        .route("/", get(serve_preview))
        .route("/widget.html", get(serve_widget))
        .route("/iframe.html", get(serve_iframe))
        .layer(livereload)
        .with_state(state);

    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    eprintln!("cta dev server");
    eprintln!("  file:    {}", watch_path.display());
    eprintln!("  preview: http://localhost:{port}/");
    eprintln!("  widget:  http://localhost:{port}/widget.html");
    eprintln!("  iframe:  http://localhost:{port}/iframe.html");
    eprintln!("  watching for changes...");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    drop(watcher);
    Ok(())
}

// ── Compile helper ────────────────────────────────────────────────────

/// What the routes render: the text-link family has no iframe form, so
/// that slot is optional.
struct PreviewOutput {
    html: String,
    document: String,
    iframe: Option<String>,
    warnings: Vec<String>,
}

enum CompileResult {
    Ok(PreviewOutput),
    Err(String),
}

fn compile_source(state: &Arc<Mutex<DevState>>) -> CompileResult {
    let (source_path, kind, opts) = match state.lock() {
        Ok(s) => (s.source_path.clone(), s.kind, s.opts),
        Err(e) => return CompileResult::Err(format!("Lock error: {e}")),
    };
    let json = match std::fs::read_to_string(&source_path) {
        Ok(s) => s,
        Err(e) => return CompileResult::Err(format!("Read error: {e}")),
    };
    match kind {
        PreviewKind::Cta => match crate::compile_widget(&json, &opts) {
            Ok(out) => CompileResult::Ok(PreviewOutput {
                html: out.html,
                document: out.document,
                iframe: Some(out.iframe),
                warnings: out.warnings,
            }),
            Err(e) => CompileResult::Err(format!("{e}")),
        },
        PreviewKind::ProsCons => match crate::compile_pros_cons(&json) {
            Ok(out) => CompileResult::Ok(PreviewOutput {
                html: out.html,
                document: out.document,
                iframe: Some(out.iframe),
                warnings: out.warnings,
            }),
            Err(e) => CompileResult::Err(format!("{e}")),
        },
        PreviewKind::TextLink => match text_link_preview(&json) {
            Ok(output) => CompileResult::Ok(output),
            Err(e) => CompileResult::Err(format!("{e}")),
        },
    }
}

/// The text-link family compiles to bare HTML; for the preview document it
/// is wrapped with the language the config itself declares.
fn text_link_preview(json: &str) -> crate::error::Result<PreviewOutput> {
    let config: crate::config::TextLinkConfig = serde_json::from_str(json)?;
    let out = crate::codegen::textlink::compile(&config);
    Ok(PreviewOutput {
        document: crate::embed::wrap_document(&out.html, config.language),
        html: out.html,
        iframe: None,
        warnings: out.warnings,
    })
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

/// JSON-encode a string for embedding inside an inline `<script>`. `</`
/// becomes `<\/` so the markup cannot close the script block early.
fn inline_json(s: &str) -> String {
    serde_json::to_string(s)
        .unwrap_or_else(|_| "\"\"".to_string())
        .replace("</", "<\\/")
}

// ── Preview page ──────────────────────────────────────────────────────

fn build_warnings_html(warnings: &[String]) -> String {
    if warnings.is_empty() {
        return String::new();
    }
    let mut html = String::from(r#"<div class="warnings">"#);
    for w in warnings {
        html.push_str(&format!(r#"<div class="warn-item">{}</div>"#, html_escape(w)));
    }
    html.push_str("</div>");
    html
}

fn build_preview_page(output: &PreviewOutput) -> String {
    let warnings_html = build_warnings_html(&output.warnings);
    let html_json = inline_json(&output.html);
    let embed_panel = match &output.iframe {
        Some(iframe) => format!(
            r#"<div class="panel">
    <div class="panel-label">iframe embed ({size} bytes)</div>
    <div class="stage" id="iframe-stage">{iframe}</div>
  </div>"#,
            size = iframe.len(),
        ),
        None => String::new(),
    };

    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>cta dev</title>
<style>
  * {{ margin: 0; padding: 0; box-sizing: border-box; }}
  html, body {{ background: #f1f5f9; color: #334155;
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; font-size: 13px; }}
  .toolbar {{
    height: 40px; display: flex; align-items: center; gap: 12px; padding: 0 16px;
    background: #0f172a; color: #e2e8f0; font-size: 12px;
  }}
  .toolbar .actions {{ margin-left: auto; display: flex; gap: 8px; }}
  .toolbar button {{
    background: #1e293b; border: 1px solid #334155; color: #e2e8f0;
    padding: 4px 12px; border-radius: 4px; font-size: 11px; cursor: pointer;
  }}
  .toolbar button:hover {{ border-color: #64748b; }}
  .toolbar button.copied {{ color: #22c55e; border-color: #22c55e; }}
  .warnings {{ background: #fef3c7; border-bottom: 1px solid #f59e0b; padding: 8px 16px; }}
  .warn-item {{ font-size: 12px; color: #92400e; padding: 2px 0; }}
  .panels {{ display: flex; flex-wrap: wrap; gap: 24px; padding: 24px; align-items: flex-start; }}
  .panel {{ background: white; border-radius: 8px; box-shadow: 0 1px 3px rgba(0,0,0,0.1); }}
  .panel-label {{
    padding: 8px 16px; font-size: 10px; color: #94a3b8;
    text-transform: uppercase; letter-spacing: 1px; border-bottom: 1px solid #f1f5f9;
  }}
  .stage {{ padding: 24px; }}
</style>
</head>
<body>
<div class="toolbar">
  <span>cta dev</span>
  <div class="actions">
    <button onclick="copyHtml(this)">Copy HTML</button>
    <a href="/widget.html" target="_blank"><button>Standalone</button></a>
  </div>
</div>
{warnings_html}
<div class="panels">
  <div class="panel">
    <div class="panel-label">inline html</div>
    <div class="stage" id="inline-stage"></div>
  </div>
  {embed_panel}
</div>
<script>
  const html = {html_json};
  const stage = document.getElementById('inline-stage');
  const range = document.createRange();
  range.selectNode(stage);
  // createContextualFragment so the widget's inline scripts execute
  stage.appendChild(range.createContextualFragment(html));

  function copyHtml(btn) {{
    navigator.clipboard.writeText(html).then(() => {{
      btn.classList.add('copied');
      const orig = btn.textContent;
      btn.textContent = 'Copied!';
      setTimeout(() => {{ btn.classList.remove('copied'); btn.textContent = orig; }}, 1200);
    }});
  }}
</script>
</body>
</html>"##
    )
}

fn build_error_page(error: &str) -> String {
    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>cta dev — error</title>
<style>
  * {{ margin: 0; padding: 0; box-sizing: border-box; }}
  html, body {{ background: #f1f5f9; color: #334155;
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; }}
  .error-container {{
    max-width: 640px; margin: 80px auto; padding: 32px;
    background: white; border: 1px solid #fecaca; border-radius: 8px;
  }}
  .error-header {{ font-size: 14px; color: #dc2626; margin-bottom: 16px; font-weight: 600; }}
  .error-message {{
    font-size: 12px; font-family: ui-monospace, monospace; color: #dc2626;
    line-height: 1.7; white-space: pre-wrap; word-break: break-word;
    padding: 16px; background: #fef2f2; border-radius: 4px;
    border-left: 3px solid #dc2626;
  }}
  .waiting {{ margin-top: 20px; font-size: 11px; color: #94a3b8; }}
</style>
</head>
<body>
<div class="error-container">
  <div class="error-header">cta dev — compile error</div>
  <div class="error-message">{escaped}</div>
  <div class="waiting">waiting for fix...</div>
</div>
</body>
</html>"##,
        escaped = html_escape(error),
    )
}

// ── Route handlers ────────────────────────────────────────────────────

/// Serve the dev UI: inline rendering, iframe embed, warnings, copy button.
async fn serve_preview(State(state): State<Arc<Mutex<DevState>>>) -> Html<String> {
    match compile_source(&state) {
        CompileResult::Ok(output) => Html(build_preview_page(&output)),
        CompileResult::Err(e) => Html(build_error_page(&e)),
    }
}

/// Serve the standalone widget document (no dev chrome).
async fn serve_widget(State(state): State<Arc<Mutex<DevState>>>) -> Html<String> {
    match compile_source(&state) {
        CompileResult::Ok(output) => Html(output.document),
        CompileResult::Err(e) => Html(build_error_page(&e)),
    }
}

/// Serve a bare page containing only the iframe snippet, the way a host
/// site would embed it.
async fn serve_iframe(State(state): State<Arc<Mutex<DevState>>>) -> Html<String> {
    match compile_source(&state) {
        CompileResult::Ok(output) => match output.iframe {
            Some(iframe) => Html(format!(
                "<!DOCTYPE html>\n<html><head><meta charset=\"utf-8\"></head><body>\n{iframe}\n</body></html>"
            )),
            None => Html(build_error_page("this widget kind has no iframe form")),
        },
        CompileResult::Err(e) => Html(build_error_page(&e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_link_preview_document_uses_config_language() {
        let json = r#"{"id":"l1","linkText":"Se tilbuddet","affiliateLink":"https://example.com","language":"no"}"#;
        let output = text_link_preview(json).unwrap();
        assert!(output.document.contains(r#"<html lang="no">"#));
        assert!(output.iframe.is_none());

        let json = r#"{"id":"l1","linkText":"Se tilbuddet","affiliateLink":"https://example.com","language":"da"}"#;
        let output = text_link_preview(json).unwrap();
        assert!(output.document.contains(r#"<html lang="da">"#));
    }
}
