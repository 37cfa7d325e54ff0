//! Dashboard module - HTML shell for the Lucky13 dashboard client
//!
//! Serves the static page the wasm client binds to. All live behavior
//! (push channel, rendering, settings, bot control, export) lives in the
//! `lucky13-dashboard` package loaded by the bootstrap script.
//!
//! # Architecture
//! - `html.rs`: Page structure with the element ids the client resolves
//! - `css.rs`: Styling with CSS custom properties
//! - `js.rs`: ES module bootstrap for the wasm package

mod css;
mod html;
mod js;

/// Generate the complete dashboard HTML page
///
/// `pkg_base` is the URL the wasm package is served from, without a
/// trailing slash. `log_level` lands on the body as `data-log-level`,
/// where the client picks up its console filter.
pub fn dashboard_html(pkg_base: &str, log_level: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="nl">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Lucky13 Trading Bot</title>
    <style>
{css}
    </style>
</head>
<body data-log-level="{log_level}">
{html}
    <script type="module">
{js}
    </script>
</body>
</html>"#,
        css = css::STYLES,
        html = html::TEMPLATE,
        js = js::BOOTSTRAP.replace("{pkg}", pkg_base)
    )
}
