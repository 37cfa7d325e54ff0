//! Dashboard bootstrap script
//!
//! Loads the wasm client as an ES module; its start hook attaches every
//! listener and opens the push channel. `{pkg}` is the package base URL.

pub const BOOTSTRAP: &str = r#"
import init from "{pkg}/lucky13_dashboard.js";

init().catch((e) => console.error("Dashboard failed to start", e));
"#;
