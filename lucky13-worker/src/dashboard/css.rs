//! Dashboard CSS styles
//!
//! Dark theme through CSS custom properties. Trade and error entries use the
//! classes the client renders (`trade-item success|failure`, `error-message`).

pub const STYLES: &str = r"
* { box-sizing: border-box; margin: 0; padding: 0; }

:root {
    --bg: #0d1117;
    --card: #161b22;
    --border: #30363d;
    --text: #c9d1d9;
    --text-dim: #8b949e;
    --green: #3fb950;
    --red: #f85149;
    --blue: #58a6ff;
}

body {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
    background: var(--bg);
    color: var(--text);
    padding: 20px;
    min-height: 100vh;
}

.container { max-width: 1000px; margin: 0 auto; }

header {
    display: flex;
    justify-content: space-between;
    align-items: center;
    margin-bottom: 24px;
    padding-bottom: 16px;
    border-bottom: 1px solid var(--border);
}

h1 { font-size: 24px; font-weight: 600; }

/* Tabs */
.tabs { display: flex; gap: 8px; }

.tab {
    padding: 8px 16px;
    border-radius: 6px;
    border: 1px solid var(--border);
    background: transparent;
    color: var(--text);
    cursor: pointer;
}

.tab:hover { background: var(--border); }

/* Buttons */
.btn {
    padding: 8px 16px;
    border-radius: 6px;
    border: none;
    font-size: 13px;
    font-weight: 500;
    cursor: pointer;
}

.btn-primary { background: var(--blue); color: #fff; }
.btn-start { background: var(--green); color: #fff; }
.btn-stop { background: var(--red); color: #fff; }

/* Grid Layout */
.grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
    gap: 16px;
}

.wide { grid-column: 1 / -1; }

.card {
    background: var(--card);
    border: 1px solid var(--border);
    border-radius: 12px;
    padding: 20px;
}

.card-title {
    font-size: 14px;
    color: var(--text-dim);
    text-transform: uppercase;
    letter-spacing: 0.5px;
    margin-bottom: 12px;
}

.card-value { font-size: 28px; font-weight: 700; }

.controls { display: flex; gap: 8px; margin-top: 12px; }

/* Trades */
.trade-item {
    display: flex;
    flex-direction: column;
    padding: 10px 12px;
    margin-top: 8px;
    border-radius: 8px;
    border-left: 4px solid var(--border);
    background: rgba(255, 255, 255, 0.03);
}

.trade-item.success { border-left-color: var(--green); }
.trade-item.failure { border-left-color: var(--red); }

/* Errors */
.error-message {
    padding: 8px 12px;
    margin-top: 6px;
    border-radius: 6px;
    background: rgba(248, 81, 73, 0.1);
    color: var(--red);
}

/* Chart */
#winningsChart svg { width: 100%; height: auto; }
#winningsChart text { fill: var(--text); font-size: 12px; }

/* Settings */
.form-row { display: flex; flex-direction: column; gap: 4px; margin-bottom: 12px; }
.form-row label { font-size: 12px; color: var(--text-dim); text-transform: uppercase; }

.form-row input {
    padding: 8px;
    border-radius: 6px;
    border: 1px solid var(--border);
    background: var(--bg);
    color: var(--text);
}

@media (max-width: 600px) {
    .grid { grid-template-columns: 1fr; }
    header { flex-direction: column; gap: 12px; }
}
";
