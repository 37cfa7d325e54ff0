//! Dashboard HTML template
//!
//! Page structure with every region the client resolves by id:
//! - Header with tabs, bot status indicator and start/stop buttons
//! - Home pane: balance, active trades, winnings chart, error messages
//! - Settings pane: the three percentage inputs

pub const TEMPLATE: &str = r#"
    <div class="container">
        <header>
            <h1>🍀 Lucky13 Trading Bot</h1>
            <nav class="tabs">
                <button class="tab" id="home-tab">Home</button>
                <button class="tab" id="settings-tab">Instellingen</button>
            </nav>
        </header>

        <div id="home-content">
            <div class="grid">
                <div class="card">
                    <div class="card-title">💰 Saldo</div>
                    <div class="card-value" id="balance">Saldo: -- USDT</div>
                </div>

                <div class="card">
                    <div class="card-title">🤖 Bot</div>
                    <div id="bot-status">--</div>
                    <div class="controls">
                        <button class="btn btn-start" id="start-bot">Start bot</button>
                        <button class="btn btn-stop" id="stop-bot">Stop bot</button>
                    </div>
                </div>

                <div class="card wide">
                    <div class="card-title">📈 Actieve trades</div>
                    <div id="trades-list"></div>
                </div>

                <div class="card wide">
                    <div class="card-title">📊 Winsten en stortingen</div>
                    <div id="winningsChart"></div>
                    <div class="controls">
                        <button class="btn btn-primary" id="exportChart">Exporteer CSV</button>
                    </div>
                </div>

                <div class="card wide">
                    <div class="card-title">⚠️ Foutmeldingen</div>
                    <div id="errorMessages"></div>
                </div>
            </div>
        </div>

        <div id="settings-content" style="display: none;">
            <div class="card">
                <div class="card-title">⚙️ Instellingen</div>
                <form id="settings-form">
                    <div class="form-row">
                        <label for="trade-percentage">Trade percentage</label>
                        <input type="number" step="any" id="trade-percentage">
                    </div>
                    <div class="form-row">
                        <label for="stop-loss-percentage">Stop-loss percentage</label>
                        <input type="number" step="any" id="stop-loss-percentage">
                    </div>
                    <div class="form-row">
                        <label for="take-profit-percentage">Take-profit percentage</label>
                        <input type="number" step="any" id="take-profit-percentage">
                    </div>
                    <button class="btn btn-primary" type="submit">Opslaan</button>
                </form>
            </div>
        </div>
    </div>
"#;
