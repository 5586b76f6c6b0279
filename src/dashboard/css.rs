//! Dashboard stylesheet

pub const STYLES: &str = r#"
:root {
    --bg: #0e1117;
    --panel: #161b22;
    --border: #2d333b;
    --text: #e6edf3;
    --text-dim: #8b949e;
    --green: #3fb950;
    --red: #f85149;
    --gray: #8b949e;
    --info-bg: #0f2a44;
    --error-bg: #3d1418;
}
* { box-sizing: border-box; }
body {
    margin: 0;
    background: var(--bg);
    color: var(--text);
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", sans-serif;
}
.container { max-width: 1200px; margin: 0 auto; padding: 24px 20px 40px; }
header { display: flex; justify-content: space-between; align-items: flex-start; gap: 16px; }
h1 { margin: 0 0 4px; font-size: 2rem; }
h2 { font-size: 1.25rem; margin: 0 0 12px; }
.caption { color: var(--text-dim); font-size: 0.85rem; }
.btn {
    background: var(--panel);
    color: var(--text);
    border: 1px solid var(--border);
    border-radius: 8px;
    padding: 8px 14px;
    font-size: 0.9rem;
    cursor: pointer;
}
.btn:hover { border-color: var(--text-dim); }
hr { border: none; border-top: 1px solid var(--border); margin: 28px 0; }
.alert { border-radius: 8px; padding: 14px 16px; margin-top: 16px; }
.alert-info { background: var(--info-bg); }
.alert-error { background: var(--error-bg); }
.metrics { display: grid; grid-template-columns: repeat(4, minmax(0, 1fr)); gap: 16px; margin-top: 24px; }
.metric-label { color: var(--text-dim); font-size: 0.85rem; margin-bottom: 6px; }
.metric-value { font-size: 1.8rem; font-weight: 600; }
.metric-delta { display: inline-block; margin-top: 6px; padding: 2px 8px; border-radius: 12px; font-size: 0.85rem; }
.delta-up { color: var(--green); background: rgba(63, 185, 80, 0.15); }
.delta-down { color: var(--red); background: rgba(248, 81, 73, 0.15); }
.delta-off { color: var(--gray); background: rgba(139, 148, 158, 0.15); }
.headline-preview { background: var(--info-bg); border-radius: 8px; padding: 12px 14px; font-style: italic; }
#trend-chart { width: 100%; }
details { border: 1px solid var(--border); border-radius: 8px; margin-bottom: 8px; background: var(--panel); }
summary { cursor: pointer; padding: 10px 14px; }
.log-body { padding: 0 14px 12px; }
.log-body p { margin: 4px 0 8px; }
@media (max-width: 860px) { .metrics { grid-template-columns: repeat(2, minmax(0, 1fr)); } }
"#;
