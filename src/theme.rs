//! Color variables injected alongside the base stylesheet.

pub const APP_THEME: &str = r#"
:root {
    --color-bg-primary: #0f172a;
    --color-bg-secondary: #1e293b;
    --color-bg-card: #1a2332;
    --color-bg-overlay: rgba(15, 23, 42, 0.96);
    --color-text-primary: #f1f5f9;
    --color-text-secondary: #cbd5e1;
    --color-text-muted: #94a3b8;
    --color-border: #334155;
    --color-input-bg: #1a2332;
    --color-accent: #4f46e5;
    --color-accent-hover: #4338ca;
    --color-danger: #dc2626;
    --color-danger-hover: #b91c1c;
    --color-danger-text: #f87171;
    --color-chat-user-bg: #4f46e5;
    --color-chat-user-text: #ffffff;
    --color-chat-assistant-bg: #1a2332;
    --color-chat-assistant-text: #e2e8f0;
    --color-error-bg: #7f1d1d;
    --color-error-text: #fecaca;
}
body { background: var(--color-bg-secondary); color: var(--color-text-primary); }
.sidebar { background: var(--color-bg-card); border-right: 1px solid var(--color-border); }
.top-bar { background: var(--color-bg-card); border-bottom: 1px solid var(--color-border); }
.composer-text { background: var(--color-input-bg); color: var(--color-text-secondary); border-color: var(--color-border); }
.composer-text:focus { border-color: var(--color-accent); }
.auth-card { background: var(--color-bg-card); border: 1px solid var(--color-border); }
.auth-input { background: var(--color-input-bg); color: var(--color-text-primary); border-color: var(--color-border); }
.auth-input:focus { border-color: var(--color-accent); }
.profile-detail { background: var(--color-bg-secondary); border: 1px solid var(--color-border); }
"#;
