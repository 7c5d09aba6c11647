pub const APP_CSS: &str = r#"
:root {
    --color-bg-primary: #0f1117;
    --color-bg-secondary: #171a23;
    --color-text-primary: #f2f4f8;
    --color-text-muted: #9aa3b2;
    --color-border: #2a2f3c;
    --color-accent: #3b82f6;
    --color-chat-user-bg: #3b82f6;
    --color-chat-user-text: #ffffff;
    --color-chat-bot-bg: #171a23;
    --color-error-bg: rgba(239, 68, 68, 0.12);
    --color-error-border: #ef4444;
    --color-chip-bg: #1f2430;
    --color-healthy: #22c55e;
    --color-unhealthy: #f59e0b;
    --color-unreachable: #ef4444;
}
* { box-sizing: border-box; }
body { margin: 0; background: var(--color-bg-primary); color: var(--color-text-primary); font-family: system-ui, sans-serif; }
.app { display: flex; flex-direction: column; height: 100vh; }
.header { display: flex; justify-content: space-between; align-items: center; padding: 0.75rem 1.25rem; border-bottom: 1px solid var(--color-border); }
.header-brand { display: flex; align-items: center; gap: 0.75rem; }
.header-logo { font-weight: 700; }
.header-tagline { color: var(--color-text-muted); }
.header-actions { display: flex; align-items: center; gap: 0.75rem; }
.status-badge { font-size: 0.75rem; padding: 0.15rem 0.5rem; border-radius: 999px; border: 1px solid var(--color-border); color: var(--color-text-muted); }
.status-badge.healthy { border-color: var(--color-healthy); color: var(--color-healthy); }
.status-badge.unhealthy { border-color: var(--color-unhealthy); color: var(--color-unhealthy); }
.status-badge.unreachable { border-color: var(--color-unreachable); color: var(--color-unreachable); }
.btn-clear { background: transparent; color: var(--color-text-primary); border: 1px solid var(--color-border); border-radius: 6px; padding: 0.35rem 0.75rem; cursor: pointer; }
.chat-body { flex: 1; overflow-y: auto; padding: 1rem 1.25rem; }
.welcome { max-width: 720px; margin: 3rem auto; text-align: center; }
.suggestions-label { margin-top: 1.5rem; color: var(--color-text-muted); text-transform: uppercase; font-size: 0.75rem; }
.suggestions-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(220px, 1fr)); gap: 0.75rem; margin-top: 0.75rem; }
.suggestion-card { text-align: left; padding: 0.75rem; border-radius: 8px; border: 1px solid var(--color-border); background: var(--color-bg-secondary); color: var(--color-text-primary); cursor: pointer; }
.messages-list { max-width: 820px; margin: 0 auto; display: flex; flex-direction: column; gap: 1rem; }
.message-row { display: flex; gap: 0.75rem; align-items: flex-start; }
.message-row.user { flex-direction: row-reverse; }
.avatar { width: 2rem; height: 2rem; border-radius: 50%; display: flex; align-items: center; justify-content: center; background: var(--color-bg-secondary); font-size: 0.8rem; }
.bubble-wrap { max-width: 80%; display: flex; flex-direction: column; gap: 0.35rem; }
.bubble { padding: 0.65rem 0.9rem; border-radius: 10px; line-height: 1.5; }
.bubble.user { background: var(--color-chat-user-bg); color: var(--color-chat-user-text); white-space: pre-wrap; }
.bubble.bot { background: var(--color-chat-bot-bg); border: 1px solid var(--color-border); }
.bubble.error { background: var(--color-error-bg); border-color: var(--color-error-border); }
.md table { border-collapse: collapse; }
.md th, .md td { border: 1px solid var(--color-border); padding: 0.25rem 0.5rem; }
.message-timestamp { font-size: 0.7rem; color: var(--color-text-muted); }
.sources-toggle { align-self: flex-start; background: transparent; border: none; color: var(--color-text-muted); cursor: pointer; padding: 0; }
.sources-list { display: flex; flex-direction: column; gap: 0.35rem; }
.source-chip { background: var(--color-chip-bg); border-radius: 6px; padding: 0.4rem 0.6rem; font-size: 0.85rem; }
.source-score { font-weight: 700; margin-right: 0.5rem; color: var(--color-accent); }
.typing-indicator { display: flex; gap: 0.3rem; padding: 0.8rem; }
.typing-dot { width: 0.45rem; height: 0.45rem; border-radius: 50%; background: var(--color-text-muted); animation: blink 1.2s infinite; }
.typing-dot:nth-child(2) { animation-delay: 0.2s; }
.typing-dot:nth-child(3) { animation-delay: 0.4s; }
@keyframes blink { 0%, 80%, 100% { opacity: 0.25; } 40% { opacity: 1; } }
.input-area { border-top: 1px solid var(--color-border); padding: 0.75rem 1.25rem; }
.input-wrap { max-width: 820px; margin: 0 auto; display: flex; gap: 0.5rem; align-items: flex-end; }
.chat-input { flex: 1; resize: none; max-height: 120px; padding: 0.6rem; border-radius: 8px; border: 1px solid var(--color-border); background: var(--color-bg-secondary); color: var(--color-text-primary); font: inherit; }
.send-btn { padding: 0.6rem 1rem; border-radius: 8px; border: none; background: var(--color-accent); color: #fff; cursor: pointer; }
.send-btn:disabled { opacity: 0.5; cursor: default; }
.input-hint { max-width: 820px; margin: 0.35rem auto 0; font-size: 0.7rem; color: var(--color-text-muted); }
"#;
