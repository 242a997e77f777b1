use crate::catalog::ACTIVITIES;

pub fn render_index(dark_mode: bool) -> String {
    let theme = if dark_mode { "dark" } else { "light" };
    INDEX_HTML
        .replace("{{THEME}}", theme)
        .replace("{{ACTIVITIES}}", &render_activities())
}

fn render_activities() -> String {
    ACTIVITIES
        .iter()
        .map(|activity| {
            let class = if activity.negative {
                "activity negative"
            } else {
                "activity"
            };
            format!(
                r#"<label class="{class}" title="{title}"><input type="checkbox" name="activities" value="{id}" /><span>{label}</span></label>"#,
                title = escape_html(activity.description),
                id = activity.id,
                label = escape_html(activity.label),
            )
        })
        .collect::<Vec<_>>()
        .join("\n        ")
}

fn escape_html(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Breakup Recovery Calculator</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg: #fdf6f9;
      --ink: #2b2a28;
      --muted: #6f6a65;
      --card: rgba(255, 255, 255, 0.86);
      --surface: white;
      --border: rgba(88, 47, 72, 0.1);
      --accent: #9b5de5;
      --danger: #c63b2b;
      --shadow: 0 24px 60px rgba(88, 47, 72, 0.18);
      --mood-bg: var(--bg);
      --mood-ink: var(--ink);
      --progress: var(--accent);
    }

    body[data-theme="dark"] {
      --bg: #15131a;
      --ink: #f1ecf4;
      --muted: #b3aab9;
      --card: rgba(31, 28, 38, 0.92);
      --surface: #221f2a;
      --border: rgba(241, 236, 244, 0.1);
      --shadow: 0 24px 60px rgba(0, 0, 0, 0.45);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: var(--mood-bg);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
      transition: background 500ms ease, color 500ms ease;
    }

    .app {
      width: min(760px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 28px;
      animation: rise 600ms ease;
    }

    header {
      display: flex;
      align-items: flex-start;
      justify-content: space-between;
      gap: 16px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(1.8rem, 4vw, 2.5rem);
      margin: 0;
      color: var(--mood-ink);
      transition: color 500ms ease;
    }

    h2 {
      margin: 0;
      font-size: 1.3rem;
    }

    .subtitle {
      margin: 6px 0 0;
      color: var(--muted);
      font-size: 1rem;
    }

    form {
      display: grid;
      gap: 20px;
    }

    .field {
      display: grid;
      gap: 8px;
    }

    .field > span {
      font-size: 0.85rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: var(--muted);
    }

    input[type="date"],
    input[type="number"] {
      font: inherit;
      padding: 12px 14px;
      border-radius: 14px;
      border: 1px solid var(--border);
      background: var(--surface);
      color: var(--ink);
    }

    .slider {
      display: flex;
      align-items: center;
      gap: 10px;
    }

    .slider input {
      flex: 1;
    }

    .slider output {
      min-width: 2.5em;
      text-align: right;
      font-weight: 600;
    }

    .hint {
      margin: 0;
      color: var(--muted);
      font-size: 0.9rem;
    }

    .activities {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
      gap: 12px;
    }

    .activity {
      display: flex;
      align-items: center;
      gap: 10px;
      padding: 14px;
      border-radius: 16px;
      border: 1px solid var(--border);
      background: var(--surface);
      cursor: pointer;
      transition: transform 150ms ease, border-color 150ms ease;
    }

    .activity:hover {
      transform: scale(1.02);
      border-color: var(--accent);
    }

    .activity:has(input:checked) {
      border-color: var(--accent);
      box-shadow: 0 10px 24px rgba(155, 93, 229, 0.2);
    }

    .activity.negative {
      color: var(--danger);
      font-weight: 600;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 14px 20px;
      font: inherit;
      font-weight: 600;
      cursor: pointer;
      transition: transform 150ms ease, box-shadow 150ms ease;
      background: var(--accent);
      color: white;
      box-shadow: 0 10px 24px rgba(155, 93, 229, 0.3);
    }

    button:active {
      transform: scale(0.98);
    }

    button.ghost {
      background: transparent;
      color: var(--ink);
      border: 1px solid var(--border);
      box-shadow: none;
    }

    button.small {
      padding: 8px 14px;
      font-size: 0.85rem;
    }

    .result {
      display: grid;
      gap: 14px;
      color: var(--mood-ink);
    }

    .result[hidden],
    .poem[hidden] {
      display: none;
    }

    .bar {
      width: 100%;
      height: 16px;
      border-radius: 999px;
      background: rgba(120, 120, 120, 0.2);
      overflow: hidden;
    }

    .bar div {
      height: 100%;
      width: 0;
      background: var(--progress);
      transition: width 1000ms ease-out;
    }

    .headline {
      margin: 0;
      font-size: 1.25rem;
      text-align: center;
    }

    .message {
      margin: 0;
      text-align: center;
      font-style: italic;
    }

    .advice {
      margin: 0;
      text-align: center;
      color: var(--muted);
    }

    .poem {
      padding: 16px;
      border-radius: 16px;
      border: 1px solid rgba(198, 59, 43, 0.3);
      color: var(--danger);
      font-style: italic;
      text-align: center;
    }

    .actions {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
      gap: 12px;
    }

    .history {
      display: grid;
      gap: 12px;
    }

    .history-header {
      display: flex;
      justify-content: space-between;
      align-items: center;
      gap: 12px;
    }

    .history ul {
      list-style: none;
      margin: 0;
      padding: 0;
      display: grid;
      gap: 10px;
    }

    .history li {
      display: flex;
      align-items: center;
      justify-content: space-between;
      gap: 12px;
      padding: 12px 16px;
      border-radius: 16px;
      background: var(--surface);
      border: 1px solid var(--border);
    }

    .history li .value {
      font-size: 1.4rem;
      font-weight: 600;
    }

    .history li .buttons {
      display: flex;
      gap: 8px;
    }

    .status {
      font-size: 0.95rem;
      color: var(--muted);
      min-height: 1.2em;
    }

    .status[data-type="error"] {
      color: var(--danger);
    }

    .status[data-type="ok"] {
      color: #2d7a4b;
    }

    @keyframes rise {
      from {
        opacity: 0;
        transform: translateY(18px);
      }
      to {
        opacity: 1;
        transform: translateY(0);
      }
    }

    @media (max-width: 600px) {
      .app {
        padding: 28px 22px;
      }
      button {
        width: 100%;
      }
    }
  </style>
</head>
<body data-theme="{{THEME}}">
  <main class="app">
    <header>
      <div>
        <h1><span id="mood-emoji">💔</span> Breakup Recovery Calculator</h1>
        <p class="subtitle">How over them are you, really?</p>
      </div>
      <button class="ghost small" id="theme-toggle" type="button" title="Toggle dark mode">🌓</button>
    </header>

    <form id="recovery-form">
      <label class="field">
        <span>When did it happen? 📅</span>
        <input type="date" id="breakup-date" name="breakupDate" />
      </label>

      <label class="field" title="Shorter relationships usually heal faster.">
        <span>How long was the relationship? (months)</span>
        <input type="number" id="duration" name="relationshipDurationMonths" min="0" max="600" step="1" value="0" />
      </label>

      <div class="field" title="Higher impact slows recovery down.">
        <span>Emotional impact level 💔</span>
        <div class="slider">
          <small>0</small>
          <input type="range" id="impact" name="emotionalImpact" min="0" max="100" step="1" value="50" />
          <small>100</small>
          <output id="impact-value">50</output>
        </div>
        <p class="hint">From "I'm fine" (0) to "The world is ending" (100)</p>
      </div>

      <div class="field">
        <span>What are you doing to heal? 🌱</span>
        <p class="hint">Not selecting any options means you're not doing anything to recover.</p>
        <div class="activities">
        {{ACTIVITIES}}
        </div>
      </div>

      <button type="submit">Calculate My Recovery</button>
    </form>

    <section class="result" id="result" hidden>
      <h2>Your Recovery Progress</h2>
      <div class="bar"><div id="bar-fill"></div></div>
      <p class="headline" id="headline"></p>
      <p class="message" id="message"></p>
      <p class="advice" id="advice"></p>
      <div class="poem" id="poem" hidden>
        <strong>How bad is alcohol?</strong><br />
        <span id="poem-text"></span>
      </div>
      <div class="actions">
        <button class="ghost" id="share-btn" type="button">Share Your Progress 🔗</button>
        <button id="save-btn" type="button">Save Result 💾</button>
      </div>
    </section>

    <section class="history" id="history">
      <div class="history-header">
        <h2>History</h2>
        <button class="ghost small" id="clear-btn" type="button">Clear all</button>
      </div>
      <ul id="history-list"></ul>
      <p class="hint" id="history-empty">No saved results yet.</p>
    </section>

    <div class="status" id="status"></div>
  </main>

  <script>
    const form = document.getElementById('recovery-form');
    const dateEl = document.getElementById('breakup-date');
    const durationEl = document.getElementById('duration');
    const impactEl = document.getElementById('impact');
    const impactValueEl = document.getElementById('impact-value');
    const resultEl = document.getElementById('result');
    const barEl = document.getElementById('bar-fill');
    const headlineEl = document.getElementById('headline');
    const messageEl = document.getElementById('message');
    const adviceEl = document.getElementById('advice');
    const poemEl = document.getElementById('poem');
    const poemTextEl = document.getElementById('poem-text');
    const emojiEl = document.getElementById('mood-emoji');
    const historyListEl = document.getElementById('history-list');
    const historyEmptyEl = document.getElementById('history-empty');
    const statusEl = document.getElementById('status');
    const activityEls = Array.from(document.querySelectorAll('input[name="activities"]'));

    let lastShareText = '';

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
      if (type === 'ok') {
        setTimeout(() => setStatus('', ''), 1800);
      }
    };

    const isDark = () => document.body.dataset.theme === 'dark';

    const request = async (url, options = {}) => {
      const res = await fetch(url, {
        headers: { 'content-type': 'application/json' },
        ...options
      });
      if (!res.ok) {
        const msg = await res.text();
        throw new Error(msg || 'Request failed');
      }
      return res.status === 204 ? null : res.json();
    };

    const readForm = () => ({
      breakupDate: dateEl.value,
      relationshipDurationMonths: Number(durationEl.value || 0),
      emotionalImpact: Number(impactEl.value),
      activities: activityEls.filter((el) => el.checked).map((el) => el.value)
    });

    const fillForm = (input) => {
      dateEl.value = input.breakupDate;
      durationEl.value = input.relationshipDurationMonths;
      impactEl.value = input.emotionalImpact;
      impactValueEl.textContent = input.emotionalImpact;
      activityEls.forEach((el) => {
        el.checked = input.activities.includes(el.value);
      });
    };

    let palette = null;

    const applyPalette = () => {
      const root = document.documentElement.style;
      if (!palette) {
        root.removeProperty('--mood-bg');
        root.removeProperty('--mood-ink');
        return;
      }
      root.setProperty('--mood-bg', isDark() ? palette.backgroundDark : palette.background);
      root.setProperty('--mood-ink', isDark() ? palette.textDark : palette.text);
      root.setProperty('--progress', palette.progress);
    };

    const renderResult = (data) => {
      const { result } = data;
      const rounded = Math.round(result.percentage);
      const f = result.factors;
      palette = result.palette;
      applyPalette();
      emojiEl.textContent = result.moodEmoji;
      headlineEl.textContent = `You are ${rounded}% over them! ${result.moodEmoji}`;
      headlineEl.title = `Time ${f.time.toFixed(1)} · Emotional ${f.emotional.toFixed(1)} · Activities ${f.activity.toFixed(1)} · Duration ${f.duration.toFixed(1)}` +
        (f.penalty > 0 ? ` · Alcohol penalty -${f.penalty.toFixed(1)}` : '');
      messageEl.textContent = result.moodMessage;
      adviceEl.textContent = result.advice;
      poemEl.hidden = !result.cautionaryText;
      poemTextEl.textContent = result.cautionaryText || '';
      lastShareText = data.shareText;
      resultEl.hidden = false;
      requestAnimationFrame(() => {
        barEl.style.width = `${rounded}%`;
      });
    };

    const renderHistory = (entries) => {
      historyListEl.replaceChildren();
      historyEmptyEl.hidden = entries.length > 0;
      entries.forEach((entry) => {
        const item = document.createElement('li');
        const info = document.createElement('div');
        const value = document.createElement('span');
        value.className = 'value';
        value.textContent = `${Math.round(entry.percentage)}%`;
        const when = document.createElement('div');
        when.className = 'hint';
        when.textContent = `${entry.savedAt} · breakup ${entry.input.breakupDate}`;
        info.append(value, when);

        const buttons = document.createElement('div');
        buttons.className = 'buttons';
        const load = document.createElement('button');
        load.type = 'button';
        load.className = 'ghost small';
        load.textContent = 'Load';
        load.title = 'Load these answers back into the form';
        load.addEventListener('click', () => loadEntry(entry.id).catch((err) => setStatus(err.message, 'error')));
        const remove = document.createElement('button');
        remove.type = 'button';
        remove.className = 'ghost small';
        remove.textContent = 'Delete';
        remove.addEventListener('click', () => deleteEntry(entry.id).catch((err) => setStatus(err.message, 'error')));
        buttons.append(load, remove);

        item.append(info, buttons);
        historyListEl.append(item);
      });
    };

    const loadHistory = async () => {
      renderHistory(await request('/api/history'));
    };

    const loadEntry = async (id) => {
      const entry = await request(`/api/history/${encodeURIComponent(id)}`);
      fillForm(entry.input);
      setStatus('Loaded saved answers', 'ok');
    };

    const deleteEntry = async (id) => {
      renderHistory(await request(`/api/history/${encodeURIComponent(id)}`, { method: 'DELETE' }));
      setStatus('Deleted', 'ok');
    };

    impactEl.addEventListener('input', () => {
      impactValueEl.textContent = impactEl.value;
    });

    form.addEventListener('submit', (event) => {
      event.preventDefault();
      if (!dateEl.value) {
        setStatus('Please select the breakup date.', 'error');
        return;
      }
      request('/api/calculate', { method: 'POST', body: JSON.stringify(readForm()) })
        .then(renderResult)
        .catch((err) => setStatus(err.message, 'error'));
    });

    document.getElementById('save-btn').addEventListener('click', () => {
      request('/api/history', { method: 'POST', body: JSON.stringify(readForm()) })
        .then(() => loadHistory())
        .then(() => setStatus('Saved', 'ok'))
        .catch((err) => setStatus(err.message, 'error'));
    });

    document.getElementById('clear-btn').addEventListener('click', () => {
      request('/api/history', { method: 'DELETE' })
        .then(() => renderHistory([]))
        .then(() => setStatus('History cleared', 'ok'))
        .catch((err) => setStatus(err.message, 'error'));
    });

    document.getElementById('share-btn').addEventListener('click', () => {
      navigator.clipboard.writeText(lastShareText)
        .then(() => setStatus('Copied to clipboard! Share your progress!', 'ok'))
        .catch(() => setStatus('Clipboard is not available here', 'error'));
    });

    document.getElementById('theme-toggle').addEventListener('click', () => {
      request('/api/theme', { method: 'PUT', body: JSON.stringify({ darkMode: !isDark() }) })
        .then((theme) => {
          document.body.dataset.theme = theme.darkMode ? 'dark' : 'light';
          applyPalette();
        })
        .catch((err) => setStatus(err.message, 'error'));
    });

    loadHistory().catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_renders_theme_and_every_activity() {
        let html = render_index(true);
        assert!(html.contains(r#"<body data-theme="dark">"#));
        assert!(!html.contains("{{"));
        for activity in &ACTIVITIES {
            assert!(html.contains(&format!(r#"value="{}""#, activity.id)));
        }
        assert_eq!(html.matches("activity negative").count(), 1);

        assert!(render_index(false).contains(r#"<body data-theme="light">"#));
    }
}
