use crate::view::View;

pub fn render_index(view: &View) -> String {
    INDEX_HTML
        .replace("{{MOODS}}", &render_moods(view))
        .replace("{{STATUS_KIND}}", view.status.kind)
        .replace("{{STATUS}}", &escape_html(view.status.message))
        .replace("{{RESPONSE_HIDDEN}}", if view.response.is_some() { "" } else { " hidden" })
        .replace("{{SENTIMENT}}", &render_sentiment(view))
        .replace("{{MESSAGE}}", &render_message(view))
        .replace("{{AFFIRMATIONS}}", &render_affirmations(view))
        .replace("{{HISTORY}}", &render_history(view))
}

fn render_moods(view: &View) -> String {
    view.moods
        .iter()
        .map(|option| {
            let class = if option.active { "mood active" } else { "mood" };
            format!(
                r#"<button class="{class}" type="submit" name="mood" value="{tag}" data-mood="{tag}" aria-pressed="{active}">{label}</button>"#,
                tag = option.tag,
                active = option.active,
                label = escape_html(option.label),
            )
        })
        .collect::<Vec<_>>()
        .join("\n        ")
}

fn render_message(view: &View) -> String {
    view.response
        .as_ref()
        .map(|support| escape_html(&support.message))
        .unwrap_or_default()
}

fn render_sentiment(view: &View) -> String {
    view.response
        .as_ref()
        .and_then(|support| support.sentiment.as_deref())
        .map(escape_html)
        .unwrap_or_default()
}

fn render_affirmations(view: &View) -> String {
    let Some(support) = view.response.as_ref() else {
        return String::new();
    };
    support
        .affirmations
        .iter()
        .map(|affirmation| format!("<div>{}</div>", escape_html(affirmation)))
        .collect()
}

fn render_history(view: &View) -> String {
    view.history
        .iter()
        .map(|line| format!("<li>{}</li>", escape_html(line)))
        .collect::<Vec<_>>()
        .join("\n        ")
}

fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            // Keeps user text from reaching later template placeholders.
            '{' => out.push_str("&#123;"),
            _ => out.push(ch),
        }
    }
    out
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>MindMate</title>
  <style>
    :root {
      --bg-1: #eef4f1;
      --ink: #25302c;
      --accent: #3f8f74;
      --card: rgba(255, 255, 255, 0.9);
      --shadow: 0 24px 60px rgba(37, 48, 44, 0.16);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: linear-gradient(135deg, var(--bg-1), #f7faf8 70%);
      color: var(--ink);
      font-family: "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(720px, 100%);
      background: var(--card);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 24px;
    }

    h1 {
      margin: 0;
      font-family: "Georgia", serif;
    }

    .moods {
      display: flex;
      flex-wrap: wrap;
      gap: 10px;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 12px 18px;
      font-size: 1rem;
      font-weight: 600;
      cursor: pointer;
      background: white;
      color: var(--ink);
      box-shadow: 0 6px 14px rgba(37, 48, 44, 0.12);
    }

    button.mood.active,
    .btn-submit {
      background: var(--accent);
      color: white;
    }

    textarea {
      width: 100%;
      min-height: 90px;
      border-radius: 16px;
      border: 1px solid rgba(37, 48, 44, 0.15);
      padding: 12px;
      font: inherit;
    }

    .status {
      font-size: 0.95rem;
      color: #5c6662;
      min-height: 1.2em;
    }

    .status[data-type="error"],
    .status[data-type="prompt"] {
      color: #c63b2b;
    }

    .card {
      background: white;
      border-radius: 20px;
      padding: 18px;
      display: grid;
      gap: 10px;
    }

    .sentiment {
      font-size: 0.85rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: #8b938f;
    }

    #affirmations div::before {
      content: "\2022  ";
      color: var(--accent);
    }

    #history {
      margin: 0;
      padding-left: 20px;
      display: grid;
      gap: 6px;
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>MindMate</h1>
      <p>How are you feeling right now?</p>
    </header>

    <form id="mood-form" method="post" action="/mood">
      <div class="moods">
        {{MOODS}}
      </div>
    </form>

    <form id="support-form" method="post" action="/support">
      <textarea id="notes" name="note" placeholder="Anything you want to add? (optional)"></textarea>
      <button class="btn-submit" id="getSupport" type="submit">Get support</button>
    </form>

    <div class="status" id="status" data-type="{{STATUS_KIND}}">{{STATUS}}</div>

    <section class="card" id="responseCard"{{RESPONSE_HIDDEN}}>
      <span class="sentiment" id="sentiment">{{SENTIMENT}}</span>
      <p id="aiResponse">{{MESSAGE}}</p>
      <div id="affirmations">{{AFFIRMATIONS}}</div>
    </section>

    <section class="card">
      <h2>Recent check-ins</h2>
      <ul id="history">
        {{HISTORY}}
      </ul>
    </section>
  </main>

  <script>
    const statusEl = document.getElementById('status');
    const notesEl = document.getElementById('notes');
    const responseCard = document.getElementById('responseCard');
    const aiResponse = document.getElementById('aiResponse');
    const sentimentEl = document.getElementById('sentiment');
    const affEl = document.getElementById('affirmations');
    const historyEl = document.getElementById('history');
    const moodButtons = Array.from(document.querySelectorAll('.mood'));

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const applyView = (view) => {
      view.moods.forEach((option) => {
        const button = moodButtons.find((b) => b.dataset.mood === option.tag);
        if (button) {
          button.classList.toggle('active', option.active);
          button.setAttribute('aria-pressed', String(option.active));
        }
      });
      setStatus(view.status.message, view.status.kind);
      if (view.response) {
        aiResponse.textContent = view.response.message;
        sentimentEl.textContent = view.response.sentiment || '';
        affEl.replaceChildren(...view.response.affirmations.map((a) => {
          const d = document.createElement('div');
          d.textContent = a;
          return d;
        }));
        responseCard.hidden = false;
      }
      historyEl.replaceChildren(...view.history.map((line) => {
        const li = document.createElement('li');
        li.textContent = line;
        return li;
      }));
    };

    const post = async (url, body) => {
      const res = await fetch(url, {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify(body)
      });
      if (!res.ok) {
        throw new Error((await res.text()) || 'Request failed');
      }
      return res.json();
    };

    moodButtons.forEach((button) => {
      button.addEventListener('click', (event) => {
        event.preventDefault();
        post('/api/mood', { mood: button.dataset.mood })
          .then(applyView)
          .catch((err) => setStatus(err.message, 'error'));
      });
    });

    document.getElementById('support-form').addEventListener('submit', (event) => {
      event.preventDefault();
      setStatus('Contacting backend...', 'info');
      post('/api/check-in', { note: notesEl.value || '' })
        .then(applyView)
        .catch((err) => setStatus(err.message, 'error'));
    });
  </script>
</body>
</html>
"#;
