use crate::models::{DayResponse, JournalView};
use crate::range::MonthSpan;

pub fn render_index(view: &JournalView, selected: Option<&DayResponse>, filter: &str) -> String {
    INDEX_HTML
        .replace("{{MONTHS}}", &view.range.months_to_show.to_string())
        .replace("{{START}}", &view.range.start_date)
        .replace("{{END}}", &view.range.end_date)
        .replace("{{PERCENT}}", &view.stats.percent.to_string())
        .replace("{{MARKED}}", &view.stats.marked_days.to_string())
        .replace("{{TOTAL}}", &view.stats.total_days.to_string())
        .replace("{{COUNTS}}", &render_counts(view))
        .replace("{{SPAN_OPTIONS}}", &render_span_options(view.range.months_to_show))
        .replace("{{GESTURE_EDITOR}}", &render_gesture_editor(view))
        .replace(
            "{{DAY_PANEL}}",
            &selected
                .map(|day| render_day_panel(view, day))
                .unwrap_or_default(),
        )
        .replace("{{BOARD}}", &render_board(view))
        .replace("{{FILTER}}", &escape_html(filter))
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            '{' => escaped.push_str("&#123;"),
            '}' => escaped.push_str("&#125;"),
            other => escaped.push(other),
        }
    }
    escaped
}

fn render_counts(view: &JournalView) -> String {
    view.stats
        .counts_by_gesture
        .iter()
        .map(|(id, count)| {
            let label = view
                .gestures
                .iter()
                .find(|gesture| &gesture.id == id)
                .map_or(id.as_str(), |gesture| gesture.label.as_str());
            format!(
                "<li><span>{}</span><strong>{count}</strong></li>",
                escape_html(label)
            )
        })
        .collect()
}

fn render_span_options(current: u32) -> String {
    MonthSpan::ALL
        .iter()
        .map(|span| {
            let months = span.months();
            let selected = if months == current { " selected" } else { "" };
            format!("<option value=\"{months}\"{selected}>{months}</option>")
        })
        .collect()
}

fn render_gesture_editor(view: &JournalView) -> String {
    view.gestures
        .iter()
        .map(|gesture| {
            format!(
                r#"<form class="inline" method="post" action="/gestures/rename">
          <input type="hidden" name="id" value="{id}" />
          <input type="text" name="label" value="{label}" />
          <button class="btn-ghost" type="submit">Save</button>
        </form>"#,
                id = escape_html(&gesture.id),
                label = escape_html(&gesture.label),
            )
        })
        .collect()
}

fn render_board(view: &JournalView) -> String {
    view.days
        .iter()
        .map(|day| {
            let mut classes = String::from("day");
            if day.marked {
                classes.push_str(" marked");
            }
            if !day.matches_filter {
                classes.push_str(" dim");
            }
            let summary = if day.marked {
                escape_html(&day.labels.join(", "))
            } else {
                String::from("<em>Not marked</em>")
            };
            format!(
                r#"<a class="{classes}" href="/?day={date}">
          <span class="weekday">{weekday}</span>
          <span class="date">{dom}/{month}</span>
          <span class="marks">{summary}</span>
        </a>"#,
                date = day.date,
                weekday = day.weekday,
                dom = day.day_of_month,
                month = day.month,
            )
        })
        .collect()
}

fn render_day_panel(view: &JournalView, day: &DayResponse) -> String {
    let toggles: String = view
        .gestures
        .iter()
        .map(|gesture| {
            let checked = day.gestures.iter().any(|id| id == &gesture.id);
            format!(
                r#"<form method="post" action="/day/{date}/toggle">
            <input type="hidden" name="gesture" value="{id}" />
            <button class="toggle{active}" type="submit">{mark} {label}</button>
          </form>"#,
                date = day.date,
                id = escape_html(&gesture.id),
                active = if checked { " on" } else { "" },
                mark = if checked { "&#9745;" } else { "&#9744;" },
                label = escape_html(&gesture.label),
            )
        })
        .collect();

    format!(
        r#"<div class="overlay">
      <div class="dialog">
        <div class="dialog-head">
          <h3>{date}</h3>
          <div class="row">
            <form method="post" action="/day/{date}/clear">
              <button class="btn-danger" type="submit">Clear day</button>
            </form>
            <a class="btn-ghost" href="/">Close</a>
          </div>
        </div>
        <div class="toggles">{toggles}</div>
      </div>
    </div>"#,
        date = day.date,
    )
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Gesture Journal</title>
  <style>
    :root {
      --bg-1: #f8f3e6;
      --bg-2: #f5d3a7;
      --ink: #2b2a28;
      --accent: #ff6b4a;
      --accent-2: #2f4858;
      --card: rgba(255, 255, 255, 0.86);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.18);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #ffe9d4 60%, #f9f2e9 100%);
      color: var(--ink);
      font-family: "Trebuchet MS", sans-serif;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(1180px, 100%);
      margin: 0 auto;
      display: grid;
      gap: 24px;
    }

    header {
      display: flex;
      flex-wrap: wrap;
      justify-content: space-between;
      align-items: center;
      gap: 12px;
    }

    h1 {
      font-family: "Georgia", serif;
      margin: 0;
    }

    .subtitle {
      margin: 0;
      color: #5f5c57;
    }

    .layout {
      display: grid;
      grid-template-columns: 280px 1fr 280px;
      gap: 20px;
      align-items: start;
    }

    .card {
      background: var(--card);
      border-radius: 22px;
      box-shadow: var(--shadow);
      padding: 20px;
      display: grid;
      gap: 12px;
    }

    .row, .inline {
      display: flex;
      gap: 8px;
      align-items: center;
    }

    .progress {
      height: 22px;
      border-radius: 999px;
      background: rgba(17, 24, 39, 0.06);
      overflow: hidden;
    }

    .progress div {
      height: 100%;
      width: {{PERCENT}}%;
      background: linear-gradient(90deg, #fef3c7, #fed7aa, #fecaca);
    }

    .counts {
      list-style: none;
      margin: 0;
      padding: 0;
      display: grid;
      gap: 6px;
    }

    .counts li {
      display: flex;
      justify-content: space-between;
    }

    .board {
      display: grid;
      grid-template-columns: repeat(7, 1fr);
      gap: 8px;
    }

    .day {
      display: flex;
      flex-direction: column;
      gap: 4px;
      min-height: 84px;
      padding: 10px;
      border-radius: 14px;
      background: #f9fafb;
      color: inherit;
      text-decoration: none;
      font-size: 0.8rem;
    }

    .day.marked {
      background: #fef3c7;
    }

    .day.dim {
      opacity: 0.3;
    }

    .day .date {
      font-weight: 600;
      font-size: 0.95rem;
    }

    .day .weekday, .day em {
      color: #8b857d;
    }

    button, .btn-ghost {
      appearance: none;
      border: 1px solid rgba(47, 72, 88, 0.2);
      border-radius: 999px;
      padding: 8px 14px;
      background: white;
      color: var(--accent-2);
      font-weight: 600;
      cursor: pointer;
      text-decoration: none;
      font-size: 0.9rem;
    }

    .btn-primary {
      background: var(--accent-2);
      color: white;
    }

    .btn-danger {
      color: var(--accent);
    }

    input[type="text"], input[type="date"], select {
      border: 1px solid rgba(47, 72, 88, 0.2);
      border-radius: 10px;
      padding: 6px 8px;
      flex: 1;
    }

    .overlay {
      position: fixed;
      inset: 0;
      background: rgba(0, 0, 0, 0.4);
      display: grid;
      place-items: center;
      padding: 16px;
    }

    .dialog {
      background: white;
      border-radius: 18px;
      padding: 20px;
      width: min(560px, 100%);
      display: grid;
      gap: 14px;
    }

    .dialog-head {
      display: flex;
      justify-content: space-between;
      align-items: center;
    }

    .toggles {
      display: grid;
      grid-template-columns: 1fr 1fr;
      gap: 8px;
    }

    .toggle {
      width: 100%;
      text-align: left;
      border-radius: 12px;
    }

    .toggle.on {
      background: #fef3c7;
    }

    @media (max-width: 960px) {
      .layout {
        grid-template-columns: 1fr;
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <div>
        <h1>Gesture Journal &middot; {{MONTHS}} months</h1>
        <p class="subtitle">{{START}} &rarr; {{END}}</p>
      </div>
      <div class="row">
        <form method="post" action="/range/today">
          <button class="btn-primary" type="submit">Back to today</button>
        </form>
        <a class="btn-ghost" href="/export/json">Export JSON</a>
        <a class="btn-ghost" href="/export/csv">Export CSV</a>
        <a class="btn-ghost" href="/print" target="_blank">Print / PDF</a>
      </div>
    </header>

    <section class="layout">
      <div class="card">
        <h3>Progress</h3>
        <div class="progress"><div></div></div>
        <p><strong>{{PERCENT}}%</strong> of days with at least one gesture</p>
        <p>Marked days: <strong>{{MARKED}}</strong> / {{TOTAL}}</p>
        <ul class="counts">{{COUNTS}}</ul>

        <h3>Settings</h3>
        <form method="post" action="/range">
          <div class="row">
            <label for="start_date">Start</label>
            <input id="start_date" type="date" name="start_date" value="{{START}}" />
          </div>
          <div class="row">
            <label for="months_to_show">Months</label>
            <select id="months_to_show" name="months_to_show">{{SPAN_OPTIONS}}</select>
          </div>
          <button type="submit">Apply</button>
        </form>
      </div>

      <div class="card">
        <div class="row">
          <h3>Days</h3>
          <form class="inline" method="get" action="/">
            <input type="text" name="filter" value="{{FILTER}}" placeholder="Search a date or gesture" />
            <button type="submit">Filter</button>
          </form>
          <form method="post" action="/clear">
            <button class="btn-danger" type="submit">Clear all</button>
          </form>
        </div>
        <div class="board">
        {{BOARD}}
        </div>
        <p class="subtitle">Tip: pick any day to mark it. Changes are saved automatically.</p>
      </div>

      <div class="card">
        <h3>Gestures</h3>
        {{GESTURE_EDITOR}}
        <form class="inline" method="post" action="/gestures/add">
          <input type="text" name="label" placeholder="New gesture" />
          <button class="btn-primary" type="submit">Add</button>
        </form>
      </div>
    </section>
  </main>
  {{DAY_PANEL}}
</body>
</html>
"#;
