use crate::catalog::GestureCatalog;
use crate::errors::Result;
use crate::models::{ExportDocument, JournalData, Stats};
use crate::range::{Day, MonthSpan, date_key};
use crate::ui::escape_html;
use chrono::NaiveDate;

pub const CSV_HEADER: &str = "date,gestures_count,gestures_list";

pub fn json_filename(start: NaiveDate) -> String {
    format!("gesture_journal_{}.json", date_key(start))
}

pub fn csv_filename(start: NaiveDate) -> String {
    format!("gesture_journal_{}.csv", date_key(start))
}

pub fn to_json(start: NaiveDate, span: MonthSpan, data: &JournalData) -> Result<String> {
    let document = ExportDocument {
        start_date: date_key(start),
        months_to_show: span.months(),
        data,
    };
    Ok(serde_json::to_string_pretty(&document)?)
}

/// One row per day of the range, in order. Rows are `\n` separated with no
/// trailing newline.
pub fn to_csv(days: &[Day], data: &JournalData) -> String {
    let mut rows = Vec::with_capacity(days.len() + 1);
    rows.push(CSV_HEADER.to_string());
    for day in days {
        let gestures = data
            .days
            .get(&day.key)
            .map(|record| record.gestures.as_slice())
            .unwrap_or_default();
        rows.push(format!(
            "{},{},\"{}\"",
            day.key,
            gestures.len(),
            gestures.join("|").replace('"', "\"\"")
        ));
    }
    rows.join("\n")
}

pub fn print_html(days: &[Day], stats: &Stats, catalog: &GestureCatalog) -> String {
    let range = match (days.first(), days.last()) {
        (Some(first), Some(last)) => format!("{} &mdash; {}", first.key, last.key),
        _ => String::from("&mdash;"),
    };
    let items: String = stats
        .counts_by_gesture
        .iter()
        .map(|(id, count)| format!("<li>{}: {count}</li>", escape_html(catalog.label_for(id))))
        .collect();

    PRINT_HTML
        .replace("{{RANGE}}", &range)
        .replace("{{MARKED}}", &stats.marked_days.to_string())
        .replace("{{TOTAL}}", &stats.total_days.to_string())
        .replace("{{PERCENT}}", &stats.percent.to_string())
        .replace("{{ITEMS}}", &items)
}

const PRINT_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <title>Gesture journal summary</title>
  <style>body{font-family:Arial,Helvetica,sans-serif;padding:20px}</style>
</head>
<body>
  <h1>Gesture journal summary</h1>
  <p>Range: {{RANGE}}</p>
  <p>Days with a gesture: {{MARKED}} of {{TOTAL}} ({{PERCENT}}%)</p>
  <h3>Breakdown</h3>
  <ul>{{ITEMS}}</ul>
  <script>window.addEventListener("load", () => window.print());</script>
</body>
</html>
"#;
