use crate::catalog::{GestureCatalog, GestureDefinition};
use crate::errors::{JournalError, Result};
use crate::export;
use crate::models::{CalendarDay, DayRecord, DayResponse, JournalView, RangeResponse, Stats};
use crate::range::{Day, MonthSpan, compute_days, date_key, parse_date_key};
use crate::stats::build_stats;
use crate::store::DayRecordStore;
use chrono::{Datelike, NaiveDate};
use tracing::info;

/// One user's journal session: gestures, marks and the displayed range.
pub struct Journal {
    catalog: GestureCatalog,
    store: DayRecordStore,
    start_date: NaiveDate,
    span: MonthSpan,
}

impl Journal {
    pub fn new(store: DayRecordStore, today: NaiveDate) -> Self {
        Self {
            catalog: GestureCatalog::default(),
            store,
            start_date: today,
            span: MonthSpan::default(),
        }
    }

    pub fn catalog(&self) -> &GestureCatalog {
        &self.catalog
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn set_start_date(&mut self, start_date: NaiveDate) {
        self.start_date = start_date;
    }

    pub fn set_span(&mut self, span: MonthSpan) {
        self.span = span;
    }

    pub fn days(&self) -> Vec<Day> {
        compute_days(self.start_date, self.span)
    }

    pub fn stats(&self) -> Stats {
        build_stats(&self.days(), self.store.data(), &self.catalog)
    }

    pub fn range(&self) -> RangeResponse {
        let days = self.days();
        range_response(self.start_date, self.span, &days)
    }

    pub fn view(&self, filter: &str) -> JournalView {
        let days = self.days();
        let calendar = days
            .iter()
            .map(|day| self.calendar_day(day, filter))
            .collect();

        JournalView {
            range: range_response(self.start_date, self.span, &days),
            gestures: self.catalog.to_vec(),
            stats: build_stats(&days, self.store.data(), &self.catalog),
            days: calendar,
        }
    }

    pub fn day(&self, key: &str) -> Result<DayResponse> {
        parse_date_key(key)?;
        Ok(self.day_response(key))
    }

    pub fn toggle(&mut self, key: &str, gesture_id: &str) -> Result<DayResponse> {
        parse_date_key(key)?;
        if !self.catalog.contains(gesture_id) {
            return Err(JournalError::UnknownGesture(gesture_id.to_string()));
        }
        self.store.toggle(key, gesture_id)?;
        Ok(self.day_response(key))
    }

    pub fn clear_day(&mut self, key: &str) -> Result<()> {
        parse_date_key(key)?;
        self.store.clear_day(key)?;
        Ok(())
    }

    pub fn clear_all(&mut self) -> Result<()> {
        self.store.clear_all()?;
        info!("cleared all journal entries");
        Ok(())
    }

    pub fn add_gesture(&mut self, label: &str) -> Result<GestureDefinition> {
        let added = self.catalog.add(label)?.clone();
        info!(id = %added.id, "added gesture");
        Ok(added)
    }

    pub fn rename_gesture(&mut self, id: &str, label: &str) -> Result<GestureDefinition> {
        Ok(self.catalog.rename(id, label)?.clone())
    }

    pub fn export_json(&self) -> Result<String> {
        export::to_json(self.start_date, self.span, self.store.data())
    }

    pub fn export_csv(&self) -> String {
        export::to_csv(&self.days(), self.store.data())
    }

    pub fn print_html(&self) -> String {
        let days = self.days();
        let stats = build_stats(&days, self.store.data(), &self.catalog);
        export::print_html(&days, &stats, &self.catalog)
    }

    pub fn label_list(&self, gestures: &[String]) -> Vec<String> {
        gestures
            .iter()
            .map(|id| self.catalog.label_for(id).to_string())
            .collect()
    }

    fn day_response(&self, key: &str) -> DayResponse {
        let gestures = self.store.gestures(key).to_vec();
        DayResponse {
            date: key.to_string(),
            marked: !gestures.is_empty(),
            gestures,
        }
    }

    fn calendar_day(&self, day: &Day, filter: &str) -> CalendarDay {
        let record = self.store.get(&day.key);
        let gestures = record.map(|r| r.gestures.clone()).unwrap_or_default();
        CalendarDay {
            date: day.key.clone(),
            weekday: day.date.format("%a").to_string(),
            day_of_month: day.date.day(),
            month: day.date.month(),
            marked: !gestures.is_empty(),
            labels: self.label_list(&gestures),
            matches_filter: matches_filter(&day.key, record, filter),
            gestures,
        }
    }
}

/// A day matches when the filter is empty, appears in its date key, or
/// appears in its space-joined gesture ids.
pub fn matches_filter(key: &str, record: Option<&DayRecord>, filter: &str) -> bool {
    if filter.is_empty() || key.contains(filter) {
        return true;
    }
    record.is_some_and(|record| record.is_marked() && record.gestures.join(" ").contains(filter))
}

fn range_response(start: NaiveDate, span: MonthSpan, days: &[Day]) -> RangeResponse {
    RangeResponse {
        start_date: date_key(start),
        end_date: days.last().map_or_else(|| date_key(start), |day| day.key.clone()),
        months_to_show: span.months(),
        total_days: days.len(),
    }
}
