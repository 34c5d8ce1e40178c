use crate::catalog::GestureDefinition;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct DayRecord {
    #[serde(default)]
    pub gestures: Vec<String>,
}

impl DayRecord {
    pub fn is_marked(&self) -> bool {
        !self.gestures.is_empty()
    }

    pub fn contains(&self, gesture_id: &str) -> bool {
        self.gestures.iter().any(|id| id == gesture_id)
    }
}

/// Persisted journal: date key to the gestures marked that day.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct JournalData {
    pub days: BTreeMap<String, DayRecord>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Stats {
    pub total_days: usize,
    pub marked_days: usize,
    pub counts_by_gesture: IndexMap<String, u64>,
    pub percent: u8,
}

#[derive(Debug, Deserialize)]
pub struct ToggleRequest {
    pub gesture: String,
}

#[derive(Debug, Deserialize)]
pub struct GestureLabelRequest {
    pub label: String,
}

#[derive(Debug, Deserialize, Default)]
pub struct RangeRequest {
    pub start_date: Option<String>,
    pub months_to_show: Option<u32>,
}

#[derive(Debug, Deserialize, Default)]
pub struct BoardQuery {
    pub day: Option<String>,
    pub filter: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct DayResponse {
    pub date: String,
    pub gestures: Vec<String>,
    pub marked: bool,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RangeResponse {
    pub start_date: String,
    pub end_date: String,
    pub months_to_show: u32,
    pub total_days: usize,
}

#[derive(Debug, Serialize)]
pub struct CalendarDay {
    pub date: String,
    pub weekday: String,
    pub day_of_month: u32,
    pub month: u32,
    pub marked: bool,
    pub gestures: Vec<String>,
    pub labels: Vec<String>,
    pub matches_filter: bool,
}

#[derive(Debug, Serialize)]
pub struct JournalView {
    pub range: RangeResponse,
    pub gestures: Vec<GestureDefinition>,
    pub days: Vec<CalendarDay>,
    pub stats: Stats,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument<'a> {
    pub start_date: String,
    pub months_to_show: u32,
    pub data: &'a JournalData,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn journal_data_serializes_as_plain_mapping() {
        let mut data = JournalData::default();
        data.days.insert(
            "2024-01-15".into(),
            DayRecord {
                gestures: vec!["coffee".into(), "talk".into()],
            },
        );
        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "2024-01-15": { "gestures": ["coffee", "talk"] } })
        );
    }

    #[test]
    fn day_record_without_gestures_field_is_empty() {
        let data: JournalData = serde_json::from_str(r#"{ "2024-01-15": {} }"#).unwrap();
        assert!(!data.days["2024-01-15"].is_marked());
    }
}
