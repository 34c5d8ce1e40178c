use crate::catalog::GestureCatalog;
use crate::models::{JournalData, Stats};
use crate::range::Day;
use indexmap::IndexMap;

pub fn build_stats(days: &[Day], data: &JournalData, catalog: &GestureCatalog) -> Stats {
    let mut counts_by_gesture: IndexMap<String, u64> =
        catalog.iter().map(|gesture| (gesture.id.clone(), 0)).collect();
    let mut marked_days = 0usize;

    for day in days {
        let Some(record) = data.days.get(&day.key) else {
            continue;
        };
        if !record.is_marked() {
            continue;
        }
        marked_days += 1;
        for id in &record.gestures {
            let count = counts_by_gesture.entry(id.clone()).or_insert(0);
            *count = count.saturating_add(1);
        }
    }

    Stats {
        total_days: days.len(),
        marked_days,
        counts_by_gesture,
        percent: percent(marked_days, days.len()),
    }
}

fn percent(marked: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let ratio = marked as f64 / total as f64;
    (ratio * 100.0).round().clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DayRecord;
    use crate::range::{MonthSpan, compute_days};
    use chrono::NaiveDate;

    fn mark(data: &mut JournalData, key: &str, gestures: &[&str]) {
        data.days.insert(
            key.to_string(),
            DayRecord {
                gestures: gestures.iter().map(|g| g.to_string()).collect(),
            },
        );
    }

    fn january_2024() -> Vec<Day> {
        compute_days(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(), MonthSpan::One)
    }

    #[test]
    fn january_marks_roll_up() {
        let mut data = JournalData::default();
        mark(&mut data, "2024-01-01", &["compliment"]);
        mark(&mut data, "2024-01-15", &["coffee", "talk"]);

        let stats = build_stats(&january_2024(), &data, &GestureCatalog::default());
        assert_eq!(stats.total_days, 31);
        assert_eq!(stats.marked_days, 2);
        assert_eq!(stats.percent, 6);
        let counts: Vec<(&str, u64)> = stats
            .counts_by_gesture
            .iter()
            .map(|(id, count)| (id.as_str(), *count))
            .collect();
        assert_eq!(
            counts,
            [
                ("compliment", 1),
                ("coffee", 1),
                ("talk", 1),
                ("help", 0),
                ("note", 0),
                ("gift", 0),
            ]
        );
    }

    #[test]
    fn empty_store_yields_zeroes() {
        let stats = build_stats(
            &january_2024(),
            &JournalData::default(),
            &GestureCatalog::default(),
        );
        assert_eq!(stats.marked_days, 0);
        assert_eq!(stats.percent, 0);
        assert_eq!(stats.counts_by_gesture.len(), 6);
        assert!(stats.counts_by_gesture.values().all(|count| *count == 0));
    }

    #[test]
    fn empty_range_has_zero_percent() {
        let mut data = JournalData::default();
        mark(&mut data, "2024-01-01", &["compliment"]);
        let stats = build_stats(&[], &data, &GestureCatalog::default());
        assert_eq!(stats.total_days, 0);
        assert_eq!(stats.percent, 0);
    }

    #[test]
    fn days_outside_range_and_empty_records_are_ignored() {
        let mut data = JournalData::default();
        mark(&mut data, "2023-12-31", &["gift"]);
        mark(&mut data, "2024-02-01", &["gift"]);
        mark(&mut data, "2024-01-10", &[]);

        let stats = build_stats(&january_2024(), &data, &GestureCatalog::default());
        assert_eq!(stats.marked_days, 0);
        assert_eq!(stats.counts_by_gesture["gift"], 0);
    }

    #[test]
    fn unknown_ids_are_counted_after_catalog_entries() {
        let mut data = JournalData::default();
        mark(&mut data, "2024-01-03", &["retired", "talk"]);

        let stats = build_stats(&january_2024(), &data, &GestureCatalog::default());
        assert_eq!(stats.counts_by_gesture.len(), 7);
        assert_eq!(stats.counts_by_gesture.get_index(6), Some((&"retired".to_string(), &1)));
    }

    #[test]
    fn counts_sum_to_recorded_marks() {
        let mut data = JournalData::default();
        mark(&mut data, "2024-01-02", &["coffee"]);
        mark(&mut data, "2024-01-03", &["coffee", "help", "note"]);
        mark(&mut data, "2024-01-04", &[]);
        mark(&mut data, "2024-01-20", &["gift", "talk"]);
        let days = january_2024();

        let stats = build_stats(&days, &data, &GestureCatalog::default());
        let total_marks: usize = days
            .iter()
            .filter_map(|day| data.days.get(&day.key))
            .map(|record| record.gestures.len())
            .sum();
        let non_empty = days
            .iter()
            .filter(|day| data.days.get(&day.key).is_some_and(|r| r.is_marked()))
            .count();

        assert_eq!(stats.counts_by_gesture.values().sum::<u64>(), total_marks as u64);
        assert_eq!(stats.marked_days, non_empty);
        assert_eq!(stats.percent, 10);
    }

    #[test]
    fn fully_marked_range_is_one_hundred_percent() {
        let days = january_2024();
        let mut data = JournalData::default();
        for day in &days {
            mark(&mut data, &day.key, &["talk"]);
        }
        let stats = build_stats(&days, &data, &GestureCatalog::default());
        assert_eq!(stats.percent, 100);
        assert_eq!(stats.counts_by_gesture["talk"], 31);
    }
}
