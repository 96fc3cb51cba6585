//! When people write: weekday distribution and weekday x hour heatmap.
//!
//! Records without a valid timestamp are left out of both.

use serde::Serialize;

use crate::MessageRecord;
use crate::message::{WEEK_ORDER, weekday_name};

/// Message count and share for one weekday.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayActivity {
    /// Weekday name, e.g. `"Monday"`.
    pub day: &'static str,
    pub count: usize,
    /// Share of dated messages, in percent rounded to 2 decimals.
    pub percentage: f64,
}

/// Messages per weekday, always seven entries in Monday..Sunday order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActiveDays {
    pub days: Vec<DayActivity>,
    /// Number of dated messages counted.
    pub total: usize,
}

impl ActiveDays {
    /// The weekday with the most messages; the earliest in the week wins ties.
    pub fn busiest(&self) -> Option<&DayActivity> {
        self.days
            .iter()
            .filter(|d| d.count > 0)
            .fold(None, |best: Option<&DayActivity>, d| match best {
                Some(b) if b.count >= d.count => Some(b),
                _ => Some(d),
            })
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

impl Default for ActiveDays {
    fn default() -> Self {
        Self {
            days: WEEK_ORDER
                .iter()
                .map(|d| DayActivity {
                    day: weekday_name(*d),
                    count: 0,
                    percentage: 0.0,
                })
                .collect(),
            total: 0,
        }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Counts messages per weekday with each day's percentage share.
///
/// With no dated messages every count and percentage is zero.
pub fn active_days<'a, I>(records: I) -> ActiveDays
where
    I: IntoIterator<Item = &'a MessageRecord>,
{
    let mut counts = [0usize; 7];
    for record in records {
        if let Some(day) = record.weekday() {
            counts[day.num_days_from_monday() as usize] += 1;
        }
    }

    let total: usize = counts.iter().sum();
    let days = WEEK_ORDER
        .iter()
        .zip(counts)
        .map(|(day, count)| DayActivity {
            day: weekday_name(*day),
            count,
            percentage: if total == 0 {
                0.0
            } else {
                round2(count as f64 / total as f64 * 100.0)
            },
        })
        .collect();

    ActiveDays { days, total }
}

/// Message counts per weekday (rows, Monday first) and hour of day (columns).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityHeatmap {
    pub cells: [[usize; 24]; 7],
}

impl Default for ActivityHeatmap {
    fn default() -> Self {
        Self {
            cells: [[0; 24]; 7],
        }
    }
}

impl ActivityHeatmap {
    pub fn get(&self, day: chrono::Weekday, hour: u32) -> usize {
        self.cells[day.num_days_from_monday() as usize]
            .get(hour as usize)
            .copied()
            .unwrap_or(0)
    }

    /// Hour of day with the most messages across all weekdays.
    pub fn peak_hour(&self) -> Option<u32> {
        let mut per_hour = [0usize; 24];
        for row in &self.cells {
            for (hour, count) in row.iter().enumerate() {
                per_hour[hour] += count;
            }
        }
        let (hour, count) = per_hour
            .iter()
            .enumerate()
            .rev()
            .max_by_key(|(_, count)| **count)?;
        (*count > 0).then_some(hour as u32)
    }

    pub fn total(&self) -> usize {
        self.cells.iter().flatten().sum()
    }
}

/// Builds the weekday x hour heatmap.
pub fn activity_heatmap<'a, I>(records: I) -> ActivityHeatmap
where
    I: IntoIterator<Item = &'a MessageRecord>,
{
    let mut heatmap = ActivityHeatmap::default();
    for record in records {
        if let Some(derived) = record.derived() {
            let row = derived.weekday.num_days_from_monday() as usize;
            heatmap.cells[row][derived.hour as usize] += 1;
        }
    }
    heatmap
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Weekday};

    // 2023-01-02 is a Monday
    fn on(day_of_jan: u32, hour: u32) -> MessageRecord {
        let ts = NaiveDate::from_ymd_opt(2023, 1, day_of_jan)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap();
        MessageRecord::new("Alice", "hi", Some(ts))
    }

    #[test]
    fn test_fixed_week_order() {
        let active = active_days(&[on(8, 10)]);
        let names: Vec<_> = active.days.iter().map(|d| d.day).collect();
        assert_eq!(
            names,
            vec!["Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday"]
        );
        assert_eq!(active.days[6].count, 1);
        assert_eq!(active.days[6].percentage, 100.0);
    }

    #[test]
    fn test_percentages_round_to_two_decimals() {
        let records = vec![on(2, 9), on(3, 9), on(4, 9)];
        let active = active_days(&records);
        assert_eq!(active.total, 3);
        assert_eq!(active.days[0].percentage, 33.33);
        assert_eq!(active.days[3].percentage, 0.0);
        let sum: f64 = active.days.iter().map(|d| d.percentage).sum();
        assert!((sum - 100.0).abs() < 0.05);
    }

    #[test]
    fn test_undated_excluded() {
        let records = vec![on(2, 9), MessageRecord::new("Bob", "x", None)];
        let active = active_days(&records);
        assert_eq!(active.total, 1);
        assert_eq!(active.days[0].percentage, 100.0);
    }

    #[test]
    fn test_empty_is_zero() {
        let records: Vec<MessageRecord> = vec![];
        let active = active_days(&records);
        assert!(active.is_empty());
        assert_eq!(active, ActiveDays::default());
        assert!(active.busiest().is_none());
        assert!(active.days.iter().all(|d| d.percentage == 0.0));
    }

    #[test]
    fn test_busiest_day() {
        let records = vec![on(3, 9), on(3, 10), on(4, 9), on(4, 11)];
        assert_eq!(active_days(&records).busiest().unwrap().day, "Tuesday");
    }

    #[test]
    fn test_heatmap() {
        let records = vec![on(2, 9), on(2, 9), on(8, 23), MessageRecord::new("B", "x", None)];
        let heatmap = activity_heatmap(&records);
        assert_eq!(heatmap.get(Weekday::Mon, 9), 2);
        assert_eq!(heatmap.get(Weekday::Sun, 23), 1);
        assert_eq!(heatmap.get(Weekday::Tue, 9), 0);
        assert_eq!(heatmap.total(), 3);
        assert_eq!(heatmap.peak_hour(), Some(9));
    }

    #[test]
    fn test_heatmap_empty() {
        let heatmap = activity_heatmap(&Vec::<MessageRecord>::new());
        assert_eq!(heatmap.total(), 0);
        assert_eq!(heatmap.peak_hour(), None);
    }
}
