// Mood log
// Daily mood check-ins and the seven-day overview

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::MindhavenError;

/// Valid range for the 1-5 scales (mood, activity, stress)
pub const SCALE_RANGE: std::ops::RangeInclusive<u8> = 1..=5;

/// Hours of sleep accepted by the log
pub const SLEEP_RANGE: std::ops::RangeInclusive<u8> = 0..=24;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodEntry {
    pub id: String,
    pub date: NaiveDate,
    pub mood: u8,
    pub sleep: u8,
    pub activity: u8,
    pub stress: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl MoodEntry {
    /// Build a validated entry
    pub fn new(
        date: NaiveDate,
        mood: u8,
        sleep: u8,
        activity: u8,
        stress: u8,
        notes: Option<String>,
    ) -> Result<Self, MindhavenError> {
        check_scale("mood", mood)?;
        check_scale("activity", activity)?;
        check_scale("stress", stress)?;
        if !SLEEP_RANGE.contains(&sleep) {
            return Err(MindhavenError::InvalidMoodEntry {
                field: "sleep",
                value: sleep,
            });
        }

        Ok(Self {
            id: uuid::Uuid::new_v4().to_string(),
            date,
            mood,
            sleep,
            activity,
            stress,
            notes: notes.filter(|n| !n.trim().is_empty()),
            created_at: Utc::now(),
        })
    }
}

fn check_scale(field: &'static str, value: u8) -> Result<(), MindhavenError> {
    if SCALE_RANGE.contains(&value) {
        Ok(())
    } else {
        Err(MindhavenError::InvalidMoodEntry { field, value })
    }
}

/// One row of the weekly overview
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoodDay {
    pub date: NaiveDate,
    /// Short weekday name, e.g. "Mon"
    pub label: String,
    pub mood: u8,
    pub sleep: u8,
    pub activity: u8,
    pub stress: u8,
}

/// First entry logged for `date`, if any
pub fn entry_for(entries: &[MoodEntry], date: NaiveDate) -> Option<&MoodEntry> {
    entries.iter().find(|e| e.date == date)
}

/// Seven rows ending at `today`, oldest first. Missing days are zeros.
pub fn weekly_overview(entries: &[MoodEntry], today: NaiveDate) -> Vec<MoodDay> {
    (0..7)
        .rev()
        .map(|days_back| {
            let date = today - Duration::days(days_back);
            let entry = entry_for(entries, date);

            MoodDay {
                date,
                label: date.format("%a").to_string(),
                mood: entry.map_or(0, |e| e.mood),
                sleep: entry.map_or(0, |e| e.sleep),
                activity: entry.map_or(0, |e| e.activity),
                stress: entry.map_or(0, |e| e.stress),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, d).unwrap()
    }

    #[test]
    fn test_validation() {
        assert!(MoodEntry::new(day(1), 3, 7, 3, 3, None).is_ok());
        assert!(matches!(
            MoodEntry::new(day(1), 0, 7, 3, 3, None),
            Err(MindhavenError::InvalidMoodEntry { field: "mood", value: 0 })
        ));
        assert!(matches!(
            MoodEntry::new(day(1), 3, 25, 3, 3, None),
            Err(MindhavenError::InvalidMoodEntry { field: "sleep", .. })
        ));
        assert!(MoodEntry::new(day(1), 3, 7, 3, 6, None).is_err());
    }

    #[test]
    fn test_blank_notes_dropped() {
        let entry = MoodEntry::new(day(1), 3, 7, 3, 3, Some("  ".to_string())).unwrap();
        assert!(entry.notes.is_none());
    }

    #[test]
    fn test_weekly_overview_fills_gaps() {
        let entries = vec![
            MoodEntry::new(day(14), 4, 8, 2, 1, None).unwrap(),
            MoodEntry::new(day(10), 2, 5, 1, 4, None).unwrap(),
            // Outside the window
            MoodEntry::new(day(1), 5, 9, 5, 1, None).unwrap(),
        ];

        let week = weekly_overview(&entries, day(14));
        assert_eq!(week.len(), 7);
        assert_eq!(week[0].date, day(8));
        assert_eq!(week[6].date, day(14));
        // 2026-03-14 is a Saturday
        assert_eq!(week[6].label, "Sat");
        assert_eq!(week[6].mood, 4);
        assert_eq!(week[2].stress, 4);
        assert_eq!(week[1].mood, 0);
        assert_eq!(week.iter().filter(|d| d.mood > 0).count(), 2);
    }

    #[test]
    fn test_first_entry_for_date_wins() {
        let entries = vec![
            MoodEntry::new(day(5), 5, 8, 2, 1, None).unwrap(),
            MoodEntry::new(day(5), 1, 4, 1, 5, None).unwrap(),
        ];
        assert_eq!(entry_for(&entries, day(5)).unwrap().mood, 5);
        assert!(entry_for(&entries, day(6)).is_none());
    }
}
