// ABOUTME: Per-day activity records keyed by calendar date
// ABOUTME: Upserted on every qualifying action, never deleted

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyActivity {
    pub date: NaiveDate,
    #[serde(default)]
    pub steps_completed: u32,
    #[serde(default)]
    pub pomodoro_minutes: u32,
    #[serde(default)]
    pub roadmaps_worked_on: BTreeSet<String>,
}

impl DailyActivity {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            steps_completed: 0,
            pomodoro_minutes: 0,
            roadmaps_worked_on: BTreeSet::new(),
        }
    }
}

/// Daily activity indexed by ISO date. Serializes as a date-keyed map and
/// also accepts the older array form on load.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DailyActivities {
    days: BTreeMap<NaiveDate, DailyActivity>,
}

impl DailyActivities {
    /// Add counts to the entry for `date`, creating it if needed
    pub fn record(
        &mut self,
        date: NaiveDate,
        steps_completed: u32,
        pomodoro_minutes: u32,
        roadmap_id: &str,
    ) -> &DailyActivity {
        let day = self
            .days
            .entry(date)
            .or_insert_with(|| DailyActivity::new(date));
        day.steps_completed = day.steps_completed.saturating_add(steps_completed);
        day.pomodoro_minutes = day.pomodoro_minutes.saturating_add(pomodoro_minutes);
        if roadmap_id.is_empty() {
            debug!("Activity on {} recorded without a roadmap", date);
        } else {
            day.roadmaps_worked_on.insert(roadmap_id.to_string());
        }
        day
    }

    pub fn get(&self, date: NaiveDate) -> Option<&DailyActivity> {
        self.days.get(&date)
    }

    /// Oldest first
    pub fn iter(&self) -> impl Iterator<Item = &DailyActivity> {
        self.days.values()
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

impl Serialize for DailyActivities {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.days.serialize(serializer)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum DailyActivitiesRepr {
    Map(BTreeMap<NaiveDate, DailyActivity>),
    List(Vec<DailyActivity>),
}

impl<'de> Deserialize<'de> for DailyActivities {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let days = match DailyActivitiesRepr::deserialize(deserializer)? {
            DailyActivitiesRepr::Map(days) => days,
            DailyActivitiesRepr::List(list) => {
                let mut merged = DailyActivities::default();
                for day in list {
                    if merged.days.contains_key(&day.date) {
                        debug!("Merging duplicate activity entry for {}", day.date);
                    }
                    let entry = merged
                        .days
                        .entry(day.date)
                        .or_insert_with(|| DailyActivity::new(day.date));
                    entry.steps_completed =
                        entry.steps_completed.saturating_add(day.steps_completed);
                    entry.pomodoro_minutes =
                        entry.pomodoro_minutes.saturating_add(day.pomodoro_minutes);
                    entry.roadmaps_worked_on.extend(day.roadmaps_worked_on);
                }
                merged.days
            }
        };
        Ok(Self { days })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, d).unwrap()
    }

    #[test]
    fn test_record_upserts_same_day() {
        let mut activities = DailyActivities::default();
        activities.record(day(1), 1, 0, "rm-a");
        activities.record(day(1), 0, 25, "rm-b");
        activities.record(day(1), 1, 0, "rm-a");

        assert_eq!(activities.len(), 1);
        let entry = activities.get(day(1)).unwrap();
        assert_eq!(entry.steps_completed, 2);
        assert_eq!(entry.pomodoro_minutes, 25);
        assert_eq!(entry.roadmaps_worked_on.len(), 2);
    }

    #[test]
    fn test_serializes_as_date_keyed_map() {
        let mut activities = DailyActivities::default();
        activities.record(day(2), 3, 0, "rm-a");

        let value = serde_json::to_value(&activities).unwrap();
        assert_eq!(value["2024-05-02"]["stepsCompleted"], 3);

        let back: DailyActivities = serde_json::from_value(value).unwrap();
        assert_eq!(back, activities);
    }

    #[test]
    fn test_accepts_legacy_array_form() {
        let json = r#"[
            { "date": "2024-05-01", "stepsCompleted": 2, "pomodoroMinutes": 0, "roadmapsWorkedOn": ["a"] },
            { "date": "2024-05-03", "stepsCompleted": 0, "pomodoroMinutes": 50, "roadmapsWorkedOn": ["b"] }
        ]"#;

        let activities: DailyActivities = serde_json::from_str(json).unwrap();
        assert_eq!(activities.len(), 2);
        assert_eq!(activities.get(day(3)).unwrap().pomodoro_minutes, 50);
        let dates: Vec<_> = activities.iter().map(|a| a.date).collect();
        assert_eq!(dates, vec![day(1), day(3)]);
    }

    #[test]
    fn test_record_saturates_counters() {
        let mut activities = DailyActivities::default();
        activities.record(day(1), u32::MAX, u32::MAX / 2 + 1, "rm-a");
        let entry = activities.record(day(1), 1, u32::MAX / 2 + 1, "rm-a");

        assert_eq!(entry.steps_completed, u32::MAX);
        assert_eq!(entry.pomodoro_minutes, u32::MAX);
    }

    #[test]
    fn test_legacy_duplicates_merge_without_overflow() {
        let json = format!(
            r#"[
                {{ "date": "2024-05-01", "stepsCompleted": 1, "pomodoroMinutes": {max}, "roadmapsWorkedOn": ["a"] }},
                {{ "date": "2024-05-01", "stepsCompleted": 2, "pomodoroMinutes": {max}, "roadmapsWorkedOn": ["b"] }}
            ]"#,
            max = u32::MAX
        );

        let activities: DailyActivities = serde_json::from_str(&json).unwrap();
        let entry = activities.get(day(1)).unwrap();
        assert_eq!(activities.len(), 1);
        assert_eq!(entry.steps_completed, 3);
        assert_eq!(entry.pomodoro_minutes, u32::MAX);
        assert_eq!(entry.roadmaps_worked_on.len(), 2);
    }
}
