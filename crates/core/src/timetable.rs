//! Timetable grid placement.
//!
//! Lays schedule entries onto a fixed week view: 7 day columns (Monday
//! first) by 10 hourly rows (08:00 through 17:00). An entry occupies its
//! starting cell plus every following hour of its duration, cut off at the
//! 17:00 row. Placement is last-write-wins per cell; overlapping entries
//! silently replace earlier ones.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Number of day columns in the grid.
pub const DAYS: usize = 7;
/// First hour row (inclusive).
pub const FIRST_HOUR: u32 = 8;
/// Last hour row (inclusive).
pub const LAST_HOUR: u32 = 17;
/// Number of hour rows in the grid.
pub const HOURS: usize = (LAST_HOUR - FIRST_HOUR + 1) as usize;

/// Column labels, in grid order.
pub const DAY_LABELS: [&str; DAYS] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// One timetabled session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEntry {
    pub subject_name: String,
    #[serde(default)]
    pub subject_code: Option<String>,
    #[serde(default)]
    pub lecturer: Option<String>,
    #[serde(default)]
    pub room: Option<String>,
    pub date: NaiveDate,
    /// Hour of day the session starts (24h clock).
    pub start_hour: u32,
    /// Length in whole hours. Zero is treated as one hour.
    pub duration: u32,
}

/// A batch's schedule: a label plus its sessions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    #[serde(default)]
    pub batch: Option<String>,
    pub subjects: Vec<ScheduleEntry>,
}

/// Content of one grid cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum GridCell {
    Empty,
    /// First hour of a session; `span` is the number of rows it occupies.
    Start { entry: ScheduleEntry, span: u32 },
    /// Continuation of the session that starts at `start_hour`.
    Covered {
        #[serde(rename = "startHour")]
        start_hour: u32,
    },
}

/// The placed week view.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimetableGrid {
    pub days: Vec<&'static str>,
    pub hours: Vec<u32>,
    /// Indexed `cells[day][hour - FIRST_HOUR]`.
    pub cells: Vec<Vec<GridCell>>,
}

impl Default for TimetableGrid {
    fn default() -> Self {
        Self {
            days: DAY_LABELS.to_vec(),
            hours: (FIRST_HOUR..=LAST_HOUR).collect(),
            cells: vec![vec![GridCell::Empty; HOURS]; DAYS],
        }
    }
}

impl TimetableGrid {
    /// Cell at `day` (0 = Monday) and clock `hour`, if inside the grid.
    pub fn cell(&self, day: usize, hour: u32) -> Option<&GridCell> {
        if !(FIRST_HOUR..=LAST_HOUR).contains(&hour) {
            return None;
        }
        self.cells
            .get(day)
            .and_then(|col| col.get((hour - FIRST_HOUR) as usize))
    }

    /// Place one entry. Entries starting outside the grid hours are ignored.
    pub fn place(&mut self, entry: &ScheduleEntry) {
        let start = entry.start_hour;
        if !(FIRST_HOUR..=LAST_HOUR).contains(&start) {
            return;
        }

        let day = entry.date.weekday().num_days_from_monday() as usize;
        let end = start.saturating_add(entry.duration.max(1)).min(LAST_HOUR + 1);
        let column = &mut self.cells[day];

        column[(start - FIRST_HOUR) as usize] = GridCell::Start {
            entry: entry.clone(),
            span: end - start,
        };
        for hour in (start + 1)..end {
            column[(hour - FIRST_HOUR) as usize] = GridCell::Covered { start_hour: start };
        }
    }
}

/// Place every entry of every schedule, in order, onto a fresh grid.
pub fn build_grid(schedules: &[Schedule]) -> TimetableGrid {
    let mut grid = TimetableGrid::default();
    for entry in schedules.iter().flat_map(|s| s.subjects.iter()) {
        grid.place(entry);
    }
    grid
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    /// 2025-01-06 is a Monday.
    fn entry(name: &str, day_offset: u32, start_hour: u32, duration: u32) -> ScheduleEntry {
        ScheduleEntry {
            subject_name: name.to_string(),
            subject_code: None,
            lecturer: None,
            room: None,
            date: NaiveDate::from_ymd_opt(2025, 1, 6 + day_offset).unwrap(),
            start_hour,
            duration,
        }
    }

    fn schedule(entries: Vec<ScheduleEntry>) -> Schedule {
        Schedule {
            batch: None,
            subjects: entries,
        }
    }

    #[test]
    fn empty_input_gives_empty_grid() {
        let grid = build_grid(&[]);
        assert_eq!(grid.cells.len(), DAYS);
        assert!(grid.cells.iter().all(|c| c.len() == HOURS));
        assert!(grid
            .cells
            .iter()
            .flatten()
            .all(|c| *c == GridCell::Empty));
        assert_eq!(grid.hours.first(), Some(&8));
        assert_eq!(grid.hours.last(), Some(&17));
    }

    #[test]
    fn entry_marks_start_and_spanned_cells() {
        let grid = build_grid(&[schedule(vec![entry("Networks", 2, 9, 3)])]);

        assert_matches!(grid.cell(2, 9), Some(GridCell::Start { span: 3, entry }) if entry.subject_name == "Networks");
        assert_eq!(grid.cell(2, 10), Some(&GridCell::Covered { start_hour: 9 }));
        assert_eq!(grid.cell(2, 11), Some(&GridCell::Covered { start_hour: 9 }));
        assert_eq!(grid.cell(2, 12), Some(&GridCell::Empty));
        assert_eq!(grid.cell(1, 9), Some(&GridCell::Empty));
    }

    #[test]
    fn span_is_capped_at_last_hour() {
        let grid = build_grid(&[schedule(vec![entry("Evening Lab", 0, 16, 4)])]);

        assert_matches!(grid.cell(0, 16), Some(GridCell::Start { span: 2, .. }));
        assert_eq!(grid.cell(0, 17), Some(&GridCell::Covered { start_hour: 16 }));
        assert_eq!(grid.cell(0, 18), None);
    }

    #[test]
    fn zero_duration_occupies_one_cell() {
        let grid = build_grid(&[schedule(vec![entry("Seminar", 4, 13, 0)])]);
        assert_matches!(grid.cell(4, 13), Some(GridCell::Start { span: 1, .. }));
        assert_eq!(grid.cell(4, 14), Some(&GridCell::Empty));
    }

    #[test]
    fn out_of_hours_entries_are_skipped() {
        let grid = build_grid(&[schedule(vec![
            entry("Early", 0, 7, 2),
            entry("Late", 0, 18, 1),
        ])]);
        assert!(grid
            .cells
            .iter()
            .flatten()
            .all(|c| *c == GridCell::Empty));
    }

    #[test]
    fn later_entries_overwrite_earlier_ones() {
        let grid = build_grid(&[
            schedule(vec![entry("Algorithms", 1, 9, 2)]),
            schedule(vec![entry("Databases", 1, 10, 2)]),
        ]);

        assert_matches!(grid.cell(1, 9), Some(GridCell::Start { entry, .. }) if entry.subject_name == "Algorithms");
        assert_matches!(grid.cell(1, 10), Some(GridCell::Start { entry, span: 2 }) if entry.subject_name == "Databases");
        assert_eq!(grid.cell(1, 11), Some(&GridCell::Covered { start_hour: 10 }));
    }

    #[test]
    fn weekend_dates_land_in_last_columns() {
        let grid = build_grid(&[schedule(vec![
            entry("Sat Class", 5, 8, 1),
            entry("Sun Class", 6, 8, 1),
        ])]);
        assert_matches!(grid.cell(5, 8), Some(GridCell::Start { .. }));
        assert_matches!(grid.cell(6, 8), Some(GridCell::Start { .. }));
    }

    #[test]
    fn cells_serialize_with_kind_tag() {
        let json = serde_json::to_value(GridCell::Covered { start_hour: 9 }).unwrap();
        assert_eq!(json, serde_json::json!({ "kind": "covered", "startHour": 9 }));

        let json = serde_json::to_value(GridCell::Empty).unwrap();
        assert_eq!(json, serde_json::json!({ "kind": "empty" }));
    }
}
