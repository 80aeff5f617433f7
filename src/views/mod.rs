// src/views/mod.rs
//
// Everything the dashboard shows, computed from the typed sheet and the
// current selection. Nothing here fails: no data means an empty panel.

pub mod filter;
pub mod rank;
pub mod reshape;

pub use filter::WeekRange;
pub use rank::RankRow;
pub use reshape::LongRow;

use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::schema::{Activity, ScoreTable};

pub const NO_RANKING_DATA: &str = "No data available for the selected week or category.";
pub const NO_CHART_DATA: &str = "No data available for the selected week range.";

/// A view that either has rows or is shown as a placeholder message.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Panel<T> {
    Ready { data: T },
    Empty { message: &'static str },
}

impl<T> Panel<T> {
    pub fn is_empty(&self) -> bool {
        matches!(self, Panel::Empty { .. })
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Panel::Ready { data } => Some(data),
            Panel::Empty { .. } => None,
        }
    }
}

/// What the user picked. `None` fields fall back to the dashboard defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub person: Option<String>,
    pub activities: Vec<Activity>,
    pub week_range: Option<WeekRange>,
    pub week: Option<i64>,
    pub ranked_activity: Activity,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            person: None,
            activities: vec![Activity::Selfcare],
            week_range: None,
            week: None,
            ranked_activity: Activity::Selfcare,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub activity: Activity,
    pub points: Vec<(f64, f64)>,
}

/// Line chart: Week on x, Score on y, one series per activity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chart {
    pub title: String,
    pub series: Vec<Series>,
}

impl Chart {
    /// Group long rows by activity, in first-seen order, dropping incomplete points.
    pub fn from_long_rows(person: &str, rows: &[LongRow]) -> Self {
        let mut series: Vec<Series> = Vec::new();
        for row in rows {
            let idx = match series.iter().position(|s| s.activity == row.activity) {
                Some(i) => i,
                None => {
                    series.push(Series {
                        activity: row.activity,
                        points: Vec::new(),
                    });
                    series.len() - 1
                }
            };
            if let Some(p) = row.point() {
                series[idx].points.push(p);
            }
        }
        Chart {
            title: format!("{}'s Scores Across Selected Weeks and Activities", person),
            series,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub persons: Vec<String>,
    pub person: Option<String>,
    pub activities: Vec<Activity>,
    /// Slider limits for the selected person.
    pub week_bounds: Option<WeekRange>,
    pub week_range: Option<WeekRange>,
    pub week: Option<i64>,
    pub ranked_activity: Activity,
    pub ranking: Panel<Vec<RankRow>>,
    pub long_rows: Vec<LongRow>,
    pub chart: Panel<Chart>,
}

/// Compute every view for one render.
#[instrument(level = "info", skip_all, fields(rows = table.len()))]
pub fn build(table: &ScoreTable, selection: &Selection) -> Dashboard {
    let persons: Vec<String> = filter::person_choices(table.iter())
        .into_iter()
        .map(str::to_string)
        .collect();

    let person = selection
        .person
        .clone()
        .or_else(|| persons.first().cloned());
    if let Some(p) = &person {
        if !persons.contains(p) {
            warn!(person = %p, "selected person not found in sheet");
        }
    }

    let person_rows = match &person {
        Some(p) => filter::by_person(table.iter(), p),
        None => Vec::new(),
    };
    let week_bounds = filter::week_bounds(person_rows.iter().copied());
    debug!(person = ?person, rows = person_rows.len(), bounds = ?week_bounds, "person rows");

    let week_range = week_bounds.map(|b| match selection.week_range {
        Some(r) => b.clamp(r),
        None => b,
    });
    let week = match (week_bounds, selection.week) {
        (Some(b), Some(w)) => Some(b.clamp_week(w)),
        (Some(b), None) => Some(b.lo),
        (None, w) => w,
    };

    // Ranking table: every person, one week.
    let ranking = match week {
        Some(w) => {
            let week_rows = filter::by_week(table.iter(), w);
            let ranked = rank::rank_by_score(&week_rows, selection.ranked_activity);
            if ranked.is_empty() {
                Panel::Empty {
                    message: NO_RANKING_DATA,
                }
            } else {
                Panel::Ready { data: ranked }
            }
        }
        None => Panel::Empty {
            message: NO_RANKING_DATA,
        },
    };

    // Line chart: selected person, week range, selected activities.
    let activities = reshape::dedup_activities(&selection.activities);
    let long_rows = match week_range {
        Some(r) => {
            let in_range = filter::by_week_range(person_rows.iter().copied(), r);
            reshape::long_format(&in_range, &activities)
        }
        None => Vec::new(),
    };
    let chart = match (&person, long_rows.is_empty()) {
        (Some(p), false) => Panel::Ready {
            data: Chart::from_long_rows(p, &long_rows),
        },
        _ => Panel::Empty {
            message: NO_CHART_DATA,
        },
    };

    info!(
        persons = persons.len(),
        ranking_empty = ranking.is_empty(),
        long_rows = long_rows.len(),
        "built dashboard"
    );

    Dashboard {
        persons,
        person,
        activities,
        week_bounds,
        week_range,
        week,
        ranked_activity: selection.ranked_activity,
        ranking,
        long_rows,
        chart,
    }
}
