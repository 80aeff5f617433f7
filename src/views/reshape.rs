// src/views/reshape.rs

use serde::Serialize;

use crate::schema::{Activity, ScoreRow};

/// One (Week, Score, Activity) triple of the long-format table.
/// Missing values stay missing here; the chart decides what to drop.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LongRow {
    #[serde(rename = "Week")]
    pub week: Option<f64>,
    #[serde(rename = "Score")]
    pub score: Option<f64>,
    #[serde(rename = "Activity")]
    pub activity: Activity,
}

impl LongRow {
    /// `(week, score)` when both are present.
    pub fn point(&self) -> Option<(f64, f64)> {
        Some((self.week?, self.score?))
    }
}

/// Stack one block per activity, in the order given. Each block has one
/// row per input row, in input order.
pub fn long_format(rows: &[&ScoreRow], activities: &[Activity]) -> Vec<LongRow> {
    let mut out = Vec::with_capacity(rows.len() * activities.len());
    for &activity in activities {
        out.extend(rows.iter().map(|r| LongRow {
            week: r.week,
            score: r.score(activity),
            activity,
        }));
    }
    out
}

/// Drop repeated activities, keeping the first occurrence.
pub fn dedup_activities(activities: &[Activity]) -> Vec<Activity> {
    let mut out: Vec<Activity> = Vec::with_capacity(activities.len());
    for a in activities {
        if !out.contains(a) {
            out.push(*a);
        }
    }
    out
}
