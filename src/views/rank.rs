// src/views/rank.rs

use serde::Serialize;
use std::cmp::Ordering;

use crate::schema::{Activity, ScoreRow};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankRow {
    #[serde(rename = "Person")]
    pub person: String,
    #[serde(rename = "Score")]
    pub score: Option<f64>,
}

/// One `(Person, Score)` per row, highest score first.
/// The sort is stable, so equal scores keep their input order; missing scores go last.
pub fn rank_by_score(rows: &[&ScoreRow], activity: Activity) -> Vec<RankRow> {
    let mut ranked: Vec<RankRow> = rows
        .iter()
        .map(|r| RankRow {
            person: r.person.clone().unwrap_or_default(),
            score: r.score(activity),
        })
        .collect();
    ranked.sort_by(|a, b| descending(a.score, b.score));
    ranked
}

fn descending(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => y.total_cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
