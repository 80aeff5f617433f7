pub mod types;

pub use types::{Activity, ScoreRow, PERSON_COLUMN, WEEK_COLUMN};

use tracing::debug;

use crate::process::{
    utils::{coerce_numeric, non_blank},
    RawTable,
};

/// The sheet as typed rows. Row order is sheet order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreTable {
    pub rows: Vec<ScoreRow>,
}

impl ScoreTable {
    pub fn from_raw(raw: &RawTable) -> Self {
        let rows: Vec<ScoreRow> = raw.rows.iter().map(|r| row_from_cells(r)).collect();
        let unusable = rows.iter().filter(|r| r.week.is_none()).count();
        debug!(rows = rows.len(), without_week = unusable, "typed score table");
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ScoreRow> {
        self.rows.iter()
    }
}

impl From<Vec<ScoreRow>> for ScoreTable {
    fn from(rows: Vec<ScoreRow>) -> Self {
        Self { rows }
    }
}

/// The only place that knows sheet column positions.
pub fn row_from_cells<S: AsRef<str>>(cells: &[S]) -> ScoreRow {
    let cell = |idx: usize| cells.get(idx).map(|c| c.as_ref());
    let number = |idx: usize| cell(idx).and_then(coerce_numeric);

    ScoreRow {
        person: cell(PERSON_COLUMN).and_then(non_blank).map(str::to_string),
        week: number(WEEK_COLUMN),
        selfcare: number(Activity::Selfcare.column()),
        interpersonal: number(Activity::Interpersonal.column()),
        communication: number(Activity::Communication.column()),
        work: number(Activity::Work.column()),
    }
}
