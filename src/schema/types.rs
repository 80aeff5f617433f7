// src/schema/types.rs

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::error::UnknownActivity;

/// Sheet column holding the person's name.
pub const PERSON_COLUMN: usize = 3;
/// Sheet column holding the week number.
pub const WEEK_COLUMN: usize = 25;

/// One of the four self-reported weekly scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Activity {
    Selfcare,
    Interpersonal,
    Communication,
    Work,
}

impl Activity {
    pub const ALL: [Activity; 4] = [
        Activity::Selfcare,
        Activity::Interpersonal,
        Activity::Communication,
        Activity::Work,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Activity::Selfcare => "Selfcare",
            Activity::Interpersonal => "Interpersonal",
            Activity::Communication => "Communication",
            Activity::Work => "Work",
        }
    }

    /// Sheet column holding this activity's score.
    pub fn column(&self) -> usize {
        match self {
            Activity::Selfcare => 26,
            Activity::Interpersonal => 27,
            Activity::Communication => 28,
            Activity::Work => 29,
        }
    }
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Activity {
    type Err = UnknownActivity;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Activity::ALL
            .into_iter()
            .find(|a| a.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownActivity(s.to_string()))
    }
}

/// One sheet row, with the columns the dashboard reads pulled out by name.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ScoreRow {
    pub person: Option<String>,
    pub week: Option<f64>,
    pub selfcare: Option<f64>,
    pub interpersonal: Option<f64>,
    pub communication: Option<f64>,
    pub work: Option<f64>,
}

impl ScoreRow {
    pub fn score(&self, activity: Activity) -> Option<f64> {
        match activity {
            Activity::Selfcare => self.selfcare,
            Activity::Interpersonal => self.interpersonal,
            Activity::Communication => self.communication,
            Activity::Work => self.work,
        }
    }

    pub fn is_person(&self, person: &str) -> bool {
        self.person.as_deref() == Some(person)
    }
}
