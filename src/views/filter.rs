// src/views/filter.rs

use serde::Serialize;

use crate::schema::ScoreRow;

/// Inclusive integer week range, `lo..=hi`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WeekRange {
    pub lo: i64,
    pub hi: i64,
}

impl WeekRange {
    pub fn new(lo: i64, hi: i64) -> Self {
        Self { lo, hi }
    }

    pub fn contains(&self, week: f64) -> bool {
        self.lo as f64 <= week && week <= self.hi as f64
    }

    /// Pin a requested range inside `self`, the way a range slider would.
    pub fn clamp(&self, requested: WeekRange) -> WeekRange {
        let lo = requested.lo.clamp(self.lo, self.hi);
        let hi = requested.hi.clamp(self.lo, self.hi);
        WeekRange::new(lo.min(hi), hi.max(lo))
    }

    pub fn clamp_week(&self, week: i64) -> i64 {
        week.clamp(self.lo, self.hi)
    }
}

/// Distinct person values in first-appearance order. Rows without a person are skipped.
pub fn person_choices<'a>(rows: impl IntoIterator<Item = &'a ScoreRow>) -> Vec<&'a str> {
    let mut seen: Vec<&str> = Vec::new();
    for person in rows.into_iter().filter_map(|r| r.person.as_deref()) {
        if !seen.contains(&person) {
            seen.push(person);
        }
    }
    seen
}

pub fn by_person<'a>(
    rows: impl IntoIterator<Item = &'a ScoreRow>,
    person: &str,
) -> Vec<&'a ScoreRow> {
    rows.into_iter().filter(|r| r.is_person(person)).collect()
}

pub fn by_week_range<'a>(
    rows: impl IntoIterator<Item = &'a ScoreRow>,
    range: WeekRange,
) -> Vec<&'a ScoreRow> {
    rows.into_iter()
        .filter(|r| r.week.is_some_and(|w| range.contains(w)))
        .collect()
}

pub fn by_week<'a>(rows: impl IntoIterator<Item = &'a ScoreRow>, week: i64) -> Vec<&'a ScoreRow> {
    rows.into_iter()
        .filter(|r| r.week == Some(week as f64))
        .collect()
}

/// Min/max week over `rows`, each truncated toward zero. `None` when no row has a week.
pub fn week_bounds<'a>(rows: impl IntoIterator<Item = &'a ScoreRow>) -> Option<WeekRange> {
    let (min, max) = rows
        .into_iter()
        .filter_map(|r| r.week)
        .fold(None, |acc: Option<(f64, f64)>, w| match acc {
            None => Some((w, w)),
            Some((lo, hi)) => Some((lo.min(w), hi.max(w))),
        })?;
    Some(WeekRange::new(min.trunc() as i64, max.trunc() as i64))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(person: &str, week: Option<f64>) -> ScoreRow {
        ScoreRow {
            person: Some(person.to_string()),
            week,
            ..ScoreRow::default()
        }
    }

    fn weeks(rows: &[&ScoreRow]) -> Vec<Option<f64>> {
        rows.iter().map(|r| r.week).collect()
    }

    #[test]
    fn by_person_keeps_exact_matches_in_order() {
        let rows = vec![
            row("Alice", Some(1.0)),
            row("Bob", Some(1.0)),
            row("Alice", Some(3.0)),
            row("alice", Some(4.0)),
            ScoreRow::default(),
            row("Alice", Some(2.0)),
        ];
        let picked = by_person(&rows, "Alice");
        assert_eq!(weeks(&picked), vec![Some(1.0), Some(3.0), Some(2.0)]);
        assert!(by_person(&rows, "Zed").is_empty());
    }

    #[test]
    fn week_range_includes_both_ends() {
        let rows: Vec<ScoreRow> = (1..=5).map(|w| row("A", Some(w as f64))).collect();
        let picked = by_week_range(&rows, WeekRange::new(2, 4));
        assert_eq!(weeks(&picked), vec![Some(2.0), Some(3.0), Some(4.0)]);

        let single = by_week_range(&rows, WeekRange::new(5, 5));
        assert_eq!(weeks(&single), vec![Some(5.0)]);
    }

    #[test]
    fn week_range_skips_missing_weeks() {
        let rows = vec![row("A", None), row("A", Some(1.0))];
        assert_eq!(by_week_range(&rows, WeekRange::new(0, 10)).len(), 1);
    }

    #[test]
    fn by_week_is_exact() {
        let rows = vec![
            row("A", Some(2.0)),
            row("B", Some(2.5)),
            row("C", Some(2.0)),
            row("D", None),
        ];
        let picked = by_week(&rows, 2);
        let people: Vec<_> = picked.iter().filter_map(|r| r.person.as_deref()).collect();
        assert_eq!(people, vec!["A", "C"]);
        assert!(by_week(&rows, 7).is_empty());
    }

    #[test]
    fn bounds_truncate_and_ignore_missing() {
        let rows = vec![row("A", Some(1.9)), row("A", None), row("A", Some(6.7))];
        assert_eq!(week_bounds(&rows), Some(WeekRange::new(1, 6)));
        assert_eq!(week_bounds(&[row("A", None)]), None);
        assert_eq!(week_bounds(&Vec::<ScoreRow>::new()), None);
    }

    #[test]
    fn clamp_behaves_like_a_slider() {
        let bounds = WeekRange::new(3, 10);
        assert_eq!(bounds.clamp(WeekRange::new(1, 20)), bounds);
        assert_eq!(bounds.clamp(WeekRange::new(5, 6)), WeekRange::new(5, 6));
        assert_eq!(bounds.clamp(WeekRange::new(8, 4)), WeekRange::new(4, 8));
        assert_eq!(bounds.clamp_week(0), 3);
        assert_eq!(bounds.clamp_week(11), 10);
    }

    #[test]
    fn choices_are_distinct_in_first_seen_order() {
        let rows = vec![
            row("Cy", None),
            row("Ann", None),
            ScoreRow::default(),
            row("Cy", None),
            row("Bob", None),
        ];
        assert_eq!(person_choices(&rows), vec!["Cy", "Ann", "Bob"]);
    }
}
