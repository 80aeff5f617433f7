// src/report/mod.rs
//
// Plain terminal rendering of the dashboard. Charts are listed as series, not drawn.

use std::io::{self, Write};

use crate::views::{Dashboard, Panel};

pub fn render_text<W: Write>(dash: &Dashboard, out: &mut W) -> io::Result<()> {
    writeln!(out, "Weekly Scores")?;
    writeln!(out, "{:=<55}", "")?;
    writeln!(out, "Persons: {}", dash.persons.join(", "))?;
    if let Some(p) = &dash.person {
        writeln!(out, "Person:  {}", p)?;
    }
    if let Some(b) = dash.week_bounds {
        writeln!(out, "Weeks:   {}..={}", b.lo, b.hi)?;
    }
    writeln!(out)?;

    match dash.week {
        Some(w) => writeln!(out, "{} scores for week {}", dash.ranked_activity, w)?,
        None => writeln!(out, "{} scores", dash.ranked_activity)?,
    }
    match &dash.ranking {
        Panel::Ready { data } => {
            writeln!(out, "{: <25} {:>10}", "Person", "Score")?;
            writeln!(out, "{:-<36}", "")?;
            for row in data {
                writeln!(out, "{: <25} {:>10}", row.person, fmt_score(row.score))?;
            }
        }
        Panel::Empty { message } => writeln!(out, "warning: {}", message)?,
    }
    writeln!(out)?;

    match &dash.chart {
        Panel::Ready { data } => {
            writeln!(out, "{}", data.title)?;
            if let Some(r) = dash.week_range {
                writeln!(out, "(weeks {}..={})", r.lo, r.hi)?;
            }
            for series in &data.series {
                let points: Vec<String> = series
                    .points
                    .iter()
                    .map(|(w, s)| format!("{}:{}", w, s))
                    .collect();
                writeln!(out, "  {: <15} {}", series.activity, points.join(" "))?;
            }
        }
        Panel::Empty { message } => writeln!(out, "warning: {}", message)?,
    }
    Ok(())
}

pub fn render_json<W: Write>(dash: &Dashboard, out: &mut W) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, dash)?;
    writeln!(out)
}

fn fmt_score(score: Option<f64>) -> String {
    score.map(|s| s.to_string()).unwrap_or_else(|| "-".into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{Activity, ScoreRow, ScoreTable};
    use crate::views::{build, Selection};
    use anyhow::Result;

    fn table() -> ScoreTable {
        let row = |person: &str, week: f64, selfcare: Option<f64>| ScoreRow {
            person: Some(person.into()),
            week: Some(week),
            selfcare,
            ..ScoreRow::default()
        };
        ScoreTable::from(vec![
            row("Alice", 1.0, Some(5.0)),
            row("Bob", 1.0, None),
            row("Alice", 2.0, Some(9.0)),
        ])
    }

    #[test]
    fn text_lists_ranking_and_series() -> Result<()> {
        let dash = build(&table(), &Selection::default());
        let mut buf = Vec::new();
        render_text(&dash, &mut buf)?;
        let text = String::from_utf8(buf)?;

        assert!(text.contains("Selfcare scores for week 1"));
        let alice = text.lines().position(|l| l.starts_with("Alice")).unwrap();
        let bob = text.lines().position(|l| l.starts_with("Bob")).unwrap();
        assert!(alice < bob);
        assert!(text.lines().any(|l| l.starts_with("Bob") && l.ends_with('-')));
        assert!(text.contains("Alice's Scores Across Selected Weeks and Activities"));
        assert!(text.contains("Selfcare        1:5 2:9"));
        Ok(())
    }

    #[test]
    fn text_shows_placeholders() -> Result<()> {
        let selection = Selection {
            activities: vec![],
            week: Some(2),
            ranked_activity: Activity::Work,
            ..Selection::default()
        };
        let dash = build(&table(), &selection);
        let mut buf = Vec::new();
        render_text(&dash, &mut buf)?;
        let text = String::from_utf8(buf)?;
        assert!(text.contains("warning: No data available for the selected week range."));
        assert!(text.contains("Work scores for week 2"));
        Ok(())
    }

    #[test]
    fn json_uses_long_format_column_names() -> Result<()> {
        let dash = build(&table(), &Selection::default());
        let mut buf = Vec::new();
        render_json(&dash, &mut buf)?;
        let value: serde_json::Value = serde_json::from_slice(&buf)?;

        assert_eq!(value["person"], "Alice");
        assert_eq!(value["long_rows"][0]["Week"], 1.0);
        assert_eq!(value["long_rows"][0]["Activity"], "Selfcare");
        assert_eq!(value["ranking"]["status"], "ready");
        assert_eq!(value["ranking"]["data"][1]["Person"], "Bob");
        assert!(value["ranking"]["data"][1]["Score"].is_null());
        assert_eq!(value["chart"]["status"], "ready");
        Ok(())
    }
}
