use anyhow::{Context, Result};
use clap::Parser;
use reqwest::Client;
use std::io::{self, Write};
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};
use weekly_scores::{
    fetch, report,
    views::{self, Selection, WeekRange},
    Activity, ScoreTable, SheetSource,
};

/// Weekly self-reported scores: ranking for one week, per-activity trend for one person.
#[derive(Parser, Debug)]
#[command(name = "weekly-scores", version)]
struct Args {
    /// Person whose trend is charted (default: first person in the sheet)
    #[arg(long)]
    person: Option<String>,

    /// Activities to chart, in legend order (default: Selfcare)
    #[arg(long = "activity", value_delimiter = ',')]
    activities: Vec<Activity>,

    /// Week range for the chart, inclusive (default: all of the person's weeks)
    #[arg(long, num_args = 2, value_names = ["FROM", "TO"])]
    weeks: Option<Vec<i64>>,

    /// Week for the ranking table (default: the person's first week)
    #[arg(long)]
    week: Option<i64>,

    /// Activity the ranking table is sorted by
    #[arg(long, default_value = "Selfcare")]
    rank_by: Activity,

    /// Print the dashboard as JSON
    #[arg(long)]
    json: bool,
}

impl Args {
    fn selection(&self) -> Selection {
        let defaults = Selection::default();
        Selection {
            person: self.person.clone(),
            activities: if self.activities.is_empty() {
                defaults.activities
            } else {
                self.activities.clone()
            },
            week_range: self
                .weeks
                .as_deref()
                .and_then(|w| match w {
                    [from, to] => Some(WeekRange::new(*from, *to)),
                    _ => None,
                }),
            week: self.week,
            ranked_activity: self.rank_by,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,weekly_scores=info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    info!(?args, "startup");

    // ─── 2) fetch the sheet ──────────────────────────────────────────
    let client = Client::new();
    let source = SheetSource::default();
    let raw = match fetch::load_sheet(&client, &source).await {
        Ok(raw) => raw,
        Err(e) => {
            error!(error = %e, "load failed");
            return Err(e).context("Error loading data");
        }
    };

    // ─── 3) derive views ─────────────────────────────────────────────
    let table = ScoreTable::from_raw(&raw);
    let dash = views::build(&table, &args.selection());

    // ─── 4) render ───────────────────────────────────────────────────
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if args.json {
        report::render_json(&dash, &mut out).context("writing JSON")?;
    } else {
        report::render_text(&dash, &mut out).context("writing report")?;
    }
    out.flush()?;

    info!("done");
    Ok(())
}
