pub mod config;
pub mod error;
pub mod fetch;
pub mod process;
pub mod report;
pub mod schema;
pub mod views;

pub use config::SheetSource;
pub use error::LoadError;
pub use schema::{Activity, ScoreRow, ScoreTable};
pub use views::{build, Dashboard, Panel, Selection};
