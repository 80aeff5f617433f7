// src/config.rs

use serde::{Deserialize, Serialize};
use url::Url;

/// Spreadsheet the dashboard reads from.
pub const DEFAULT_SHEET_ID: &str = "1mCdsuttyAkd3tEgsAz_EDMuJVW2T4rli8kNNb3ZLnrI";
pub const DEFAULT_SHEET_NAME: &str = "Sheet1";
pub const DEFAULT_BASE_URL: &str = "https://docs.google.com/spreadsheets/d";

/// Where the score sheet lives. `Default` is the fixed production sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SheetSource {
    pub base_url: String,
    pub sheet_id: String,
    pub sheet_name: String,
}

impl Default for SheetSource {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            sheet_id: DEFAULT_SHEET_ID.to_string(),
            sheet_name: DEFAULT_SHEET_NAME.to_string(),
        }
    }
}

impl SheetSource {
    /// `<base>/<id>/gviz/tq?tqx=out:csv&sheet=<name>`
    pub fn export_url(&self) -> Result<Url, url::ParseError> {
        let base = self.base_url.trim_end_matches('/');
        let mut url = Url::parse(&format!("{}/{}/gviz/tq", base, self.sheet_id))?;
        url.query_pairs_mut()
            .append_pair("tqx", "out:csv")
            .append_pair("sheet", &self.sheet_name);
        Ok(url)
    }
}
