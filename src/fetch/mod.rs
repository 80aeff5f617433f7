// src/fetch/mod.rs

use reqwest::Client;
use tracing::{debug, info, instrument};
use url::Url;

use crate::{
    config::SheetSource,
    error::LoadError,
    process::{parse_headerless_csv, RawTable},
};

/// GET `url` and return the body bytes. Any transport error or non-success status
/// is a `LoadError`; there is no retry.
pub async fn get_bytes(client: &Client, url: &Url) -> Result<Vec<u8>, LoadError> {
    debug!("Fetching CSV from {}", url);
    let http = |source| LoadError::Http {
        url: url.to_string(),
        source,
    };
    let bytes = client
        .get(url.clone())
        .send()
        .await
        .map_err(http)?
        .error_for_status()
        .map_err(http)?
        .bytes()
        .await
        .map_err(http)?;
    Ok(bytes.to_vec())
}

/// Download the sheet export and parse it as a headerless table.
#[instrument(level = "info", skip(client), fields(sheet = %source.sheet_name))]
pub async fn load_sheet(client: &Client, source: &SheetSource) -> Result<RawTable, LoadError> {
    let url = source.export_url()?;
    let body = get_bytes(client, &url).await?;
    let table = parse_headerless_csv(&body)?;
    info!(rows = table.len(), bytes = body.len(), "loaded sheet");
    Ok(table)
}
