//! Catalog loading from a local JSON file or an HTTP(S) endpoint.

use std::path::PathBuf;

use crate::error::LoadError;
use crate::state::types::VehicleRecord;

use super::RecordStore;

/// Where the catalog JSON comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DataSource {
    /// Local file.
    File(PathBuf),
    /// Remote document fetched with a single GET.
    Url(String),
}

impl DataSource {
    /// What: Classify a user-supplied location as a URL or a file path.
    ///
    /// Inputs:
    /// - `raw`: Value from settings or `--data`
    ///
    /// Output:
    /// - `DataSource::Url` for `http://`/`https://` prefixes, otherwise `DataSource::File`.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        let lower = trimmed.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            Self::Url(trimmed.to_string())
        } else {
            Self::File(PathBuf::from(trimmed))
        }
    }
}

impl std::fmt::Display for DataSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::File(p) => write!(f, "{}", p.display()),
            Self::Url(u) => f.write_str(u),
        }
    }
}

/// What: Parse a catalog document into vehicle records.
///
/// # Errors
/// - Returns `LoadError::Parse` when `body` is not a JSON array of records.
pub fn parse_records(body: &str) -> Result<Vec<VehicleRecord>, LoadError> {
    Ok(serde_json::from_str::<Vec<VehicleRecord>>(body)?)
}

/// What: Fetch and deserialize the catalog once at startup.
///
/// Inputs:
/// - `source`: File path or URL of the catalog JSON
///
/// Output:
/// - `Ok(records)` in document order.
///
/// # Errors
/// - `LoadError::Io` when a file cannot be read
/// - `LoadError::Http`/`LoadError::Status` on network failure or non-2xx status
/// - `LoadError::Parse` on malformed JSON
pub async fn load_records(source: &DataSource) -> Result<Vec<VehicleRecord>, LoadError> {
    let body = match source {
        DataSource::File(path) => {
            tokio::fs::read_to_string(path)
                .await
                .map_err(|source| LoadError::Io {
                    path: path.clone(),
                    source,
                })?
        }
        DataSource::Url(url) => {
            let resp = reqwest::get(url).await?;
            let status = resp.status();
            let body = resp.text().await?;
            tracing::info!(
                status = status.as_u16(),
                bytes = body.len(),
                "[Store] Fetched catalog"
            );
            if !status.is_success() {
                let preview: String = body.chars().take(300).collect();
                tracing::warn!(
                    status = status.as_u16(),
                    preview = preview,
                    "[Store] Catalog endpoint returned non-success status"
                );
                return Err(LoadError::Status {
                    url: url.clone(),
                    status: status.as_u16(),
                });
            }
            body
        }
    };
    let records = parse_records(&body)?;
    tracing::info!(source = %source, records = records.len(), "[Store] Catalog loaded");
    Ok(records)
}

/// What: Load the catalog and build the read-only record store.
///
/// # Errors
/// - Any error from [`load_records`], plus `LoadError::DuplicateId`.
pub async fn load_store(source: &DataSource) -> Result<RecordStore, LoadError> {
    let records = load_records(source).await?;
    RecordStore::new(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: URL prefixes are detected case-insensitively; everything else is a path
    fn data_source_parse() {
        assert_eq!(
            DataSource::parse("HTTPS://cars.example/cars.json"),
            DataSource::Url("HTTPS://cars.example/cars.json".into())
        );
        assert_eq!(
            DataSource::parse(" cars.json "),
            DataSource::File(PathBuf::from("cars.json"))
        );
    }

    #[tokio::test]
    /// What: Load a catalog file from disk and build the store
    ///
    /// - Input: Temp file with two records
    /// - Output: Store with both records in order
    async fn load_store_from_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("cars.json");
        std::fs::write(
            &path,
            r#"[{"id":1,"name":"GT3","brand":"Porsche"},{"id":2,"name":"Bentayga","brand":"Bentley","year":"2023"}]"#,
        )
        .expect("write catalog");
        let store = load_store(&DataSource::File(path)).await.expect("load ok");
        let ids: Vec<u32> = store.records().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[tokio::test]
    /// What: Missing files, malformed JSON and duplicate ids surface as `LoadError`
    async fn load_store_errors() {
        let dir = tempfile::tempdir().expect("tempdir");
        let missing = dir.path().join("missing.json");
        assert!(matches!(
            load_store(&DataSource::File(missing)).await,
            Err(LoadError::Io { .. })
        ));

        let bad = dir.path().join("bad.json");
        std::fs::write(&bad, "{not json").expect("write");
        assert!(matches!(
            load_store(&DataSource::File(bad)).await,
            Err(LoadError::Parse(_))
        ));

        let dup = dir.path().join("dup.json");
        std::fs::write(
            &dup,
            r#"[{"id":3,"name":"A","brand":"X"},{"id":3,"name":"B","brand":"X"}]"#,
        )
        .expect("write");
        assert!(matches!(
            load_store(&DataSource::File(dup)).await,
            Err(LoadError::DuplicateId(3))
        ));
    }
}
