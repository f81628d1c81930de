use crate::error::{CatalogError, Result};
use serde::de::DeserializeOwned;
use std::io::Read;
use std::path::Path;

/// On-disk encodings accepted for catalog files.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CatalogFormat {
    /// A JSON array of records.
    Json,
    /// CSV with a header row naming the record fields.
    Csv,
}

impl CatalogFormat {
    /// Pick the format from a file extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match ext.as_deref() {
            Some("json") => Ok(CatalogFormat::Json),
            Some("csv") => Ok(CatalogFormat::Csv),
            _ => Err(CatalogError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

pub(crate) fn read_json<T: DeserializeOwned>(input: &str) -> Result<Vec<T>> {
    Ok(serde_json::from_str(input)?)
}

pub(crate) fn read_csv<T: DeserializeOwned, R: Read>(reader: R) -> Result<Vec<T>> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut rows = Vec::new();
    for row in rdr.deserialize() {
        rows.push(row?);
    }
    Ok(rows)
}

pub(crate) fn read_path<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    match CatalogFormat::from_path(path)? {
        CatalogFormat::Json => read_json(&std::fs::read_to_string(path)?),
        CatalogFormat::Csv => read_csv(std::fs::File::open(path)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_from_extension() {
        assert_eq!(
            CatalogFormat::from_path(Path::new("materials.JSON")).unwrap(),
            CatalogFormat::Json
        );
        assert_eq!(
            CatalogFormat::from_path(Path::new("/tmp/complexity.csv")).unwrap(),
            CatalogFormat::Csv
        );
        assert!(CatalogFormat::from_path(Path::new("materials.xlsx")).is_err());
        assert!(CatalogFormat::from_path(Path::new("materials")).is_err());
    }
}
