//! Docket sources.
//!
//! The notifier only needs docket metadata, so the source is a small trait.
//! `JsonDocketSource` reads records saved from the CourtListener API as
//! `<dir>/<docket id>.json`.

use super::Docket;
use crate::error::{DocketPostError, Result};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

/// Provides docket metadata by CourtListener id.
pub trait DocketSource {
    fn docket(&self, id: u64) -> Result<Docket>;
}

/// Reads dockets from JSON files in a directory.
#[derive(Debug, Clone)]
pub struct JsonDocketSource {
    dir: PathBuf,
}

impl JsonDocketSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, id: u64) -> PathBuf {
        self.dir.join(format!("{}.json", id))
    }
}

impl DocketSource for JsonDocketSource {
    fn docket(&self, id: u64) -> Result<Docket> {
        let docket: Docket = read_json_file(self.path_for(id))?;
        if docket.id != id {
            return Err(DocketPostError::UserError(format!(
                "docket file '{}' contains docket {}, expected {}",
                self.path_for(id).display(),
                docket.id,
                id
            )));
        }
        Ok(docket)
    }
}

/// Read and deserialize a JSON file.
pub fn read_json_file<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> Result<T> {
    let path = path.as_ref();

    let content = std::fs::read_to_string(path).map_err(|e| {
        DocketPostError::UserError(format!("failed to read '{}': {}", path.display(), e))
    })?;

    serde_json::from_str(&content).map_err(|e| {
        DocketPostError::UserError(format!("failed to parse '{}': {}", path.display(), e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{sample_docket, write_json};
    use tempfile::TempDir;

    #[test]
    fn reads_docket_by_id() {
        let temp_dir = TempDir::new().unwrap();
        let docket = sample_docket();
        write_json(&temp_dir.path().join(format!("{}.json", docket.id)), &docket);

        let source = JsonDocketSource::new(temp_dir.path());

        assert_eq!(source.docket(docket.id).unwrap(), docket);
    }

    #[test]
    fn missing_file_is_user_error() {
        let temp_dir = TempDir::new().unwrap();
        let source = JsonDocketSource::new(temp_dir.path());

        let err = source.docket(7).unwrap_err();

        assert!(matches!(err, DocketPostError::UserError(_)));
        assert!(err.to_string().contains("7.json"));
    }

    #[test]
    fn mismatched_id_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        write_json(&temp_dir.path().join("1.json"), &sample_docket());

        let err = JsonDocketSource::new(temp_dir.path()).docket(1).unwrap_err();

        assert!(err.to_string().contains("expected 1"));
    }

    #[test]
    fn malformed_json_is_user_error() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("5.json"), "{not json").unwrap();

        let err = JsonDocketSource::new(temp_dir.path()).docket(5).unwrap_err();

        assert!(err.to_string().contains("failed to parse"));
    }
}
