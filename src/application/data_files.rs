//! JSON documents served straight from a data directory.

use std::{io, path::PathBuf};

use serde_json::Value;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataFile {
    Names,
    Fizz,
    Buzz,
}

impl DataFile {
    pub fn file_name(self) -> &'static str {
        match self {
            DataFile::Names => "names.json",
            DataFile::Fizz => "fizz.json",
            DataFile::Buzz => "buzz.json",
        }
    }
}

#[derive(Debug, Error)]
pub enum DataFileError {
    #[error("file `{0}` not found")]
    NotFound(&'static str),
    #[error("failed to read `{file}`: {source}")]
    Io {
        file: &'static str,
        #[source]
        source: io::Error,
    },
    #[error("`{file}` is not valid JSON: {source}")]
    Malformed {
        file: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone)]
pub struct DataFileService {
    directory: PathBuf,
}

impl DataFileService {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    pub async fn load(&self, file: DataFile) -> Result<Value, DataFileError> {
        let name = file.file_name();
        let path = self.directory.join(name);
        debug!(
            target = "hellohub::data_files",
            path = %path.display(),
            "reading data file"
        );

        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Err(DataFileError::NotFound(name));
            }
            Err(source) => return Err(DataFileError::Io { file: name, source }),
        };

        serde_json::from_slice(&bytes)
            .map_err(|source| DataFileError::Malformed { file: name, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn loads_json_document() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(dir.path().join("names.json"), r#"["Ada", "Grace"]"#).expect("write");

        let service = DataFileService::new(dir.path());
        let value = service.load(DataFile::Names).await.expect("load names");
        assert_eq!(value, json!(["Ada", "Grace"]));
    }

    #[tokio::test]
    async fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().expect("tempdir");
        let service = DataFileService::new(dir.path());
        let err = service.load(DataFile::Fizz).await.expect_err("missing");
        assert!(matches!(err, DataFileError::NotFound("fizz.json")));
    }

    #[tokio::test]
    async fn buzz_reads_its_own_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(dir.path().join("fizz.json"), "[1]").expect("write");
        let service = DataFileService::new(dir.path());
        let err = service.load(DataFile::Buzz).await.expect_err("buzz.json absent");
        assert!(matches!(err, DataFileError::NotFound("buzz.json")));
    }

    #[tokio::test]
    async fn malformed_json_is_reported() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(dir.path().join("buzz.json"), "{not json").expect("write");
        let service = DataFileService::new(dir.path());
        let err = service.load(DataFile::Buzz).await.expect_err("malformed");
        assert!(matches!(
            err,
            DataFileError::Malformed {
                file: "buzz.json",
                ..
            }
        ));
    }
}
