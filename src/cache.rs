use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use tracing::info;

use crate::error::{PremError, Result};
use crate::http_client::Fetcher;

/// Flat-file cache of raw response bodies, one file per resource.
pub struct FileCache {
    dir: PathBuf,
}

impl FileCache {
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|source| PremError::CacheDir {
            path: dir.clone(),
            source,
        })?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Makes sure `file_name` holds a body for `url`, hitting the network when the
    /// file is missing or `refresh` is set. Returns the file path.
    pub fn populate(
        &self,
        fetcher: &dyn Fetcher,
        url: &str,
        file_name: &str,
        refresh: bool,
    ) -> Result<PathBuf> {
        let path = self.dir.join(file_name);
        if !refresh && path.exists() {
            info!(path = %path.display(), "{file_name} already exists in cache");
            return Ok(path);
        }

        let body = fetcher.fetch(url)?;
        write_atomic(&path, &body)?;
        info!(path = %path.display(), bytes = body.len(), "{file_name} written to cache");
        Ok(path)
    }
}

/// Reads and decodes a cached file.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = fs::read(path).map_err(|source| PremError::CacheRead {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_slice(&raw).map_err(|source| PremError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

fn write_atomic(path: &Path, body: &[u8]) -> Result<()> {
    let write_err = |source: std::io::Error| PremError::CacheWrite {
        path: path.to_path_buf(),
        source,
    };
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, body).map_err(write_err)?;
    fs::rename(&tmp, path).map_err(|err| {
        let _ = fs::remove_file(&tmp);
        write_err(err)
    })
}
