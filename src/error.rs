use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Everything that can stop a run between reading the cache and printing a report.
#[derive(Error, Debug)]
pub enum PremError {
    #[error("error creating cache directory {}", path.display())]
    CacheDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("no cache directory available (set PREM_CACHE_DIR or HOME)")]
    NoCacheDir,

    #[error("error requesting {url}: {message}")]
    Request { url: String, message: String },

    #[error("http {status} from {url}")]
    HttpStatus { url: String, status: u16 },

    #[error("error writing cache file {}", path.display())]
    CacheWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("error reading cache file {}", path.display())]
    CacheRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("error decoding {}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("fixture {fixture_id} references unknown team {team_id}")]
    UnknownTeam { fixture_id: u32, team_id: u32 },
}

pub type Result<T> = std::result::Result<T, PremError>;
