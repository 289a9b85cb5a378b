use crate::cache::{FileCache, read_json};
use crate::config::Config;
use crate::error::Result;
use crate::http_client::{Fetcher, HttpFetcher};
use crate::model::{BootstrapData, Fixture, Team};

const BOOTSTRAP_FILE: &str = "bootstrap.json";
const FIXTURES_FILE: &str = "fixtures.json";

/// Teams and fixtures, served from the cache directory or fetched into it.
pub struct DataSource {
    cache: FileCache,
    fetcher: Box<dyn Fetcher>,
    bootstrap_url: String,
    fixtures_url: String,
    refresh: bool,
}

impl DataSource {
    pub fn new(config: &Config) -> Result<Self> {
        let fetcher = HttpFetcher::new(config.request_timeout);
        Self::with_fetcher(config, Box::new(fetcher))
    }

    pub fn with_fetcher(config: &Config, fetcher: Box<dyn Fetcher>) -> Result<Self> {
        Ok(Self {
            cache: FileCache::open(&config.cache_dir)?,
            fetcher,
            bootstrap_url: config.bootstrap_url(),
            fixtures_url: config.fixtures_url(),
            refresh: config.refresh,
        })
    }

    pub fn teams(&self) -> Result<Vec<Team>> {
        let path = self.cache.populate(
            self.fetcher.as_ref(),
            &self.bootstrap_url,
            BOOTSTRAP_FILE,
            self.refresh,
        )?;
        let data: BootstrapData = read_json(&path)?;
        Ok(data.teams)
    }

    pub fn fixtures(&self) -> Result<Vec<Fixture>> {
        let path = self.cache.populate(
            self.fetcher.as_ref(),
            &self.fixtures_url,
            FIXTURES_FILE,
            self.refresh,
        )?;
        read_json(&path)
    }
}
