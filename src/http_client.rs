use std::time::Duration;

use once_cell::unsync::OnceCell;
use reqwest::blocking::Client;
use reqwest::header::USER_AGENT;
use tracing::debug;

use crate::error::{PremError, Result};

const AGENT: &str = concat!("prem/", env!("CARGO_PKG_VERSION"));

/// Source of raw response bodies. The cache layer only ever asks for bytes.
pub trait Fetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>>;
}

/// Blocking HTTP fetcher. The client is only built on the first cache miss.
pub struct HttpFetcher {
    timeout: Duration,
    client: OnceCell<Client>,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> Self {
        Self {
            timeout,
            client: OnceCell::new(),
        }
    }

    fn client(&self, url: &str) -> Result<&Client> {
        self.client.get_or_try_init(|| {
            Client::builder()
                .timeout(self.timeout)
                .build()
                .map_err(|err| PremError::Request {
                    url: url.to_string(),
                    message: format!("failed to build http client: {err}"),
                })
        })
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        debug!(url, "GET");
        let request_err = |err: reqwest::Error| PremError::Request {
            url: url.to_string(),
            message: err.to_string(),
        };
        let resp = self
            .client(url)?
            .get(url)
            .header(USER_AGENT, AGENT)
            .send()
            .map_err(request_err)?;
        let status = resp.status();
        if !status.is_success() {
            return Err(PremError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        let body = resp.bytes().map_err(request_err)?;
        Ok(body.to_vec())
    }
}
