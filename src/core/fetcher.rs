use crate::core::{Credential, InputSource, RawInput};
use crate::utils::error::{AocError, Result};
use reqwest::header::COOKIE;
use reqwest::Client;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://adventofcode.com";
pub const PUZZLE_YEAR: u16 = 2024;
pub const PUZZLE_DAY: u8 = 1;

/// Builds `<base>/<year>/day/<day>/input`, keeping any path prefix on `base`.
pub fn puzzle_input_url(base: &Url, year: u16, day: u8) -> Result<Url> {
    let mut base = base.clone();
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    Ok(base.join(&format!("{}/day/{}/input", year, day))?)
}

/// Single authenticated GET against the puzzle service.
pub struct HttpFetcher {
    client: Client,
    endpoint: Url,
    credential: Credential,
}

impl HttpFetcher {
    pub fn new(endpoint: Url, credential: Credential) -> Self {
        Self {
            client: Client::new(),
            endpoint,
            credential,
        }
    }
}

#[async_trait::async_trait]
impl InputSource for HttpFetcher {
    async fn fetch(&self) -> Result<RawInput> {
        tracing::debug!("Making API request to: {}", self.endpoint);
        let response = self
            .client
            .get(self.endpoint.clone())
            .header(COOKIE, format!("session={}", self.credential.expose()))
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if !status.is_success() {
            // Best effort only; a failed body read must not mask the status.
            let body = response.text().await.unwrap_or_default();
            return Err(AocError::FetchError {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.bytes().await?;
        tracing::debug!("Received {} bytes", body.len());
        Ok(RawInput::new(body.to_vec()))
    }

    fn describe(&self) -> String {
        self.endpoint.to_string()
    }
}
