use crate::domain::model::{Credential, RawInput};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::Path;
use url::Url;

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &Url;
    fn credential(&self) -> Result<&Credential>;
    fn input_path(&self) -> Option<&Path>;
}

/// Where the puzzle input comes from.
#[async_trait]
pub trait InputSource: Send + Sync {
    async fn fetch(&self) -> Result<RawInput>;

    /// Human-readable origin for log lines. Never includes the credential.
    fn describe(&self) -> String;
}
