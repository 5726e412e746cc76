pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::{cli::LocalFileSource, CliConfig, Settings};
pub use crate::core::{engine::SimilarityEngine, fetcher::HttpFetcher};
pub use crate::domain::model::{Credential, FrequencyTable, NumberPair, RawInput, Report};
pub use crate::utils::error::{AocError, Result};

use crate::core::fetcher::{puzzle_input_url, PUZZLE_DAY, PUZZLE_YEAR};
use crate::core::ConfigProvider;
use crate::utils::validation::Validate;

/// Runs one fetch → parse → score pass for the given command line.
///
/// In fetch mode the credential is checked before any request is built, so a
/// missing session never reaches the network.
pub async fn run(config: &CliConfig) -> Result<Report> {
    config.validate()?;
    let settings = config.resolve()?;

    if let Some(path) = settings.input_path() {
        tracing::debug!("Using local input file, skipping fetch");
        return SimilarityEngine::new(LocalFileSource::new(path)).run().await;
    }

    let credential = settings.credential()?.clone();
    let endpoint = puzzle_input_url(settings.base_url(), PUZZLE_YEAR, PUZZLE_DAY)?;
    SimilarityEngine::new(HttpFetcher::new(endpoint, credential))
        .run()
        .await
}
