use crate::core::{parser, scorer, InputSource, Report};
use crate::utils::error::Result;

pub struct SimilarityEngine<S: InputSource> {
    source: S,
}

impl<S: InputSource> SimilarityEngine<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Fetch, parse, score. The first failing stage ends the run.
    pub async fn run(&self) -> Result<Report> {
        tracing::info!("Fetching puzzle input from {}", self.source.describe());
        let raw = self.source.fetch().await?;
        tracing::info!("Fetched {} bytes", raw.len());

        let pairs = parser::parse(&raw)?;
        tracing::info!("Parsed {} pairs", pairs.len());

        let score = scorer::score(pairs.left(), pairs.right());
        tracing::debug!("Computed similarity score {}", score);

        Ok(Report {
            pairs: pairs.len(),
            score,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RawInput;
    use crate::utils::error::AocError;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FakeSource {
        body: std::result::Result<&'static str, u16>,
        calls: AtomicUsize,
    }

    impl FakeSource {
        fn ok(body: &'static str) -> Self {
            Self {
                body: Ok(body),
                calls: AtomicUsize::new(0),
            }
        }

        fn failing(status: u16) -> Self {
            Self {
                body: Err(status),
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl InputSource for FakeSource {
        async fn fetch(&self) -> Result<RawInput> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match self.body {
                Ok(body) => Ok(RawInput::new(body)),
                Err(status) => Err(AocError::FetchError {
                    status,
                    body: String::new(),
                }),
            }
        }

        fn describe(&self) -> String {
            "fake".to_string()
        }
    }

    #[test]
    fn test_run_scores_example() {
        let engine = SimilarityEngine::new(FakeSource::ok("3 4\n4 3\n2 5\n1 3\n3 9\n3 3\n"));
        let report = tokio_test::block_on(engine.run()).unwrap();
        assert_eq!(report, Report { pairs: 6, score: 31 });
        assert_eq!(engine.source.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_run_stops_on_fetch_error() {
        let engine = SimilarityEngine::new(FakeSource::failing(404));
        let err = tokio_test::block_on(engine.run()).unwrap_err();
        assert!(matches!(err, AocError::FetchError { status: 404, .. }));
    }

    #[test]
    fn test_run_stops_on_parse_error() {
        let engine = SimilarityEngine::new(FakeSource::ok("1 2 3\n"));
        let err = tokio_test::block_on(engine.run()).unwrap_err();
        assert!(matches!(err, AocError::MalformedLineError { .. }));
    }

    #[test]
    fn test_run_on_empty_input() {
        let engine = SimilarityEngine::new(FakeSource::ok("\n"));
        let report = tokio_test::block_on(engine.run()).unwrap();
        assert_eq!(report, Report { pairs: 0, score: 0 });
    }
}
