//! Batch analysis pipeline
//!
//! Wires the components together for one batch of URLs:
//!
//! ```text
//! validate -> fetch_all -> classify failures -> analyze successes -> render
//! ```
//!
//! Every shared resource (HTTP client, cache, compiled patterns, lexicon) is
//! built once in [`Pipeline::new`] and reused for every batch.

mod report;

pub use report::{
    position_label, AnalysisResponse, ComparisonReport, ReadabilityRow, SentimentRow,
    WordCloudRow, WordFrequencyRow,
};

use crate::analysis::TextAnalyzer;
use crate::classify::{classify_failure, ErrorReport};
use crate::config::Config;
use crate::fetcher::{FetchCache, FetchPool, Fetcher};
use crate::render::WordCloudRenderer;
use crate::url::UrlValidator;
use crate::{LensError, Result};
use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::Duration;

/// End-to-end analyzer for batches of URLs
#[derive(Debug, Clone)]
pub struct Pipeline {
    config: Arc<Config>,
    validator: UrlValidator,
    pool: FetchPool,
    analyzer: TextAnalyzer,
    renderer: Option<WordCloudRenderer>,
    reject_on_fetch_failure: bool,
}

impl Pipeline {
    /// Builds a pipeline with a fresh cache sized from `config`
    pub fn new(config: Config) -> Result<Self> {
        let capacity = NonZeroUsize::new(config.cache.capacity).ok_or_else(|| {
            LensError::Pipeline("cache capacity must be at least 1".to_string())
        })?;
        let cache = Arc::new(FetchCache::new(
            capacity,
            Duration::from_secs(config.cache.ttl_secs),
        ));
        Self::with_cache(config, cache)
    }

    /// Builds a pipeline around an existing cache
    pub fn with_cache(config: Config, cache: Arc<FetchCache>) -> Result<Self> {
        let fetcher = Fetcher::from_config(&config.fetcher, cache)?;
        let pool = FetchPool::new(fetcher, config.fetcher.workers);
        let renderer = config
            .render
            .enabled
            .then(|| WordCloudRenderer::new(config.render.width, config.render.height));

        Ok(Self {
            validator: UrlValidator::new()?,
            analyzer: TextAnalyzer::new(config.analysis.top_words)?,
            reject_on_fetch_failure: config.report.reject_on_fetch_failure,
            renderer,
            pool,
            config: Arc::new(config),
        })
    }

    /// Turns word cloud rendering on or off
    pub fn with_word_clouds(mut self, enabled: bool) -> Self {
        self.renderer = enabled
            .then(|| WordCloudRenderer::new(self.config.render.width, self.config.render.height));
        self
    }

    /// Chooses whether one failed fetch rejects the whole batch
    pub fn with_reject_on_fetch_failure(mut self, reject: bool) -> Self {
        self.reject_on_fetch_failure = reject;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn cache(&self) -> &Arc<FetchCache> {
        self.pool.fetcher().cache()
    }

    /// Analyzes a batch and always produces a response
    ///
    /// Internal faults are logged and reported as [`AnalysisResponse::Internal`].
    pub async fn respond<S: AsRef<str>>(&self, urls: &[S]) -> AnalysisResponse {
        match self.analyze(urls).await {
            Ok(response) => response,
            Err(e) => {
                tracing::error!("Error occurred: {}", e);
                AnalysisResponse::Internal
            }
        }
    }

    /// Analyzes a batch
    ///
    /// # Flow
    ///
    /// 1. Empty batch: [`AnalysisResponse::NoUrls`], nothing fetched
    /// 2. Any invalid URL: [`AnalysisResponse::Rejected`], nothing fetched
    /// 3. Fetch every URL concurrently
    /// 4. Any failed fetch: rejected, unless partial batches are allowed
    /// 5. Analyze and render the successful documents
    ///
    /// Errors are faults in the pipeline itself, never per-URL failures.
    pub async fn analyze<S: AsRef<str>>(&self, urls: &[S]) -> Result<AnalysisResponse> {
        if urls.is_empty() {
            tracing::info!("Rejecting empty batch");
            return Ok(AnalysisResponse::NoUrls);
        }

        let invalid_urls = self.validator.validate_batch(urls);
        if !invalid_urls.is_empty() {
            tracing::info!(
                "Rejecting batch of {} URLs: {} invalid",
                urls.len(),
                invalid_urls.len()
            );
            return Ok(AnalysisResponse::Rejected { invalid_urls });
        }

        let results = self.pool.fetch_all(urls).await;
        if results.len() != urls.len() {
            return Err(LensError::Pipeline(format!(
                "expected {} fetch results, got {}",
                urls.len(),
                results.len()
            )));
        }

        let mut documents = Vec::with_capacity(results.len());
        let mut failed = Vec::new();
        for (index, (url, result)) in urls.iter().zip(results).enumerate() {
            let url = url.as_ref();
            if result.url != url {
                return Err(LensError::Pipeline(format!(
                    "result {} belongs to {}, expected {}",
                    index, result.url, url
                )));
            }
            match result.into_outcome() {
                Ok(text) => documents.push((index, text)),
                Err(e) => failed.push(classify_failure(url, &e)),
            }
        }

        if !failed.is_empty() && self.reject_on_fetch_failure {
            tracing::info!(
                "Rejecting batch of {} URLs: {} could not be fetched",
                urls.len(),
                failed.len()
            );
            return Ok(AnalysisResponse::Rejected {
                invalid_urls: failed,
            });
        }

        let report = self.build_report(&documents, failed);
        tracing::info!(
            "Analyzed {} of {} URLs",
            report.len(),
            urls.len()
        );
        Ok(AnalysisResponse::Completed(report))
    }

    /// Analyzes `(batch index, text)` pairs into a report
    fn build_report(&self, documents: &[(usize, String)], failed: Vec<ErrorReport>) -> ComparisonReport {
        let texts: Vec<&str> = documents.iter().map(|(_, text)| text.as_str()).collect();
        let analyses = self.analyzer.analyze_all(&texts);

        let mut report = ComparisonReport {
            failed_urls: failed,
            ..ComparisonReport::default()
        };
        for ((index, _), analysis) in documents.iter().zip(&analyses) {
            let word_cloud = self
                .renderer
                .as_ref()
                .and_then(|renderer| renderer.render(&analysis.word_count));
            report.push(*index, analysis, word_cloud);
        }
        report
    }
}
