//! Async batch processing module
//!
//! This module compresses many independent buffers or files concurrently.
//! Each call still owns its own dictionary; only the scheduling is shared.

use crate::{CompressionOptions, Encoder, LzwError, Result};
use futures::stream::{self, StreamExt, TryStreamExt};
use std::path::{Path, PathBuf};

/// Concurrent compressor with a configurable concurrency limit
#[derive(Debug, Clone)]
pub struct AsyncBatchCompressor {
    concurrency_limit: usize,
    options: CompressionOptions,
}

impl AsyncBatchCompressor {
    /// Create a batch compressor with one worker per CPU
    pub fn new() -> Self {
        Self {
            concurrency_limit: num_cpus::get(),
            options: CompressionOptions::default(),
        }
    }

    /// Set the concurrency limit
    pub fn with_concurrency(mut self, limit: usize) -> Self {
        self.concurrency_limit = limit.max(1);
        self
    }

    /// Set the per-call compression options
    pub fn with_options(mut self, options: CompressionOptions) -> Self {
        self.options = options;
        self
    }

    /// Concurrency limit in effect
    pub fn concurrency_limit(&self) -> usize {
        self.concurrency_limit
    }

    /// Compress every buffer, returning results in input order
    ///
    /// The first failing buffer aborts the batch with its error.
    pub async fn compress_buffers(&self, buffers: Vec<Vec<u8>>) -> Result<Vec<Vec<u8>>> {
        log::debug!(
            "compressing {} buffers with concurrency {}",
            buffers.len(),
            self.concurrency_limit
        );

        stream::iter(buffers.into_iter().map(|data| self.compress_owned(data)))
            .buffered(self.concurrency_limit)
            .try_collect()
            .await
    }

    /// Read and compress every file, returning results in input order
    pub async fn compress_files<P: AsRef<Path>>(
        &self,
        files: Vec<P>,
    ) -> Result<Vec<(PathBuf, Vec<u8>)>> {
        stream::iter(files.into_iter().map(|path| {
            let path = path.as_ref().to_path_buf();
            async move {
                let data = tokio::fs::read(&path).await?;
                let codes = self.compress_owned(data).await?;
                Ok::<_, LzwError>((path, codes))
            }
        }))
        .buffered(self.concurrency_limit)
        .try_collect()
        .await
    }

    /// Compress a single buffer on the blocking pool
    async fn compress_owned(&self, data: Vec<u8>) -> Result<Vec<u8>> {
        let encoder = Encoder::new(self.options);
        tokio::task::spawn_blocking(move || encoder.encode(&data).map(|e| e.into_codes()))
            .await
            .map_err(|e| LzwError::TaskFailed(e.to_string()))?
    }
}

impl Default for AsyncBatchCompressor {
    fn default() -> Self {
        Self::new()
    }
}

/// Compress data on the blocking pool without blocking the async runtime
pub async fn compress_bytes_async(data: &[u8]) -> Result<Vec<u8>> {
    AsyncBatchCompressor::new()
        .compress_owned(data.to_vec())
        .await
}
