use std::time::Instant;

use serde::Serialize;

use crate::archive;
use crate::config::PipelineConfig;
use crate::domain::{AnnotatedRecord, SequenceOutcome, TargetId};
use crate::ensembl::EnsemblClient;
use crate::error::OrthoError;
use crate::transport::Transport;

#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub species: String,
    pub gene_symbol: String,
    pub homologies: usize,
    pub records: usize,
    pub degraded_metadata: Vec<TargetId>,
    pub missing_sequences: Vec<TargetId>,
    pub output: Option<String>,
    pub elapsed_ms: u64,
    pub finished_at: String,
}

impl RunSummary {
    pub fn written(&self) -> bool {
        self.output.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressEvent {
    Fetching { species: String, id: TargetId },
    Saved { path: String, records: usize },
    NothingFound,
}

pub trait ProgressSink {
    fn event(&self, event: ProgressEvent);
}

pub struct Pipeline<T: Transport> {
    client: EnsemblClient<T>,
    config: PipelineConfig,
}

impl<T: Transport> Pipeline<T> {
    pub fn new(transport: T, config: PipelineConfig) -> Self {
        Self {
            client: EnsemblClient::new(transport, config.base_url.clone()),
            config,
        }
    }

    /// Collects annotated records for every orthologue, in response order.
    /// Only the homology lookup can fail.
    pub fn collect(
        &self,
        sink: &dyn ProgressSink,
    ) -> Result<(Vec<AnnotatedRecord>, RunSummary), OrthoError> {
        let start = Instant::now();
        let homology = self
            .client
            .orthologues(&self.config.species, &self.config.gene_symbol)?;
        let targets = homology.target_ids();

        let mut records = Vec::new();
        let mut degraded_metadata = Vec::new();
        let mut missing_sequences = Vec::new();

        for id in &targets {
            let metadata = self.client.species_info(id);
            if metadata.is_degraded() {
                degraded_metadata.push(id.clone());
            }
            let info = metadata.into_info();

            sink.event(ProgressEvent::Fetching {
                species: info.name.clone(),
                id: id.clone(),
            });

            match self.client.protein_sequence(id) {
                SequenceOutcome::Fetched(sequence) => {
                    records.push(AnnotatedRecord::new(id, &info, &sequence));
                }
                SequenceOutcome::Missing { .. } => missing_sequences.push(id.clone()),
            }
        }

        let summary = RunSummary {
            species: self.config.species.clone(),
            gene_symbol: self.config.gene_symbol.clone(),
            homologies: targets.len(),
            records: records.len(),
            degraded_metadata,
            missing_sequences,
            output: None,
            elapsed_ms: u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX),
            finished_at: chrono::Utc::now().to_rfc3339(),
        };
        Ok((records, summary))
    }

    /// Full run: collect, then write the archive once if anything was found.
    pub fn run(&self, sink: &dyn ProgressSink) -> Result<RunSummary, OrthoError> {
        let (records, mut summary) = self.collect(sink)?;

        if archive::write_archive(&self.config.output, &records)? {
            summary.output = Some(self.config.output.to_string());
            sink.event(ProgressEvent::Saved {
                path: self.config.output.to_string(),
                records: records.len(),
            });
        } else {
            sink.event(ProgressEvent::NothingFound);
        }
        summary.finished_at = chrono::Utc::now().to_rfc3339();
        Ok(summary)
    }
}
