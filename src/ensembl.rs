use serde::Deserialize;
use tracing::{debug, warn};

use crate::domain::{
    HomologyResult, MetadataOutcome, SequenceOutcome, SequenceRecord, SpeciesInfo, TargetId,
};
use crate::error::OrthoError;
use crate::transport::Transport;

const JSON: &str = "application/json";
const PROTEIN_FASTA: &str = "text/x-fasta;type=protein";

#[derive(Debug, Deserialize)]
struct LookupResponse {
    #[serde(default)]
    species: Option<String>,
    #[serde(default)]
    gene_id: Option<String>,
}

pub struct EnsemblClient<T: Transport> {
    transport: T,
    base_url: String,
}

impl<T: Transport> EnsemblClient<T> {
    pub fn new(transport: T, base_url: impl Into<String>) -> Self {
        Self {
            transport,
            base_url: base_url.into(),
        }
    }

    pub fn homology_url(&self, species: &str, gene_symbol: &str) -> String {
        format!(
            "{}/homology/symbol/{species}/{gene_symbol}?content-type={JSON}&type=orthologues",
            self.base_url
        )
    }

    pub fn lookup_url(&self, id: &TargetId) -> String {
        format!("{}/lookup/id/{id}?content-type={JSON}", self.base_url)
    }

    pub fn sequence_url(&self, id: &TargetId) -> String {
        format!("{}/sequence/id/{id}?content-type={PROTEIN_FASTA}", self.base_url)
    }

    /// Orthologues of `gene_symbol` in `species`. Any failure here is fatal to
    /// the run.
    pub fn orthologues(
        &self,
        species: &str,
        gene_symbol: &str,
    ) -> Result<HomologyResult, OrthoError> {
        let url = self.homology_url(species, gene_symbol);
        debug!(%url, "homology request");
        let response = self.transport.get(&url, JSON)?;
        if !response.is_success() {
            return Err(OrthoError::LookupStatus {
                status: response.status,
                message: response.body,
            });
        }
        serde_json::from_str(&response.body)
            .map_err(|err| OrthoError::MalformedResponse(format!("homology response: {err}")))
    }

    /// Species and gene id for `id`; falls back to the unknown sentinels
    /// instead of failing.
    pub fn species_info(&self, id: &TargetId) -> MetadataOutcome {
        let url = self.lookup_url(id);
        debug!(%url, "lookup request");
        let reason = match self.transport.get(&url, JSON) {
            Ok(response) if response.is_success() => {
                match serde_json::from_str::<LookupResponse>(&response.body) {
                    Ok(lookup) => {
                        return MetadataOutcome::Resolved(SpeciesInfo::from_lookup(
                            lookup.species.as_deref(),
                            lookup.gene_id.as_deref(),
                        ));
                    }
                    Err(err) => format!("unreadable lookup response: {err}"),
                }
            }
            Ok(response) => format!("status {}", response.status),
            Err(err) => err.to_string(),
        };
        warn!(id = %id, %reason, "could not fetch species");
        MetadataOutcome::Fallback {
            info: SpeciesInfo::unknown(),
            reason,
        }
    }

    pub fn protein_sequence(&self, id: &TargetId) -> SequenceOutcome {
        let url = self.sequence_url(id);
        debug!(%url, "sequence request");
        let reason = match self.transport.get(&url, PROTEIN_FASTA) {
            Ok(response) if response.is_success() => {
                match SequenceRecord::from_body(&response.body) {
                    Some(record) => return SequenceOutcome::Fetched(record),
                    None => "empty body".to_string(),
                }
            }
            Ok(response) => format!("status {}", response.status),
            Err(err) => err.to_string(),
        };
        debug!(id = %id, %reason, "sequence unavailable");
        SequenceOutcome::Missing { reason }
    }
}
