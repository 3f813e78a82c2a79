use std::fmt;

use serde::{Deserialize, Serialize};

pub const UNKNOWN_SPECIES: &str = "Unknown Species";
pub const UNKNOWN_GENE_ID: &str = "Unknown Gene ID";

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TargetId(String);

impl TargetId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TargetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Orthologue homology response; only the fields the pipeline reads are kept.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HomologyResult {
    #[serde(default)]
    pub data: Vec<HomologyData>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HomologyData {
    #[serde(default)]
    pub homologies: Vec<Homology>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Homology {
    pub target: HomologyTarget,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HomologyTarget {
    pub id: TargetId,
}

impl HomologyResult {
    /// Targets of the first data block, in response order.
    pub fn target_ids(&self) -> Vec<TargetId> {
        self.data
            .first()
            .map(|block| {
                block
                    .homologies
                    .iter()
                    .map(|homology| homology.target.id.clone())
                    .collect()
            })
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpeciesInfo {
    pub name: String,
    pub gene_id: String,
}

impl SpeciesInfo {
    pub fn unknown() -> Self {
        Self {
            name: UNKNOWN_SPECIES.to_string(),
            gene_id: UNKNOWN_GENE_ID.to_string(),
        }
    }

    /// Builds display metadata from the raw `species` and `gene_id` fields of a
    /// lookup response.
    pub fn from_lookup(species: Option<&str>, gene_id: Option<&str>) -> Self {
        Self {
            name: species
                .map(display_species)
                .unwrap_or_else(|| UNKNOWN_SPECIES.to_string()),
            gene_id: gene_id.unwrap_or(UNKNOWN_GENE_ID).to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetadataOutcome {
    Resolved(SpeciesInfo),
    Fallback { info: SpeciesInfo, reason: String },
}

impl MetadataOutcome {
    pub fn info(&self) -> &SpeciesInfo {
        match self {
            MetadataOutcome::Resolved(info) => info,
            MetadataOutcome::Fallback { info, .. } => info,
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, MetadataOutcome::Fallback { .. })
    }

    pub fn into_info(self) -> SpeciesInfo {
        match self {
            MetadataOutcome::Resolved(info) => info,
            MetadataOutcome::Fallback { info, .. } => info,
        }
    }
}

/// Trimmed FASTA text as returned by the sequence endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceRecord(String);

impl SequenceRecord {
    /// Returns `None` when nothing but whitespace was received.
    pub fn from_body(body: &str) -> Option<Self> {
        let trimmed = body.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Every line after the first. The first line is taken to be the header
    /// whatever it contains.
    pub fn body_lines(&self) -> Vec<&str> {
        self.0.split('\n').skip(1).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SequenceOutcome {
    Fetched(SequenceRecord),
    Missing { reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatedRecord {
    pub id: TargetId,
    text: String,
}

impl AnnotatedRecord {
    pub fn new(id: &TargetId, info: &SpeciesInfo, record: &SequenceRecord) -> Self {
        let text = format!(
            "{}\n{}",
            annotated_header(id, info),
            record.body_lines().join("\n")
        );
        Self {
            id: id.clone(),
            text,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn header(&self) -> &str {
        self.text.split('\n').next().unwrap_or_default()
    }
}

pub fn annotated_header(id: &TargetId, info: &SpeciesInfo) -> String {
    format!(">{id} | Species: {} | Gene ID: {}", info.name, info.gene_id)
}

/// `canis_lupus_familiaris` -> `Canis Lupus Familiaris`. Every run of
/// letters starts upper-case and continues lower-case.
pub fn display_species(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut in_word = false;
    for ch in raw.replace('_', " ").chars() {
        if ch.is_alphabetic() {
            if in_word {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(ch);
            in_word = false;
        }
    }
    out
}
