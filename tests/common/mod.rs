#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use camino::Utf8PathBuf;

use orthologue_fetch::config::PipelineConfig;
use orthologue_fetch::error::OrthoError;
use orthologue_fetch::pipeline::{ProgressEvent, ProgressSink};
use orthologue_fetch::transport::{HttpResponse, Transport};

pub const BASE: &str = "http://ensembl.test";

pub enum Reply {
    Respond(HttpResponse),
    Fail(String),
}

/// Canned replies keyed by URL; anything unknown is a 404.
#[derive(Default)]
pub struct FakeTransport {
    replies: HashMap<String, Reply>,
    pub calls: Mutex<Vec<(String, String)>>,
}

impl FakeTransport {
    pub fn respond(mut self, url: String, status: u16, body: &str) -> Self {
        self.replies
            .insert(url, Reply::Respond(HttpResponse::new(status, body)));
        self
    }

    pub fn fail(mut self, url: String, message: &str) -> Self {
        self.replies.insert(url, Reply::Fail(message.to_string()));
        self
    }

    pub fn homology(self, body: &str) -> Self {
        self.respond(homology_url("homo_sapiens", "MDC1"), 200, body)
    }

    pub fn lookup(self, id: &str, status: u16, body: &str) -> Self {
        self.respond(lookup_url(id), status, body)
    }

    pub fn sequence(self, id: &str, status: u16, body: &str) -> Self {
        self.respond(sequence_url(id), status, body)
    }

    pub fn urls(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|(url, _)| url.clone())
            .collect()
    }
}

impl Transport for FakeTransport {
    fn get(&self, url: &str, content_type: &'static str) -> Result<HttpResponse, OrthoError> {
        self.calls
            .lock()
            .unwrap()
            .push((url.to_string(), content_type.to_string()));
        match self.replies.get(url) {
            Some(Reply::Respond(response)) => Ok(response.clone()),
            Some(Reply::Fail(message)) => Err(OrthoError::Http(message.clone())),
            None => Ok(HttpResponse::new(404, "not found")),
        }
    }
}

impl Transport for &FakeTransport {
    fn get(&self, url: &str, content_type: &'static str) -> Result<HttpResponse, OrthoError> {
        (*self).get(url, content_type)
    }
}

#[derive(Default)]
pub struct RecordingSink {
    pub events: Mutex<Vec<ProgressEvent>>,
}

impl ProgressSink for RecordingSink {
    fn event(&self, event: ProgressEvent) {
        self.events.lock().unwrap().push(event);
    }
}

pub fn homology_url(species: &str, gene: &str) -> String {
    format!("{BASE}/homology/symbol/{species}/{gene}?content-type=application/json&type=orthologues")
}

pub fn lookup_url(id: &str) -> String {
    format!("{BASE}/lookup/id/{id}?content-type=application/json")
}

pub fn sequence_url(id: &str) -> String {
    format!("{BASE}/sequence/id/{id}?content-type=text/x-fasta;type=protein")
}

pub fn homology_body(ids: &[&str]) -> String {
    let entries = ids
        .iter()
        .map(|id| format!(r#"{{"type":"ortholog_one2one","target":{{"id":"{id}"}}}}"#))
        .collect::<Vec<_>>()
        .join(",");
    format!(r#"{{"data":[{{"id":"ENSG00000137337","homologies":[{entries}]}}]}}"#)
}

pub fn test_config(output: Utf8PathBuf) -> PipelineConfig {
    PipelineConfig {
        base_url: BASE.to_string(),
        output,
        ..PipelineConfig::default()
    }
}

pub fn temp_output(dir: &tempfile::TempDir) -> Utf8PathBuf {
    Utf8PathBuf::from_path_buf(dir.path().join("orthologues.fasta")).unwrap()
}
