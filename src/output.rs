use std::io::{self, Write};

use serde::Serialize;

use crate::pipeline::{ProgressEvent, ProgressSink, RunSummary};

#[derive(Debug, Clone, Copy)]
pub enum OutputMode {
    Console,
    Json,
}

/// Plain progress lines on stdout.
pub struct ConsoleOutput;

impl ConsoleOutput {
    pub fn format_event(event: &ProgressEvent) -> String {
        match event {
            ProgressEvent::Fetching { species, id } => format!("Fetching {species}: {id}"),
            ProgressEvent::Saved { path, .. } => {
                format!("Saved all orthologue sequences to {path}")
            }
            ProgressEvent::NothingFound => "No orthologue sequences found.".to_string(),
        }
    }
}

impl ProgressSink for ConsoleOutput {
    fn event(&self, event: ProgressEvent) {
        let mut stdout = io::stdout();
        let _ = writeln!(stdout, "{}", Self::format_event(&event));
    }
}

pub struct JsonOutput;

impl JsonOutput {
    pub fn print_summary(summary: &RunSummary) -> io::Result<()> {
        Self::print_json(summary)
    }

    fn print_json<T: Serialize>(value: &T) -> io::Result<()> {
        let json = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
        let mut stdout = io::stdout();
        stdout.write_all(json.as_bytes())?;
        stdout.write_all(b"\n")?;
        Ok(())
    }
}

impl ProgressSink for JsonOutput {
    fn event(&self, _event: ProgressEvent) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TargetId;

    #[test]
    fn console_lines() {
        let line = ConsoleOutput::format_event(&ProgressEvent::Fetching {
            species: "Mus Musculus".to_string(),
            id: TargetId::new("ENSMUSG1"),
        });
        assert_eq!(line, "Fetching Mus Musculus: ENSMUSG1");
        assert_eq!(
            ConsoleOutput::format_event(&ProgressEvent::NothingFound),
            "No orthologue sequences found."
        );
        assert_eq!(
            ConsoleOutput::format_event(&ProgressEvent::Saved {
                path: "MDC1_all_orthologues.fasta".to_string(),
                records: 2,
            }),
            "Saved all orthologue sequences to MDC1_all_orthologues.fasta"
        );
    }
}
