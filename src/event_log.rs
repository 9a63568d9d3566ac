//! JSON-lines log of core events.
//!
//! One object per line:
//!
//! ```text
//! {"t_ms":0,"type":"spawned","column":2,"primary":"red","secondary":"blue"}
//! {"t_ms":2480,"type":"locked","cell":"primary","column":2,"row":11,"color":"red"}
//! {"t_ms":9120,"type":"game_over"}
//! ```

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::types::CoreEvent;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventRecord {
    pub t_ms: u64,
    #[serde(rename = "type")]
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cell: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub row: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary: Option<&'static str>,
}

impl EventRecord {
    fn bare(t_ms: u64, kind: &'static str) -> Self {
        Self {
            t_ms,
            kind,
            cell: None,
            column: None,
            row: None,
            color: None,
            primary: None,
            secondary: None,
        }
    }

    pub fn from_event(t_ms: u64, event: &CoreEvent) -> Self {
        match *event {
            CoreEvent::Locked {
                cell,
                column,
                row,
                color,
            } => Self {
                cell: Some(cell.as_str()),
                column: Some(column),
                row: Some(row),
                color: Some(color.as_str()),
                ..Self::bare(t_ms, "locked")
            },
            CoreEvent::Spawned {
                primary,
                secondary,
                column,
            } => Self {
                column: Some(column),
                primary: Some(primary.as_str()),
                secondary: Some(secondary.as_str()),
                ..Self::bare(t_ms, "spawned")
            },
            CoreEvent::GameOver => Self::bare(t_ms, "game_over"),
        }
    }
}

/// Appends [`EventRecord`]s to a writer, one JSON object per line.
pub struct EventLog<W: Write> {
    out: W,
    buf: Vec<u8>,
    written: u64,
}

impl EventLog<BufWriter<File>> {
    /// Open `path` for appending, creating it if needed.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("opening event log {}", path.display()))?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> EventLog<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            buf: Vec::with_capacity(256),
            written: 0,
        }
    }

    pub fn record(&mut self, t_ms: u64, event: &CoreEvent) -> Result<()> {
        self.buf.clear();
        serde_json::to_writer(&mut self.buf, &EventRecord::from_event(t_ms, event))?;
        self.buf.push(b'\n');
        self.out.write_all(&self.buf)?;
        self.written += 1;
        Ok(())
    }

    pub fn record_all<'a>(
        &mut self,
        t_ms: u64,
        events: impl IntoIterator<Item = &'a CoreEvent>,
    ) -> Result<()> {
        for event in events {
            self.record(t_ms, event)?;
        }
        Ok(())
    }

    /// Number of records written so far
    pub fn written(&self) -> u64 {
        self.written
    }

    pub fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PairCell, PuyoColor};

    #[test]
    fn test_locked_record_fields() {
        let rec = EventRecord::from_event(
            30,
            &CoreEvent::Locked {
                cell: PairCell::Secondary,
                column: 4,
                row: 10,
                color: PuyoColor::Green,
            },
        );
        assert_eq!(rec.kind, "locked");
        assert_eq!(rec.cell, Some("secondary"));
        assert_eq!(rec.row, Some(10));
        assert_eq!(rec.primary, None);
    }

    #[test]
    fn test_game_over_omits_empty_fields() {
        let json = serde_json::to_string(&EventRecord::from_event(5, &CoreEvent::GameOver)).unwrap();
        assert_eq!(json, r#"{"t_ms":5,"type":"game_over"}"#);
    }

    #[test]
    fn test_log_counts_records() {
        let mut log = EventLog::new(Vec::new());
        log.record_all(0, &[CoreEvent::GameOver, CoreEvent::GameOver])
            .unwrap();
        assert_eq!(log.written(), 2);
        assert_eq!(log.into_inner().iter().filter(|&&b| b == b'\n').count(), 2);
    }
}
