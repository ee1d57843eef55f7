//! CSV output backend.
//!
//! Creates three files in the configured output directory:
//! - `agent_snapshots.csv`
//! - `person_snapshots.csv`
//! - `infection_events.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{AgentSnapshotRow, InfectionEventRow, OutputResult, PersonSnapshotRow};

pub const AGENT_HEADER: [&str; 10] =
    ["agent_id", "tick", "role", "x", "y", "vx", "vy", "heading", "alignment", "pinned"];
pub const PERSON_HEADER: [&str; 7] = ["person_id", "tick", "state", "timer", "x", "y", "pinned"];
pub const INFECTION_HEADER: [&str; 7] = ["tick", "source_id", "target_id", "from_x", "from_y", "to_x", "to_y"];

/// Writes simulation output to three CSV files.
pub struct CsvWriter {
    agents:     Writer<File>,
    people:     Writer<File>,
    infections: Writer<File>,
    finished:   bool,
}

impl CsvWriter {
    /// Open (or create) the three CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut agents = Writer::from_path(dir.join("agent_snapshots.csv"))?;
        agents.write_record(AGENT_HEADER)?;

        let mut people = Writer::from_path(dir.join("person_snapshots.csv"))?;
        people.write_record(PERSON_HEADER)?;

        let mut infections = Writer::from_path(dir.join("infection_events.csv"))?;
        infections.write_record(INFECTION_HEADER)?;

        Ok(Self {
            agents,
            people,
            infections,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_agents(&mut self, rows: &[AgentSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.agents.write_record(&[
                row.agent_id.to_string(),
                row.tick.to_string(),
                row.role.as_str().to_owned(),
                row.x.to_string(),
                row.y.to_string(),
                row.vx.to_string(),
                row.vy.to_string(),
                row.heading.to_string(),
                row.alignment.to_string(),
                (row.pinned as u8).to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_people(&mut self, rows: &[PersonSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.people.write_record(&[
                row.person_id.to_string(),
                row.tick.to_string(),
                row.state.as_str().to_owned(),
                row.timer.to_string(),
                row.x.to_string(),
                row.y.to_string(),
                (row.pinned as u8).to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_infection(&mut self, row: &InfectionEventRow) -> OutputResult<()> {
        self.infections.write_record(&[
            row.tick.to_string(),
            row.source_id.to_string(),
            row.target_id.to_string(),
            row.from_x.to_string(),
            row.from_y.to_string(),
            row.to_x.to_string(),
            row.to_y.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.agents.flush()?;
        self.people.flush()?;
        self.infections.flush()?;
        Ok(())
    }
}
