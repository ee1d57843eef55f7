//! SQLite output backend (feature `sqlite`).
//!
//! Creates a single `output.db` file in the configured output directory with
//! three tables: `agent_snapshots`, `person_snapshots` and `infection_events`.

use std::path::Path;

use rusqlite::Connection;

use crate::writer::OutputWriter;
use crate::{AgentSnapshotRow, InfectionEventRow, OutputResult, PersonSnapshotRow};

/// Writes simulation output to an SQLite database.
pub struct SqliteWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteWriter {
    /// Open (or create) `output.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let conn = Connection::open(dir.join("output.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS agent_snapshots (
                 agent_id  INTEGER NOT NULL,
                 tick      INTEGER NOT NULL,
                 role      TEXT    NOT NULL,
                 x         REAL    NOT NULL,
                 y         REAL    NOT NULL,
                 vx        REAL    NOT NULL,
                 vy        REAL    NOT NULL,
                 heading   REAL    NOT NULL,
                 alignment REAL    NOT NULL,
                 pinned    INTEGER NOT NULL
             );
             CREATE TABLE IF NOT EXISTS person_snapshots (
                 person_id INTEGER NOT NULL,
                 tick      INTEGER NOT NULL,
                 state     TEXT    NOT NULL,
                 timer     INTEGER NOT NULL,
                 x         REAL    NOT NULL,
                 y         REAL    NOT NULL,
                 pinned    INTEGER NOT NULL
             );
             CREATE TABLE IF NOT EXISTS infection_events (
                 seq       INTEGER PRIMARY KEY AUTOINCREMENT,
                 tick      INTEGER NOT NULL,
                 source_id INTEGER NOT NULL,
                 target_id INTEGER NOT NULL,
                 from_x    REAL    NOT NULL,
                 from_y    REAL    NOT NULL,
                 to_x      REAL    NOT NULL,
                 to_y      REAL    NOT NULL
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl OutputWriter for SqliteWriter {
    fn write_agents(&mut self, rows: &[AgentSnapshotRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO agent_snapshots \
                 (agent_id, tick, role, x, y, vx, vy, heading, alignment, pinned) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.agent_id,
                    row.tick as i64,
                    row.role.as_str(),
                    row.x as f64,
                    row.y as f64,
                    row.vx as f64,
                    row.vy as f64,
                    row.heading as f64,
                    row.alignment as f64,
                    row.pinned as i64,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_people(&mut self, rows: &[PersonSnapshotRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO person_snapshots \
                 (person_id, tick, state, timer, x, y, pinned) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.person_id,
                    row.tick as i64,
                    row.state.as_str(),
                    row.timer,
                    row.x as f64,
                    row.y as f64,
                    row.pinned as i64,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_infection(&mut self, row: &InfectionEventRow) -> OutputResult<()> {
        self.conn.execute(
            "INSERT INTO infection_events \
             (tick, source_id, target_id, from_x, from_y, to_x, to_y) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            rusqlite::params![
                row.tick as i64,
                row.source_id,
                row.target_id,
                row.from_x as f64,
                row.from_y as f64,
                row.to_x as f64,
                row.to_y as f64,
            ],
        )?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn
            .execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
