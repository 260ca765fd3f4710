//! Stage dump - writes a stage snapshot as pretty JSON.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::core::StageSnapshot;

pub fn write_stage_json(path: &Path, snapshot: &StageSnapshot) -> Result<()> {
    let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
    let mut out = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut out, snapshot).context("encode stage snapshot")?;
    out.write_all(b"\n")?;
    out.flush()?;
    Ok(())
}

pub fn read_stage_json(path: &Path) -> Result<StageSnapshot> {
    let file = File::open(path).with_context(|| format!("open {}", path.display()))?;
    let snapshot = serde_json::from_reader(std::io::BufReader::new(file))
        .with_context(|| format!("decode {}", path.display()))?;
    Ok(snapshot)
}
