//! Bake a project into a per-frame table.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use log::{info, Level};
use shotcalc_core::baking::bake_trajectory_observed;
use shotcalc_core::{
    bake_trajectory, export_baked_json, BakedTrajectory, BakingConfig, LogObserver, TimeAddress,
};

use super::load_project;
use crate::OutputFormat;

pub fn run(
    path: PathBuf,
    format: OutputFormat,
    cfg: &BakingConfig,
    preview: bool,
) -> anyhow::Result<()> {
    let project = load_project(&path)?;
    let store = project
        .to_store()
        .with_context(|| format!("project '{}' has invalid keyframes", project.name))?;

    let baked = if preview {
        let mut observer = LogObserver { level: Level::Info };
        bake_trajectory_observed(&store, cfg, &mut observer)
    } else {
        bake_trajectory(&store, cfg)
    }
    .with_context(|| format!("failed to bake project '{}'", project.name))?;

    info!(
        "baked '{}': frames {}..={} ({} movements)",
        project.name,
        baked.start_frame,
        baked.end_frame,
        baked.tracks.len()
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Table => write_table(&mut out, &baked)?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, &export_baked_json(&baked))?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Tab-separated table: frame, time code, one column per movement, plus a
/// `<movement>/f` velocity column per movement when velocities were baked.
pub fn write_table(out: &mut impl Write, baked: &BakedTrajectory) -> anyhow::Result<()> {
    let mut header = vec!["frame".to_string(), "timecode".to_string()];
    header.extend(baked.tracks.iter().map(|t| t.movement.clone()));
    header.extend(
        baked
            .tracks
            .iter()
            .filter(|t| t.velocities.is_some())
            .map(|t| format!("{}/f", t.movement)),
    );
    writeln!(out, "{}", header.join("\t"))?;

    for i in 0..baked.frame_count() {
        let frame = baked.start_frame + i as u64;
        let code = TimeAddress::from_frame_number(baked.framerate, frame)?;
        let mut row = vec![frame.to_string(), code.display_code()];
        row.extend(baked.tracks.iter().map(|t| format!("{:.3}", t.values[i])));
        row.extend(
            baked
                .tracks
                .iter()
                .filter_map(|t| t.velocities.as_ref())
                .map(|v| format!("{:.3}", v[i])),
        );
        writeln!(out, "{}", row.join("\t"))?;
    }
    Ok(())
}
