//! Show project information.

use std::path::PathBuf;

use shotcalc_core::TimeAddress;

use super::load_project;

pub fn run(path: PathBuf) -> anyhow::Result<()> {
    let project = load_project(&path)?;

    println!("Project: {}", project.name);
    println!("  Framerate: {} fps", project.framerate);
    println!("  Movements: {}", project.movements().join(", "));
    println!(
        "  Rows: {} ({} with address and values)",
        project.data.len(),
        project.valid_rows().count()
    );

    let store = project.to_store()?;
    println!("  Keyframes: {}", store.keyframe_count());
    if let Some((first, last)) = store.span() {
        let first_code = TimeAddress::from_frame_number(store.framerate(), first)?;
        let last_code = TimeAddress::from_frame_number(store.framerate(), last)?;
        println!(
            "  Span: frames {first}..={last} ({first_code} - {last_code}, {} frames)",
            last - first + 1
        );
    }
    Ok(())
}
