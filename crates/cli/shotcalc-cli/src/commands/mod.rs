pub mod bake;
pub mod info;
pub mod timecode;

use std::fs;
use std::path::Path;

use anyhow::Context;
use shotcalc_core::Project;

/// Read and parse a project file.
pub(crate) fn load_project(path: &Path) -> anyhow::Result<Project> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read project {}", path.display()))?;
    Project::from_json(&text).with_context(|| format!("failed to parse project {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_fixture_from_disk() {
        let path = shotcalc_test_fixtures::projects::path("dolly-pan-tilt").expect("fixture path");
        let project = load_project(&path).expect("project loads");
        assert_eq!(project.name, "dolly-pan-tilt");
        assert_eq!(project.framerate, 24);
    }

    #[test]
    fn missing_file_mentions_the_path() {
        let err = load_project(Path::new("/nonexistent/shot.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/shot.json"));
    }
}
