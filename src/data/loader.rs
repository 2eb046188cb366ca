use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::model::{Experiment, ExperimentRecord};

// ---------------------------------------------------------------------------
// File discovery
// ---------------------------------------------------------------------------

const FILE_PREFIX: &str = "experiment_";
const FILE_SUFFIX: &str = ".json";

/// Whether a file name matches `experiment_*.json`.
pub fn is_experiment_file(name: &str) -> bool {
    name.len() >= FILE_PREFIX.len() + FILE_SUFFIX.len()
        && name.starts_with(FILE_PREFIX)
        && name.ends_with(FILE_SUFFIX)
}

/// List experiment files directly inside `dir`, sorted by file name.
///
/// Subdirectories are not searched.
pub fn find_experiment_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("reading directory {}", dir.display()))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("listing {}", dir.display()))?;
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            log::debug!("{}: file name is not UTF-8, skipped", entry.path().display());
            continue;
        };
        if is_experiment_file(name) && entry.path().is_file() {
            files.push(entry.path());
        }
    }
    files.sort();
    Ok(files)
}

// ---------------------------------------------------------------------------
// JSON loading
// ---------------------------------------------------------------------------

/// Expected JSON shape (one object per file, extra keys ignored):
///
/// ```json
/// {
///   "killRate": 0.25,
///   "rescueRate": 0.75,
///   "infectionRatio": [0.25, 0.31, 0.42, ...]
/// }
/// ```
pub fn load_experiment(path: &Path) -> Result<Experiment> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let record: ExperimentRecord = serde_json::from_str(&text)
        .with_context(|| format!("parsing {}", path.display()))?;
    Ok(Experiment {
        path: path.to_path_buf(),
        record,
    })
}

/// Load every experiment file in `dir`. The first bad file aborts the load.
pub fn load_directory(dir: &Path) -> Result<Vec<Experiment>> {
    find_experiment_files(dir)?
        .iter()
        .map(|path| load_experiment(path))
        .collect()
}
