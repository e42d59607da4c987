//! Writing rendered scenes to disk
//!
//! Output is written to a sibling temporary file and renamed into place, so
//! an interrupted run never leaves a truncated SVG behind. When an SVG and a
//! scene JSON are requested together, both are staged before either is moved
//! into place, and a failure on one removes the other.

use std::fs;
use std::path::{Path, PathBuf};

use crate::algorithm::scene::Scene;
use crate::io::error::{ArtGridError, Result};
use crate::io::svg::render_svg;

/// Render a scene and write it as an SVG file
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The file cannot be written or moved into place
pub fn write_svg(scene: &Scene, output_path: &Path) -> Result<()> {
    write_atomically(output_path, render_svg(scene).as_bytes())?;
    tracing::info!(path = %output_path.display(), "Wrote SVG");
    Ok(())
}

/// Write a scene's records as pretty-printed JSON
///
/// # Errors
///
/// Returns an error if serialization fails or the file cannot be written
pub fn write_scene_json(scene: &Scene, output_path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(scene)?;
    write_atomically(output_path, json.as_bytes())?;
    tracing::info!(path = %output_path.display(), "Wrote scene JSON");
    Ok(())
}

/// Write the SVG and, when a path is given, the scene JSON as one unit
///
/// Both documents are produced in memory and staged before anything is
/// renamed; on failure neither output is left behind.
///
/// # Errors
///
/// Returns an error if serialization fails or either file cannot be written
/// or moved into place
pub fn write_scene_outputs(
    scene: &Scene,
    svg_path: &Path,
    json_path: Option<&Path>,
) -> Result<()> {
    let svg = render_svg(scene);
    let json = json_path
        .map(|_| serde_json::to_string_pretty(scene))
        .transpose()?;

    let staged_svg = StagedFile::stage(svg_path, svg.as_bytes())?;
    let staged_json = match (json_path, &json) {
        (Some(path), Some(json)) => match StagedFile::stage(path, json.as_bytes()) {
            Ok(staged) => Some(staged),
            Err(e) => {
                staged_svg.discard();
                return Err(e);
            }
        },
        _ => None,
    };

    if let Err(e) = staged_svg.commit() {
        if let Some(staged) = staged_json {
            staged.discard();
        }
        return Err(e);
    }
    tracing::info!(path = %svg_path.display(), "Wrote SVG");

    if let (Some(staged), Some(path)) = (staged_json, json_path) {
        if let Err(e) = staged.commit() {
            let _ = fs::remove_file(svg_path);
            return Err(e);
        }
        tracing::info!(path = %path.display(), "Wrote scene JSON");
    }
    Ok(())
}

fn write_atomically(output_path: &Path, contents: &[u8]) -> Result<()> {
    StagedFile::stage(output_path, contents)?.commit()
}

/// Contents written next to their target, waiting to be renamed into place
struct StagedFile {
    temp: PathBuf,
    target: PathBuf,
}

impl StagedFile {
    fn stage(output_path: &Path, contents: &[u8]) -> Result<Self> {
        if let Some(parent) = output_path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
        {
            fs::create_dir_all(parent).map_err(|e| ArtGridError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create output directory",
                source: e,
            })?;
        }

        let temp = temporary_path(output_path);
        if let Err(e) = fs::write(&temp, contents) {
            // Best effort, the write error is what gets reported
            let _ = fs::remove_file(&temp);
            return Err(ArtGridError::FileSystem {
                path: temp,
                operation: "write output",
                source: e,
            });
        }

        Ok(Self {
            temp,
            target: output_path.to_path_buf(),
        })
    }

    fn commit(self) -> Result<()> {
        fs::rename(&self.temp, &self.target).map_err(|e| {
            let _ = fs::remove_file(&self.temp);
            ArtGridError::FileSystem {
                path: self.target,
                operation: "move output into place",
                source: e,
            }
        })
    }

    fn discard(self) {
        let _ = fs::remove_file(&self.temp);
    }
}

fn temporary_path(output_path: &Path) -> PathBuf {
    let mut name = output_path
        .file_name()
        .map(std::ffi::OsStr::to_os_string)
        .unwrap_or_default();
    name.push(".tmp");
    output_path.with_file_name(name)
}
