//! `.pak` archive packing via an external packer
//!
//! LocForge does not write pak bytes itself. It enumerates a directory
//! tree and drives a `u4pak`-style tool:
//!
//! ```text
//! <packer> pack [--mount-point <mp>] <archive> <files...>
//! ```
//!
//! with the file list relative to the input directory, which is also the
//! working directory of the packer process. Packer failures are surfaced
//! verbatim; nothing here interprets archive bytes.

use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::Command;

use walkdir::WalkDir;

use crate::error::{Error, Result};
use crate::utils::normalize_path;

/// Packer executable used when none is configured.
pub const DEFAULT_PACKER: &str = "u4pak";

/// Options for one packing run.
#[derive(Debug, Clone, Default)]
pub struct PackOptions {
    /// Packer executable to invoke. Defaults to [`DEFAULT_PACKER`] on PATH.
    pub packer: Option<PathBuf>,
    /// Mount point forwarded to the packer, when set.
    pub mount_point: Option<String>,
}

/// Collect all files under `input_dir` as forward-slashed paths relative
/// to it, in deterministic traversal order.
pub fn collect_relative_files<P: AsRef<Path>>(input_dir: P) -> Result<Vec<String>> {
    let base = input_dir.as_ref();
    let mut files = Vec::new();

    for entry in WalkDir::new(base).sort_by_file_name() {
        let entry = entry?;
        if entry.file_type().is_file() {
            let relative = entry
                .path()
                .strip_prefix(base)
                .map_err(|e| Error::InvalidPath(e.to_string()))?;
            files.push(normalize_path(relative));
        }
    }
    Ok(files)
}

/// Build the packer argument list.
pub fn packer_arguments(
    output_pak: &Path,
    mount_point: Option<&str>,
    files: &[String],
) -> Vec<OsString> {
    let mut arguments: Vec<OsString> = vec!["pack".into()];
    if let Some(mount_point) = mount_point {
        arguments.push("--mount-point".into());
        arguments.push(mount_point.into());
    }
    arguments.push(output_pak.as_os_str().to_owned());
    arguments.extend(files.iter().map(OsString::from));
    arguments
}

/// Pack a directory tree into a pak archive with the external packer.
///
/// # Errors
///
/// Returns [`Error::InvalidPath`] if `input_dir` is not a directory,
/// [`Error::PackerNotFound`] if the packer executable cannot be started,
/// and [`Error::PackerFailed`] with the tool's stderr if it exits
/// non-zero.
///
/// [`Error::InvalidPath`]: crate::Error::InvalidPath
/// [`Error::PackerNotFound`]: crate::Error::PackerNotFound
/// [`Error::PackerFailed`]: crate::Error::PackerFailed
pub fn pack_directory<P: AsRef<Path>, Q: AsRef<Path>>(
    input_dir: P,
    output_pak: Q,
    options: &PackOptions,
) -> Result<()> {
    let input_dir = input_dir.as_ref();
    let output_pak = output_pak.as_ref();

    if !input_dir.is_dir() {
        return Err(Error::InvalidPath(format!(
            "input directory not found: {}",
            input_dir.display()
        )));
    }

    if let Some(parent) = output_pak.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let files = collect_relative_files(input_dir)?;
    tracing::info!("packing {} files from {:?}", files.len(), input_dir);

    // The packer runs inside the input directory, so the archive path has
    // to stay valid from there
    let output_pak = if output_pak.is_absolute() {
        output_pak.to_path_buf()
    } else {
        std::env::current_dir()?.join(output_pak)
    };

    let packer = options
        .packer
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_PACKER));

    let output = Command::new(&packer)
        .args(packer_arguments(
            &output_pak,
            options.mount_point.as_deref(),
            &files,
        ))
        .current_dir(input_dir)
        .output()
        .map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                Error::PackerNotFound(packer.clone())
            } else {
                Error::Io(e)
            }
        })?;

    if !output.status.success() {
        return Err(Error::PackerFailed {
            status: output.status.to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        });
    }

    tracing::info!("pak created: {:?}", output_pak);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_relative_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("Content/Localization")).unwrap();
        std::fs::write(dir.path().join("Content/Localization/Game.locres"), b"x").unwrap();
        std::fs::write(dir.path().join("Content/readme.txt"), b"x").unwrap();

        let files = collect_relative_files(dir.path()).unwrap();
        assert_eq!(
            files,
            vec![
                "Content/Localization/Game.locres".to_string(),
                "Content/readme.txt".to_string(),
            ]
        );
    }

    #[test]
    fn test_packer_arguments_include_mount_point() {
        let files = vec!["a.txt".to_string(), "b/c.txt".to_string()];
        let arguments = packer_arguments(Path::new("out/Game.pak"), Some("VotV/Content"), &files);
        let arguments: Vec<String> = arguments
            .iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect();
        assert_eq!(
            arguments,
            vec![
                "pack",
                "--mount-point",
                "VotV/Content",
                "out/Game.pak",
                "a.txt",
                "b/c.txt"
            ]
        );
    }

    #[test]
    fn test_packer_arguments_without_mount_point() {
        let arguments = packer_arguments(Path::new("Game.pak"), None, &[]);
        assert_eq!(arguments, vec!["pack", "Game.pak"]);
    }

    #[test]
    fn test_missing_input_directory_fails() {
        let result = pack_directory(
            "definitely/not/here",
            "out.pak",
            &PackOptions::default(),
        );
        assert!(matches!(result, Err(Error::InvalidPath(_))));
    }
}
