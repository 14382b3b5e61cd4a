/// Folder pass converting every point-cloud file in a source directory.
use crate::converter;
use crate::error::{Error, Result};
use constants::{EXCLUDED_ENTRIES, MATRIX_EXTENSION, MATRIX_STRIDE};
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Totals for one folder conversion pass.
#[derive(Debug, Default, Serialize)]
pub struct FolderStats {
    /// Files converted successfully.
    pub converted_files: usize,
    /// Files skipped because they could not be read or parsed.
    pub skipped_files: usize,
    /// Matrix samples written across all converted files.
    pub samples_written: usize,
}

/// Converts every eligible file in `source` into a matrix dump under
/// `output_dir`, keeping the base name and swapping the extension.
///
/// Unreadable or malformed files are skipped and counted, never fatal for
/// the pass; the count of converted files increments on every success
/// regardless of verbosity.
pub fn convert_folder(source: &Path, output_dir: &Path, verbose: bool) -> Result<FolderStats> {
    if !source.is_dir() {
        return Err(Error::FolderNotFound(source.to_path_buf()));
    }
    fs::create_dir_all(output_dir)?;

    let entries = collect_entries(source)?;

    // Process files with progress tracking.
    let pb = ProgressBar::new(entries.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{bar:40.green/blue}] {pos}/{len} files ({percent}%) {msg}")
            .unwrap()
            .progress_chars("▉▊▋▌▍▎▏ "),
    );
    pb.set_message("Converting files");

    let mut stats = FolderStats::default();
    for path in &entries {
        let save_path = matrix_output_path(output_dir, path);

        match converter::convert_to_matrix_file(path, &save_path, MATRIX_STRIDE) {
            Ok(file_stats) => {
                stats.converted_files += 1;
                stats.samples_written += file_stats.samples;
                if verbose {
                    let name = save_path.file_name().unwrap_or_default().to_string_lossy();
                    eprintln!("file {} created.", name);
                }
            }
            Err(err) => {
                // Skipped files leave no output behind.
                let _ = fs::remove_file(&save_path);
                stats.skipped_files += 1;
                if verbose {
                    eprintln!("skipping {}: {}", path.display(), err);
                }
            }
        }
        pb.inc(1);
    }
    pb.finish_with_message("Files converted");

    if verbose {
        eprintln!("{} files have been converted.", stats.converted_files);
    }

    save_summary(output_dir, &stats)?;
    Ok(stats)
}

/// Regular files in the source directory, minus the excluded entry names.
fn collect_entries(source: &Path) -> Result<Vec<PathBuf>> {
    let mut entries = Vec::new();

    for entry in fs::read_dir(source)? {
        let entry = entry?;
        let name = entry.file_name();
        if EXCLUDED_ENTRIES.contains(&name.to_string_lossy().as_ref()) {
            continue;
        }
        if !entry.path().is_file() {
            continue;
        }
        entries.push(entry.path());
    }

    // Directory order is platform-dependent; sort for stable output.
    entries.sort();
    Ok(entries)
}

/// Output path with the same base name and the matrix extension.
fn matrix_output_path(output_dir: &Path, input: &Path) -> PathBuf {
    let stem = input.file_stem().unwrap_or_default();
    output_dir.join(stem).with_extension(MATRIX_EXTENSION)
}

/// Saves pass totals as JSON next to the converted files.
fn save_summary(output_dir: &Path, stats: &FolderStats) -> Result<()> {
    let summary = serde_json::json!({
        "stride": MATRIX_STRIDE,
        "totals": stats,
    });

    let summary_path = output_dir.join("conversion_summary.json");
    fs::write(&summary_path, serde_json::to_string_pretty(&summary)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_cloud(dir: &Path, name: &str, contents: &str) {
        fs::write(dir.join(name), contents).unwrap();
    }

    #[test]
    fn converts_every_eligible_file() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("clouds");
        let output = dir.path().join("output");
        fs::create_dir(&source).unwrap();
        write_cloud(&source, "a.ply", "end_header\n0 1 0\n");
        write_cloud(&source, "b.ply", "end_header\n0 2 0\n0 3 0\n");

        let stats = convert_folder(&source, &output, false).unwrap();

        assert_eq!(stats.converted_files, 2);
        assert_eq!(stats.skipped_files, 0);
        assert_eq!(stats.samples_written, 3);
        assert_eq!(fs::read_to_string(output.join("a.dat")).unwrap(), "0 0 1\n");
        assert_eq!(
            fs::read_to_string(output.join("b.dat")).unwrap(),
            "0 0 2\n0 1 3\n"
        );
    }

    #[test]
    fn excluded_names_are_never_converted() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("clouds");
        let output = dir.path().join("output");
        fs::create_dir(&source).unwrap();
        write_cloud(&source, "hclassic", "end_header\n0 1 0\n");
        write_cloud(&source, "keep.ply", "end_header\n0 1 0\n");

        let stats = convert_folder(&source, &output, false).unwrap();

        assert_eq!(stats.converted_files, 1);
        assert!(output.join("keep.dat").exists());
        assert!(!output.join("hclassic.dat").exists());
    }

    #[test]
    fn malformed_file_is_skipped_and_leaves_no_output() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("clouds");
        let output = dir.path().join("output");
        fs::create_dir(&source).unwrap();
        write_cloud(&source, "bad.ply", "end_header\nnot a point\n");
        write_cloud(&source, "good.ply", "end_header\n0 1 0\n");

        let stats = convert_folder(&source, &output, false).unwrap();

        assert_eq!(stats.converted_files, 1);
        assert_eq!(stats.skipped_files, 1);
        assert!(!output.join("bad.dat").exists());
    }

    #[test]
    fn missing_source_folder_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        let output = dir.path().join("output");

        let err = convert_folder(&missing, &output, false).unwrap_err();
        assert!(matches!(err, Error::FolderNotFound(_)));
    }

    #[test]
    fn summary_records_pass_totals() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("clouds");
        let output = dir.path().join("output");
        fs::create_dir(&source).unwrap();
        write_cloud(&source, "a.ply", "end_header\n0 1 0\n");

        convert_folder(&source, &output, false).unwrap();

        let summary: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(output.join("conversion_summary.json")).unwrap())
                .unwrap();
        assert_eq!(summary["totals"]["converted_files"], 1);
        assert_eq!(summary["stride"], 104);
    }
}
