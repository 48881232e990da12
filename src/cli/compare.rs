//! Compare command handler.
//!
//! Implements the `compare` subcommand: load both documents, score and
//! diff them, render the report, and map the outcome onto an exit code.

use crate::config::{AppConfig, ComparePaths, Validatable};
use crate::pipeline::{
    build_engine, exit_codes, load_document_with_context, render_result, write_output,
    OutputTarget,
};
use anyhow::{Context, Result};

/// Run the compare command, returning the desired exit code.
///
/// The caller is responsible for calling `std::process::exit()` with the
/// returned code when it is non-zero.
pub fn run_compare(paths: &ComparePaths, config: &AppConfig) -> Result<i32> {
    config
        .validate()
        .context("configuration validation failed")?;

    let quiet = config.behavior.quiet;
    let lines1 = load_document_with_context(&paths.doc1, quiet)?;
    let lines2 = load_document_with_context(&paths.doc2, quiet)?;

    let engine = build_engine(config)?;
    let result = engine.compare_lines(&lines1, &lines2)?;

    if !quiet {
        tracing::info!(
            score = result.score,
            changes = result.summary.total_changes(),
            "comparison finished"
        );
    }

    let rendered = render_result(&config.output, &result)?;
    let target = OutputTarget::from_option(config.output.file.clone());
    write_output(&target, &rendered)?;

    Ok(determine_exit_code(config, result.has_changes()))
}

/// Determine the appropriate exit code from the behavior flags.
const fn determine_exit_code(config: &AppConfig, has_changes: bool) -> i32 {
    if config.behavior.fail_on_diff && has_changes {
        return exit_codes::DIFFERENCES;
    }
    exit_codes::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;

    fn write_doc(dir: &tempfile::TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        write!(file, "{content}").unwrap();
        path
    }

    #[test]
    fn test_run_compare_identical_documents() {
        let dir = tempfile::tempdir().unwrap();
        let paths = ComparePaths {
            doc1: write_doc(&dir, "a.txt", "same content\n"),
            doc2: write_doc(&dir, "b.txt", "same content\n"),
        };
        let mut config = AppConfig::default();
        config.output.file = Some(dir.path().join("report.txt"));
        config.behavior.fail_on_diff = true;

        let code = run_compare(&paths, &config).unwrap();
        assert_eq!(code, exit_codes::SUCCESS);

        let report = std::fs::read_to_string(dir.path().join("report.txt")).unwrap();
        assert!(report.contains("100.00%"));
    }

    #[test]
    fn test_run_compare_fail_on_diff() {
        let dir = tempfile::tempdir().unwrap();
        let paths = ComparePaths {
            doc1: write_doc(&dir, "a.txt", "alpha\n"),
            doc2: write_doc(&dir, "b.txt", "beta\n"),
        };
        let mut config = AppConfig::default();
        config.output.file = Some(dir.path().join("report.txt"));
        config.behavior.fail_on_diff = true;

        let code = run_compare(&paths, &config).unwrap();
        assert_eq!(code, exit_codes::DIFFERENCES);
    }

    #[test]
    fn test_run_compare_invalid_config() {
        let dir = tempfile::tempdir().unwrap();
        let paths = ComparePaths {
            doc1: write_doc(&dir, "a.txt", "x\n"),
            doc2: write_doc(&dir, "b.txt", "y\n"),
        };
        let mut config = AppConfig::default();
        config.output.max_diff_lines = 0;

        assert!(run_compare(&paths, &config).is_err());
    }
}
