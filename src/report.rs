//! Aggregation of per-file verdicts into a run summary

use crate::verdict::Verdict;
use colored::Colorize;
use serde::Serialize;

/// Running aggregate of validation outcomes.
///
/// An explicit accumulator threaded through the per-file loop; the invariant
/// `total == passed + failed()` holds by construction of [`record`].
///
/// [`record`]: ValidationSummary::record
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationSummary {
    /// Files validated
    pub total: usize,
    /// Files that passed
    pub passed: usize,
    /// Paths of failing files, in validation order
    pub failed_files: Vec<String>,
}

impl ValidationSummary {
    /// Create an empty summary
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one verdict into the aggregate
    pub fn record(&mut self, path: &str, verdict: &Verdict) {
        self.total += 1;
        if verdict.passed {
            self.passed += 1;
        } else {
            self.failed_files.push(path.to_string());
        }
    }

    /// Number of failing files
    pub fn failed(&self) -> usize {
        self.total - self.passed
    }

    /// True when every validated file passed (vacuously true for zero files)
    pub fn all_passed(&self) -> bool {
        self.failed_files.is_empty()
    }

    /// Process exit code: 0 on success, 1 when any file failed
    pub fn exit_code(&self) -> i32 {
        if self.all_passed() {
            0
        } else {
            1
        }
    }

    /// Render the summary block for terminal output
    pub fn render(&self) -> String {
        let mut out = String::new();

        out.push_str(&"=".repeat(60));
        out.push('\n');
        out.push_str(&format!("{}\n", "VALIDATION SUMMARY".bold()));
        out.push_str(&format!("   Total files: {}\n", self.total));
        out.push_str(&format!("   Passed: {}\n", self.passed));
        out.push_str(&format!("   Failed: {}\n", self.failed()));
        out.push('\n');

        if self.all_passed() {
            out.push_str(&format!(
                "{}\n",
                "All SQL files passed validation".green().bold()
            ));
        } else {
            out.push_str(&format!(
                "{}\n",
                "Some SQL files failed validation:".red().bold()
            ));
            for file in &self.failed_files {
                out.push_str(&format!("   - {}\n", file));
            }
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_summary_passes() {
        let summary = ValidationSummary::new();
        assert!(summary.all_passed());
        assert_eq!(summary.exit_code(), 0);
        assert_eq!(summary.total, 0);
    }

    #[test]
    fn test_counts_add_up() {
        let mut summary = ValidationSummary::new();
        summary.record("a.sql", &Verdict::pass("ok"));
        summary.record("b.sql", &Verdict::fail("bad"));
        summary.record("c.sql", &Verdict::pass("ok"));

        assert_eq!(summary.total, 3);
        assert_eq!(summary.passed, 2);
        assert_eq!(summary.failed(), 1);
        assert_eq!(summary.total, summary.passed + summary.failed());
    }

    #[test]
    fn test_failing_paths_keep_order() {
        let mut summary = ValidationSummary::new();
        summary.record("z.sql", &Verdict::fail("bad"));
        summary.record("m.sql", &Verdict::pass("ok"));
        summary.record("a.sql", &Verdict::fail("bad"));

        assert_eq!(summary.failed_files, vec!["z.sql", "a.sql"]);
        assert_eq!(summary.exit_code(), 1);
    }

    #[test]
    fn test_render_lists_failures() {
        colored::control::set_override(false);

        let mut summary = ValidationSummary::new();
        summary.record("good.sql", &Verdict::pass("ok"));
        summary.record("bad.sql", &Verdict::fail("broken"));

        let rendered = summary.render();
        assert!(rendered.contains("Total files: 2"));
        assert!(rendered.contains("Passed: 1"));
        assert!(rendered.contains("Failed: 1"));
        assert!(rendered.contains("   - bad.sql"));
    }

    #[test]
    fn test_render_success_block() {
        colored::control::set_override(false);

        let mut summary = ValidationSummary::new();
        summary.record("good.sql", &Verdict::pass("ok"));

        let rendered = summary.render();
        assert!(rendered.contains("All SQL files passed validation"));
        assert!(!rendered.contains("failed validation"));
    }
}
