//! sqlgate - a structural gate for SQL files changed in CI
//!
//! Inspects the `.sql` files touched by the commit under test and applies
//! lightweight structural checks (non-empty, tokenizable, contains the
//! clauses its apparent statement type requires) before allowing a merge.
//!
//! # Architecture
//!
//! ```text
//! changeset -> filter -> { validator -> classifier -> rules } per file -> report
//! ```
//!
//! Change detection asks git for the files that differ between the current
//! revision and its parent. Each surviving `.sql` path goes through the
//! validator, which classifies the content into one of five statement
//! categories and dispatches to the matching rule. Verdicts are folded into
//! a summary that decides the process exit code.
//!
//! Classification and the rules are keyword sniffing over raw text, not a
//! grammar: a keyword inside a string literal or comment counts the same as
//! one used syntactically. The gate is a fast smoke test, not a SQL parser.

pub mod changeset;
pub mod classifier;
pub mod report;
pub mod rules;
pub mod validator;
pub mod verdict;

// Re-export main types
pub use classifier::StatementCategory;
pub use report::ValidationSummary;
pub use validator::{validate_file, ValidateError};
pub use verdict::Verdict;
