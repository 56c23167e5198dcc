//! Statement classification via ordered keyword precedence

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Dominant statement type of a SQL document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatementCategory {
    /// Stored procedure or function definition
    ProcedureOrFunction,
    /// Table creation or alteration DDL
    TableDdl,
    /// Plain SELECT/INSERT/UPDATE/DELETE statements
    BasicDml,
    /// Migration or deployment script (path heuristic)
    Migration,
    /// Anything else
    Generic,
}

impl fmt::Display for StatementCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatementCategory::ProcedureOrFunction => write!(f, "procedure_or_function"),
            StatementCategory::TableDdl => write!(f, "table_ddl"),
            StatementCategory::BasicDml => write!(f, "basic_dml"),
            StatementCategory::Migration => write!(f, "migration"),
            StatementCategory::Generic => write!(f, "generic"),
        }
    }
}

impl StatementCategory {
    /// Classify document content, first match wins.
    ///
    /// Matching is unscoped substring search over the case-folded text, so a
    /// keyword inside a string literal or comment counts the same as one used
    /// syntactically. The path heuristic applies only when no content keyword
    /// matched an earlier category.
    pub fn classify(content: &str, path: &Path) -> Self {
        let upper = content.to_uppercase();

        if upper.contains("CREATE PROCEDURE") || upper.contains("CREATE FUNCTION") {
            return StatementCategory::ProcedureOrFunction;
        }

        if upper.contains("CREATE TABLE") || upper.contains("ALTER TABLE") {
            return StatementCategory::TableDdl;
        }

        if ["SELECT", "INSERT", "UPDATE", "DELETE"]
            .iter()
            .any(|kw| upper.contains(kw))
        {
            return StatementCategory::BasicDml;
        }

        let path_lower = path.to_string_lossy().to_lowercase();
        if path_lower.contains("migration") || path_lower.contains("script") {
            return StatementCategory::Migration;
        }

        StatementCategory::Generic
    }
}
