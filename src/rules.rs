//! Per-category validation rules
//!
//! One rule per [`StatementCategory`], each a shallow structural check over
//! the raw document text. Like the classifier, rules use unscoped
//! case-insensitive substring matching rather than a grammar, so they are a
//! smoke test, not a validator of SQL semantics.

use crate::classifier::StatementCategory;
use crate::verdict::Verdict;
use regex::Regex;
use std::sync::LazyLock;

/// Identifier after CREATE PROCEDURE, optionally back-quoted
static PROCEDURE_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)CREATE PROCEDURE\s+`?([^`\s(]+)`?").unwrap());

/// Identifier after CREATE FUNCTION, optionally back-quoted
static FUNCTION_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)CREATE FUNCTION\s+`?([^`\s(]+)`?").unwrap());

/// Identifier after CREATE TABLE, optionally back-quoted
static TABLE_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)CREATE TABLE\s+`?([^`\s(]+)`?").unwrap());

/// Identifier after ALTER TABLE (no parenthesis handling)
static ALTER_TABLE_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)ALTER TABLE\s+`?([^`\s]+)`?").unwrap());

/// Operations a migration script is expected to contain, in report order
const MIGRATION_OPERATIONS: [&str; 6] = ["CREATE", "ALTER", "INSERT", "UPDATE", "DELETE", "DROP"];

/// Keywords accepted by the generic rule, in report order
const SQL_KEYWORDS: [&str; 18] = [
    "SELECT", "INSERT", "UPDATE", "DELETE", "CREATE", "ALTER", "DROP", "FROM", "WHERE", "JOIN",
    "INNER", "LEFT", "RIGHT", "OUTER", "GROUP BY", "ORDER BY", "HAVING", "LIMIT",
];

/// Apply the rule matching the classified category.
pub fn apply(category: StatementCategory, content: &str) -> Verdict {
    match category {
        StatementCategory::ProcedureOrFunction => procedure_or_function(content),
        StatementCategory::TableDdl => table_ddl(content),
        StatementCategory::BasicDml => basic_dml(content),
        StatementCategory::Migration => migration(content),
        StatementCategory::Generic => generic(content),
    }
}

fn capture_identifier(re: &Regex, content: &str) -> Option<String> {
    re.captures(content).map(|caps| caps[1].to_string())
}

/// Stored procedure / function structure check
fn procedure_or_function(content: &str) -> Verdict {
    let upper = content.to_uppercase();

    if upper.contains("CREATE PROCEDURE") {
        let Some(name) = capture_identifier(&PROCEDURE_NAME, content) else {
            return Verdict::fail("Invalid procedure name or structure");
        };
        if !upper.contains("BEGIN") || !upper.contains("END") {
            return Verdict::fail("Procedure missing BEGIN/END block");
        }
        return Verdict::pass(format!("Valid stored procedure: {}", name));
    }

    if upper.contains("CREATE FUNCTION") {
        let Some(name) = capture_identifier(&FUNCTION_NAME, content) else {
            return Verdict::fail("Invalid function name or structure");
        };
        if !upper.contains("RETURNS") {
            return Verdict::fail("Function missing RETURNS clause");
        }
        return Verdict::pass(format!("Valid function: {}", name));
    }

    // Unreachable through normal classification, kept as a guard.
    Verdict::fail("Not a valid procedure or function")
}

/// Table creation / alteration structure check
fn table_ddl(content: &str) -> Verdict {
    let upper = content.to_uppercase();

    if upper.contains("CREATE TABLE") {
        let Some(name) = capture_identifier(&TABLE_NAME, content) else {
            return Verdict::fail("Invalid table name or structure");
        };
        if !content.contains('(') || !content.contains(')') {
            return Verdict::fail("Table missing column definitions");
        }
        return Verdict::pass(format!("Valid table creation: {}", name));
    }

    if upper.contains("ALTER TABLE") {
        let Some(name) = capture_identifier(&ALTER_TABLE_NAME, content) else {
            return Verdict::fail("Invalid ALTER TABLE structure");
        };
        return Verdict::pass(format!("Valid table alteration: {}", name));
    }

    Verdict::fail("Not a valid table script")
}

/// Companion-clause check for plain DML statements.
///
/// Checks run in fixed order (SELECT, INSERT, UPDATE, DELETE); the first
/// keyword whose companion clause is absent fails the whole document.
fn basic_dml(content: &str) -> Verdict {
    let upper = content.to_uppercase();

    if upper.contains("SELECT") && !upper.contains("FROM") && !upper.contains("DUAL") {
        return Verdict::fail("SELECT statement missing FROM clause");
    }

    if upper.contains("INSERT") && !upper.contains("INTO") {
        return Verdict::fail("INSERT statement missing INTO clause");
    }

    if upper.contains("UPDATE") && !upper.contains("SET") {
        return Verdict::fail("UPDATE statement missing SET clause");
    }

    if upper.contains("DELETE") && !upper.contains("FROM") {
        return Verdict::fail("DELETE statement missing FROM clause");
    }

    Verdict::pass("Valid SQL statements")
}

/// Migration scripts must contain at least one SQL operation
fn migration(content: &str) -> Verdict {
    let upper = content.to_uppercase();

    let found: Vec<&str> = MIGRATION_OPERATIONS
        .iter()
        .copied()
        .filter(|kw| upper.contains(kw))
        .collect();

    if found.is_empty() {
        return Verdict::fail("Migration script contains no valid SQL operations");
    }

    Verdict::pass(format!(
        "Valid migration script with operations: {}",
        found.join(", ")
    ))
}

/// Catch-all: any recognized SQL keyword is enough
fn generic(content: &str) -> Verdict {
    let upper = content.to_uppercase();

    let found: Vec<&str> = SQL_KEYWORDS
        .iter()
        .copied()
        .filter(|kw| upper.contains(kw))
        .collect();

    if found.is_empty() {
        return Verdict::fail("No SQL keywords found");
    }

    Verdict::pass(format!(
        "Valid SQL content with keywords: {}",
        found.join(", ")
    ))
}
