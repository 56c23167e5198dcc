//! sqlgate CLI - validates SQL files changed in the last commit

use clap::Parser;
use colored::Colorize;
use sqlgate::changeset;
use sqlgate::report::ValidationSummary;
use sqlgate::validator;
use std::path::Path;

#[derive(Parser)]
#[command(
    name = "sqlgate",
    version,
    about = "SQL change-set gate",
    long_about = "Runs lightweight structural checks on every .sql file changed between \
                  HEAD~1 and HEAD and fails the build when any check fails. Takes no \
                  flags; behavior is fixed so CI pipelines get identical runs everywhere."
)]
struct Cli {}

fn main() {
    // Initialize logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let _cli = Cli::parse();

    let code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            1
        }
    };
    std::process::exit(code);
}

fn run() -> anyhow::Result<i32> {
    println!("{}", "SQL change-set validation".bold());
    println!("{}", "=".repeat(60));

    let changed = changeset::changed_files();
    if changed.is_empty() {
        println!("No changed files found");
        return Ok(0);
    }

    let sql = changeset::sql_files(&changed);
    if sql.is_empty() {
        println!("No SQL files changed");
        return Ok(0);
    }

    println!("Found {} SQL file(s) to validate:", sql.len());
    for file in &sql {
        println!("   - {}", file);
    }
    println!();

    let mut summary = ValidationSummary::new();
    for file in &sql {
        println!("Validating: {}", file);
        let verdict = validator::validate_file(Path::new(file));
        if verdict.passed {
            println!("   {} {}", "ok".green().bold(), verdict.message);
        } else {
            println!("   {} {}", "FAILED".red().bold(), verdict.message);
        }
        summary.record(file, &verdict);
        println!();
    }

    print!("{}", summary.render());
    Ok(summary.exit_code())
}
