use crate::bump::{self, BumpReport};
use crate::cli::commands::Cli;
use crate::error::PatchverError;
use crate::output;
use crate::vcs::GitCommitCounter;

pub fn run(cli: &Cli) -> i32 {
    match run_inner(cli) {
        Ok(code) => code,
        Err(e) => {
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&output::json::error(&e)).unwrap());
            } else {
                eprintln!("Error: {}", e.message);
            }
            1
        }
    }
}

fn run_inner(cli: &Cli) -> Result<i32, PatchverError> {
    let counter = GitCommitCounter::locate(&cli.dir)?;
    let report = bump::run(&counter, cli.variant, &cli.dir)?;

    if cli.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&output::json::success(output::json::report_json(&report)))
                .unwrap()
        );
    } else {
        output::text::print_warnings(&report.warnings);
        println!("{}", report.version);
    }
    Ok(exit_code(&report))
}

fn exit_code(report: &BumpReport) -> i32 {
    if report.warnings.is_empty() {
        0
    } else {
        2
    }
}

