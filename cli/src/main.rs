//! xlsdump CLI - print a fixed spreadsheet workbook to the console
//!
//! Reads the first sheet of the workbook at [`WORKBOOK_PATH`] and prints it
//! as a table, or prints one `Error reading excel file: ...` line. Either
//! way the process exits successfully.

use clap::Parser;
use std::io::{self, Write};

/// Workbook shown by this tool.
const WORKBOOK_PATH: &str = r"E:\OneDrive\Work\2026_kevin\기업자가진단 서비스\BizDive\BizDiz_DataSet\(BizDive) 단계 및 영역별 배점표.xlsx";

/// Print a spreadsheet workbook as a console table
#[derive(Parser)]
#[command(
    name = "xlsdump",
    author = "iyulab",
    version,
    about = "Print a spreadsheet workbook as a console table",
    long_about = "xlsdump - print the first sheet of a fixed workbook as a console table.\n\n\
                  Every row and column is shown. Set RUST_LOG=debug for diagnostics on stderr."
)]
struct Cli {}

fn main() {
    let _cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("error")).init();

    let output = xlsdump::report(WORKBOOK_PATH);
    write_output(&output);
}

fn write_output(content: &str) {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    if let Err(e) = writeln!(handle, "{}", content) {
        log::warn!("failed to write to stdout: {}", e);
    }
}
