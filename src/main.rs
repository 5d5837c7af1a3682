use std::path::Path;
use std::process;

use anyhow::Result;
use clap::Parser;

use pdf_pagetool::cli::{Cli, Command};
use pdf_pagetool::{ops, report};

fn main() {
    // Missing or malformed arguments print usage and exit 1 without touching
    // any file.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            process::exit(1);
        }
    };

    // Initialize logging
    env_logger::Builder::new()
        .filter_level(match cli.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            _ => log::LevelFilter::Debug,
        })
        .init();

    let ok = match cli.command {
        Command::Compress { input, output } => match run_compress(&input, &output) {
            Ok(()) => {
                println!("Successfully compressed to {}", output.display());
                true
            }
            Err(err) => {
                println!("Error compressing PDF: {err:#}");
                println!("Compression failed");
                false
            }
        },
        Command::Cut {
            input,
            output,
            max_pages,
        } => match run_cut(&input, &output, max_pages) {
            Ok(()) => {
                println!("Successfully cut PDF to {}", output.display());
                true
            }
            Err(err) => {
                println!("Error cutting PDF: {err:#}");
                log::debug!("{err:?}");
                println!("Cutting failed");
                false
            }
        },
        Command::Replace {
            input,
            output,
            start_page,
            end_page,
        } => match run_replace(&input, &output, start_page, end_page) {
            Ok(()) => {
                println!("Successfully created {}", output.display());
                true
            }
            Err(err) => {
                println!("Error replacing pages: {err:#}");
                log::debug!("{err:?}");
                println!("Page replacement failed");
                false
            }
        },
    };

    if !ok {
        process::exit(1);
    }
}

fn run_compress(input: &Path, output: &Path) -> Result<()> {
    println!("Compressing {}...", input.display());

    let summary = ops::compress_document(input, output)?;
    println!("Original size: {} pages", summary.total_pages);

    let sizes = report::measure(input, output)?;
    println!(
        "Compressed size: {:.2} MB (reduced by {:.1}%)",
        sizes.new_mib, sizes.reduction_pct
    );

    Ok(())
}

fn run_cut(input: &Path, output: &Path, max_pages: i64) -> Result<()> {
    println!("Processing {}...", input.display());

    let summary = ops::truncate_document(input, output, max_pages)?;
    println!("Total pages: {}", summary.total_pages);
    println!("Keeping first {} pages", summary.kept_pages);

    let sizes = report::measure(input, output)?;
    println!("Original size: {:.2} MB", sizes.original_mib);
    println!(
        "Cut size: {:.2} MB (reduced by {:.1}%)",
        sizes.new_mib, sizes.reduction_pct
    );

    Ok(())
}

fn run_replace(input: &Path, output: &Path, start_page: u32, end_page: u32) -> Result<()> {
    println!("Processing {}...", input.display());

    let summary = ops::replace_pages(input, output, start_page, end_page)?;
    println!("Total pages: {}", summary.total_pages);
    println!("Replacing pages {start_page} to {end_page} with blank pages");
    for page in &summary.replaced {
        println!("  Page {page}: Replaced with blank page");
    }

    let sizes = report::measure(input, output)?;
    println!("Original size: {:.2} MB", sizes.original_mib);
    println!(
        "New size: {:.2} MB (reduced by {:.1}%)",
        sizes.new_mib, sizes.reduction_pct
    );

    Ok(())
}
