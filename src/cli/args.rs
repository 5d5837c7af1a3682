use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "pdf-pagetool")]
#[command(
    author,
    version,
    about = "Page-level PDF tooling: compress content streams, cut to the first N pages, blank out a page range"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compress page content streams to reduce file size
    Compress {
        /// Input PDF file path
        input: PathBuf,

        /// Output PDF file path
        output: PathBuf,
    },

    /// Keep only the first N pages
    Cut {
        /// Input PDF file path
        input: PathBuf,

        /// Output PDF file path
        output: PathBuf,

        /// Number of pages to keep; capped at the document length
        #[arg(allow_hyphen_values = true)]
        max_pages: i64,
    },

    /// Replace a page range with blank pages
    Replace {
        /// Input PDF file path
        input: PathBuf,

        /// Output PDF file path
        output: PathBuf,

        /// First page to replace (1-indexed, inclusive)
        start_page: u32,

        /// Last page to replace (1-indexed, inclusive)
        end_page: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cut_command() {
        let cli = Cli::try_parse_from(["pdf-pagetool", "cut", "in.pdf", "out.pdf", "300"]).unwrap();
        match cli.command {
            Command::Cut { max_pages, .. } => assert_eq!(max_pages, 300),
            other => panic!("parsed wrong command: {other:?}"),
        }
    }

    #[test]
    fn test_missing_arguments_rejected() {
        assert!(Cli::try_parse_from(["pdf-pagetool", "replace", "in.pdf", "out.pdf"]).is_err());
        assert!(Cli::try_parse_from(["pdf-pagetool", "compress", "in.pdf"]).is_err());
    }

    #[test]
    fn test_negative_max_pages_accepted() {
        // Permissive by design: the cut operation clamps non-positive values.
        let cli =
            Cli::try_parse_from(["pdf-pagetool", "cut", "in.pdf", "out.pdf", "-3"]).unwrap();
        match cli.command {
            Command::Cut { max_pages, .. } => assert_eq!(max_pages, -3),
            other => panic!("parsed wrong command: {other:?}"),
        }
    }
}
