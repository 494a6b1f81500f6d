//! CLI for the pagelinks link extractor.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use pagelinks_core::config;
use pagelinks_core::LinkParser;
use std::io::{self, Write};
use std::path::PathBuf;

use commands::{run_completions, run_man, run_parse, run_taxonomy, ParseOptions};

/// Top-level CLI for pagelinks.
#[derive(Debug, Parser)]
#[command(name = "pagelinks")]
#[command(about = "pagelinks: extract, resolve and classify the links in a markup page", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Extract categorized links from a saved page and print them as JSON.
    Parse {
        /// Markup file to read, or `-` for stdin.
        input: PathBuf,

        /// Address the page was fetched from; relative links resolve against it.
        #[arg(long, value_name = "URL")]
        page: String,

        /// Print single-line JSON even if config asks for pretty output.
        #[arg(long)]
        compact: bool,

        /// Treat a page without links as an error (exit status 1).
        #[arg(long)]
        fail_on_empty: bool,
    },

    /// Show the extension taxonomy in effect (built-in plus config extras).
    Taxonomy,

    /// Generate shell completions on stdout.
    ///
    /// Example: pagelinks completions bash > ~/.local/share/bash-completion/completions/pagelinks
    Completions {
        /// Shell type (bash, zsh, fish, powershell, elvish).
        shell: Shell,
    },

    /// Print the man page (roff) on stdout.
    Man,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        cli.command.run(&mut io::stdout().lock())
    }

    fn run(self, out: &mut impl Write) -> Result<()> {
        match self {
            CliCommand::Parse {
                input,
                page,
                compact,
                fail_on_empty,
            } => {
                let cfg = config::load_or_init()?;
                tracing::debug!("loaded config: {:?}", cfg);
                let parser = LinkParser::from_config(&cfg)?;
                let opts = ParseOptions {
                    pretty: cfg.pretty_json && !compact,
                    fail_on_empty,
                };
                run_parse(&parser, &input, &page, opts, out)?;
            }
            CliCommand::Taxonomy => {
                let cfg = config::load_or_init()?;
                let parser = LinkParser::from_config(&cfg)?;
                run_taxonomy(parser.taxonomy(), out)?;
            }
            CliCommand::Completions { shell } => run_completions(shell, out),
            CliCommand::Man => run_man(out)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
