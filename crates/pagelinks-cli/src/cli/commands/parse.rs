//! `pagelinks parse` – extract links from a saved page.

use anyhow::{bail, Context, Result};
use pagelinks_core::LinkParser;
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;
use url::Url;

#[derive(Debug, Clone, Copy)]
pub struct ParseOptions {
    pub pretty: bool,
    pub fail_on_empty: bool,
}

pub fn run_parse(
    parser: &LinkParser,
    input: &Path,
    page: &str,
    opts: ParseOptions,
    out: &mut impl Write,
) -> Result<()> {
    validate_page(page)?;
    let markup = read_input(input)?;

    match parser.parse(&markup, page) {
        Some(map) => {
            let json = if opts.pretty {
                serde_json::to_string_pretty(&map)?
            } else {
                serde_json::to_string(&map)?
            };
            writeln!(out, "{json}")?;
        }
        None if opts.fail_on_empty => bail!("no links found for {page}"),
        None => writeln!(out, "No links found for {page}")?,
    }
    Ok(())
}

/// The page address must be an absolute http(s) URL with a host.
fn validate_page(page: &str) -> Result<()> {
    let url = Url::parse(page).with_context(|| format!("invalid page address {page:?}"))?;
    if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
        bail!("page address must be an absolute http(s) URL: {page}");
    }
    Ok(())
}

/// Reads `input` (`-` is stdin). Invalid UTF-8 is replaced, not rejected.
fn read_input(input: &Path) -> Result<String> {
    let bytes = if input == Path::new("-") {
        let mut buf = Vec::new();
        io::stdin()
            .lock()
            .read_to_end(&mut buf)
            .context("read markup from stdin")?;
        buf
    } else {
        fs::read(input).with_context(|| format!("read {}", input.display()))?
    };
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
