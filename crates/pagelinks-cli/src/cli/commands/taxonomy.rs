//! `pagelinks taxonomy` – list known extensions by category.

use anyhow::Result;
use pagelinks_core::ExtensionTaxonomy;
use std::io::Write;

pub fn run_taxonomy(taxonomy: &ExtensionTaxonomy, out: &mut impl Write) -> Result<()> {
    writeln!(out, "{:<10} {:<14} {}", "CATEGORY", "SUBCATEGORY", "EXTENSIONS")?;
    for category in taxonomy.categories() {
        for sub in category.subcategories() {
            let extensions: Vec<&str> = sub.extensions().collect();
            writeln!(
                out,
                "{:<10} {:<14} {}",
                category.name(),
                sub.name(),
                extensions.join(" ")
            )?;
        }
    }
    writeln!(out, "{} extensions", taxonomy.len())?;
    Ok(())
}
