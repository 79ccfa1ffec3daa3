//! SiteCrumbs CLI — breadcrumb trails for a bilingual portfolio site.
//!
//! Prints the localized navigation trail for a request path as text, JSON,
//! or schema.org JSON-LD.

mod commands;

use clap::Parser;
use color_eyre::eyre::Result;

use commands::Cli;

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    commands::init_tracing(&cli);
    commands::run(cli)
}
