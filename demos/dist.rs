//! Project-side stub: assembles the shared style configuration and
//! prints it for the fixer's command-line entry point. Copy into a
//! consuming project and adjust the finder.

use miette::{miette, IntoDiagnostic, Result};

use styleset::config::load_overrides;
use styleset::{styles, Finder};

fn main() -> Result<()> {
    let finder = Finder::new()
        .in_dir(".")
        .not_path("target")
        .not_path("vendor")
        .name("*.rs")
        .not_name("*_generated.rs");

    let overrides = load_overrides(None).map_err(|e| miette!(e))?;

    let config = styles(finder, overrides);

    let rendered = toml::to_string_pretty(&config).into_diagnostic()?;
    print!("{}", rendered);

    Ok(())
}
