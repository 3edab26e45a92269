//! Build script that renders the `gangplank` man page.
//!
//! Packaging expects the man page in the build output directory, so it is
//! generated here with clap-mangen from the shared CLI definition.

use std::io::Write;
use std::path::PathBuf;
use std::{env, fs};

use clap::CommandFactory;
use clap_mangen::Man;

#[path = "src/cli/mod.rs"]
mod cli;

use cli::Cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut stdout = std::io::stdout();
    writeln!(stdout, "cargo:rerun-if-changed=build.rs")?;
    writeln!(stdout, "cargo:rerun-if-changed=src/cli/mod.rs")?;

    let out_dir = env::var_os("OUT_DIR").ok_or_else(|| {
        std::io::Error::new(std::io::ErrorKind::NotFound, "OUT_DIR was not set")
    })?;

    let mut rendered = Vec::new();
    Man::new(Cli::command()).render(&mut rendered)?;
    fs::write(PathBuf::from(out_dir).join("gangplank.1"), rendered)?;

    Ok(())
}
