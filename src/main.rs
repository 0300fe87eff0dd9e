use anyhow::Result;
use clap::Parser;
use std::path::Path;

use copy_icon_gen::icon_gen;

#[derive(Debug, Parser)]
#[clap(
    name = "copy-icon-gen",
    version,
    about = "Draw the 16, 48 and 128px \"copy\" icons into the current directory"
)]
struct Args {}

fn main() -> Result<()> {
    let _args = Args::parse();

    icon_gen::generate_icons(Path::new("."))
}
