use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "geoconv",
    about = "Convert molecular geometry files between XYZ, TURBOMOLE and ORCA formats",
    version
)]
pub struct Cli {
    /// Output format token (XYZ/xyz/x, TURBOMOLE/turbomole/t, ORCA/orca/o)
    #[arg(short = 'o', long = "format", value_name = "FORMAT")]
    pub format: String,

    /// Output file (stdout if omitted)
    #[arg(short, long, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Convert every input instead of stopping after the first
    #[arg(short, long)]
    pub batch: bool,

    /// Input files, probed in order against every codec
    #[arg(value_name = "INPUT")]
    pub input: Vec<PathBuf>,
}

pub fn parse() -> Cli {
    Cli::parse()
}
