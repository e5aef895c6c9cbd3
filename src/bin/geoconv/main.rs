use std::io::Write;
use std::process::ExitCode;

use anyhow::{Context, Result};
use geoconv::{CodecRegistry, Converter, Error};

mod cli;
mod io;

/// Separator between converted blocks when more than one source yields output.
const BLOCK_SEPARATOR: &str = "\n#----#\n";

fn main() -> ExitCode {
    let cli = cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            print_error(&e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: cli::Cli) -> Result<()> {
    let converter = Converter::new(CodecRegistry::default());

    // The token is checked before the output target exists, so an
    // unsupported format never creates or truncates a file.
    if converter.registry().encoder_for(&cli.format).is_none() {
        return Err(Error::UnsupportedOutputFormat(cli.format.clone()).into());
    }

    let mut output = io::create_output(cli.file.as_deref())?;

    let mut written = 0usize;
    for conversion in converter.process(&cli.input, cli.batch) {
        let molecule = match conversion {
            Ok(molecule) => molecule,
            Err(error) if cli.batch => {
                eprintln!("warning: {error}");
                continue;
            }
            Err(error) => return Err(error.into()),
        };

        if written > 0 {
            output
                .write_all(BLOCK_SEPARATOR.as_bytes())
                .context("Failed to write output")?;
        }
        let block = converter.encode(&molecule, &cli.format)?;
        output
            .write_all(block.as_bytes())
            .context("Failed to write output")?;
        written += 1;
    }

    output.flush().context("Failed to flush output")?;
    Ok(())
}

fn print_error(error: &anyhow::Error) {
    eprintln!("error: {error}");
    for cause in error.chain().skip(1) {
        eprintln!("  caused by: {cause}");
    }
}
