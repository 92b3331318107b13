use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
    process::ExitCode,
};

use anyhow::Context;
use clap::{Parser, ValueEnum};
use flexi_logger::Logger;
use mufont::Format;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    /// C header with GFXfont declarations
    Header,
    /// Per-glyph JSON dump
    Json,
    /// Binary font container
    Blob,
}

impl From<OutputFormat> for Format {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Header => Format::Header,
            OutputFormat::Json => Format::Json,
            OutputFormat::Blob => Format::Blob,
        }
    }
}

#[derive(Parser, Debug)]
#[command(version, about = "mufont, the muwerk font compiler")]
struct Options {
    #[arg(help = "Font source file", value_name = "FONTFILE")]
    path: PathBuf,

    #[arg(help = "Dump glyphs as JSON (same as --format json)", short, long)]
    json: bool,

    #[arg(help = "Output format", short, long, value_enum, default_value = "header")]
    format: OutputFormat,

    #[arg(help = "Symbol name for generated code, defaults to the file name", short, long)]
    name: Option<String>,

    #[arg(help = "Write to this file instead of stdout", short, long)]
    output: Option<PathBuf>,

    #[arg(help = "Log more details, repeat for trace output", short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Options {
    fn format(&self) -> Format {
        if self.json {
            Format::Json
        } else {
            self.format.into()
        }
    }

    fn symbol_name(&self) -> String {
        self.name.clone().unwrap_or_else(|| symbol_name(&self.path))
    }
}

/// File name without its last extension, spaces replaced by underscores.
fn symbol_name(path: &Path) -> String {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let stem = match file_name.rfind('.') {
        Some(dot) => &file_name[..dot],
        None => &file_name[..],
    };

    stem.replace(' ', "_")
}

fn run(options: &Options) -> anyhow::Result<()> {
    let font = mufont::load(&options.path)?;
    let format = options.format();
    let name = options.symbol_name();

    log::debug!("Writing {format:?} output for '{name}'");

    match &options.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create '{}'", path.display()))?;
            let mut out = BufWriter::new(file);
            mufont::render(&font, format, &name, &mut out)?;
            out.flush()?;
        }
        None => {
            let mut out = io::stdout().lock();
            mufont::render(&font, format, &name, &mut out)?;
            out.flush()?;
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    let options = Options::parse();

    let level = match options.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    // stays alive until main returns
    let _logger = Logger::try_with_env_or_str(level)
        .and_then(|logger| logger.log_to_stderr().start())
        .map_err(|err| eprintln!("Failed to start logger: {err}"))
        .ok();

    match run(&options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("ERROR: {err:#}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_derives_symbol_names_from_paths() {
        assert_eq!(symbol_name(Path::new("fonts/my font.txt")), "my_font");
        assert_eq!(symbol_name(Path::new("a.b.font")), "a.b");
        assert_eq!(symbol_name(Path::new("plain")), "plain");
    }

    #[test]
    fn it_prefers_the_json_flag() {
        let options = Options::parse_from(["mufont", "-j", "-f", "blob", "x.font"]);
        assert_eq!(options.format(), Format::Json);

        let options = Options::parse_from(["mufont", "--format", "blob", "x.font"]);
        assert_eq!(options.format(), Format::Blob);
        assert_eq!(options.symbol_name(), "x");
    }
}
