use clap::Parser;
use quill_core::*;
use std::io::Read;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "quill")]
#[command(about = "Pipe text through an indentation-aware leveled logger", long_about = None)]
struct Cli {
    /// Input file (reads stdin when omitted)
    input: Option<PathBuf>,

    /// Severity level for emitted lines (silly, debug, verbose, info, warn, error)
    #[arg(long, default_value = "info")]
    level: String,

    /// Indentation depth applied to every line
    #[arg(long, default_value_t = 0)]
    indent: usize,

    /// Also write to a timestamped log file with this prefix
    #[arg(long)]
    log_file: Option<String>,

    /// Surround the output with horizontal rules
    #[arg(long)]
    rule: bool,

    /// Log total processing time when done
    #[arg(long)]
    timing: bool,

    /// Override config file path
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let level: Level = cli.level.parse()?;

    let mut quill = Quill::new(config);

    // The whole point of the binary is console output, so register the
    // console transport unless the config already did.
    if quill.logger().transport_count() == 0 {
        quill.log_to_console();
    }
    if let Some(prefix) = &cli.log_file {
        quill.log_to_file_with_timestamp(prefix)?;
    }

    let text = read_input(cli.input.as_deref())?;

    for _ in 0..cli.indent {
        quill.indent();
    }

    if cli.rule {
        quill.hr();
    }
    if cli.timing {
        quill.profile("pipe", "processed input");
    }

    quill.block(&text, |q, line| {
        q.log(level, line);
    });

    if cli.timing {
        quill.profile("pipe", "processed input");
    }
    if cli.rule {
        quill.hr();
    }

    Ok(())
}

fn read_input(path: Option<&std::path::Path>) -> Result<String> {
    match path {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}
