use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use log::{debug, info, LevelFilter, Log, Metadata, Record};
use syntaxe_parser::report::AnalysisReport;
use syntaxe_parser::{analyze, AnalysisResult};
use syntaxe_protocol::WordToken;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Parser)]
#[command(author, version, about = "Checks a tagged French sentence (JSON token list)")]
struct Cli {
    /// JSON array of tokens; `-` reads stdin
    #[arg(value_name = "FILE")]
    input: PathBuf,

    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// -v for debug, -vv for trace
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Plain stderr sink for the `log` facade.
struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{} {}] {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    // Only fails if a logger is already installed.
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

fn read_input(path: &Path) -> anyhow::Result<String> {
    if path.as_os_str() == "-" {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer).context("reading stdin")?;
        return Ok(buffer);
    }
    fs::read_to_string(path).with_context(|| format!("reading {:?}", path))
}

fn print_text(result: &AnalysisResult) {
    let blocks: Vec<String> = result.blocks.iter().map(|b| format!("{}({})", b.kind, b.text())).collect();
    println!("Blocs : {}", blocks.join(" "));

    for span in result.functions() {
        let indent = if span.label.is_main() { "" } else { "  " };
        println!("{}{} : {}", indent, span.label, span.text());
    }

    if result.valid {
        println!("✅ {}", result.message());
    } else {
        println!("{}", result.message());
    }
}

fn run(cli: &Cli) -> anyhow::Result<bool> {
    let input = read_input(&cli.input)?;
    let tokens: Vec<WordToken> = serde_json::from_str(&input).context("parsing token list")?;
    info!("{} token(s)", tokens.len());

    let result = analyze(&tokens);
    debug!("valid: {}", result.valid);

    match cli.format {
        Format::Text => print_text(&result),
        Format::Json => println!("{}", serde_json::to_string_pretty(&AnalysisReport::from(&result))?),
    }

    Ok(result.valid)
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let valid = run(&cli)?;
    Ok(if valid { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_flags() {
        let cli = Cli::parse_from(["syntaxe-cli", "phrase.json", "--format", "json", "-vv"]);
        assert!(matches!(cli.format, Format::Json));
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.input, PathBuf::from("phrase.json"));
    }

    #[test]
    fn test_token_list_wire_format() {
        let json = r#"[
            {"id": 1, "text": "Le", "type": "determinant", "gender": "masculin", "number": "singulier"},
            {"id": 2, "text": "chien", "type": "nom", "subtype": "commun", "gender": "masculin", "number": "singulier"},
            {"id": 3, "text": "dort", "type": "verbe", "mode": "indicatif", "person": "il"}
        ]"#;
        let tokens: Vec<WordToken> = serde_json::from_str(json).unwrap();
        let result = analyze(&tokens);
        assert!(result.valid, "{}", result.message());

        let report = serde_json::to_value(AnalysisReport::from(&result)).unwrap();
        assert_eq!(report["valid"], true);
        assert_eq!(report["blocks"][0]["text"], "Le chien");
        assert_eq!(report["functions"][1]["label"], "Verbe");
    }
}
