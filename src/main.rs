use anyhow::Result;
use clap::Parser;
use modmap::assistant::KnowledgeBase;
use modmap::cli::{Cli, Commands};
use modmap::io::output::{create_writer, OutputFormat, OutputWriter};
use std::fs::File;
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            path,
            format,
            output,
        } => handle_analyze(&path, format, output),
        Commands::Ask { path, question } => handle_ask(&path, &question),
    }
}

fn handle_analyze(path: &Path, format: OutputFormat, output: Option<PathBuf>) -> Result<()> {
    let content = modmap::io::read_source(path)?;
    log::debug!("analyzing {} ({} bytes)", path.display(), content.len());
    let report = modmap::analyze_source(&content);

    match output {
        Some(out_path) => {
            let file = File::create(&out_path)?;
            create_writer(file, format).write_report(&report)?;
            log::debug!("report written to {}", out_path.display());
        }
        None => create_writer(std::io::stdout(), format).write_report(&report)?,
    }
    Ok(())
}

fn handle_ask(path: &Path, question: &str) -> Result<()> {
    let content = modmap::io::read_source(path)?;
    let report = modmap::analyze_source(&content);
    let knowledge = KnowledgeBase::from_report(&report);
    println!("{}", knowledge.answer(question));
    Ok(())
}
