//! Admin command line for the site content store.
//!
//! Usage:
//!   sitecontent --db site.sqlite3 keys
//!   sitecontent --db site.sqlite3 show homepage
//!   sitecontent --db site.sqlite3 write blogPage blog.json
//!   sitecontent --db site.sqlite3 section faq faq.json
//!   sitecontent --config site.json init --if-absent

use clap::{Parser, Subcommand};
use log::info;
use serde_json::Value;
use sitecontent_core::{
    init_logging, merge_page, ContentService, CoreConfig, DocumentKey, HomepageSection, InitMode,
};
use std::error::Error;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

/// Inspect and edit site content documents.
#[derive(Parser, Debug)]
#[command(name = "sitecontent")]
#[command(about = "Inspect and edit site content documents", version)]
struct Args {
    /// JSON config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// SQLite database file, overrides the config
    #[arg(long)]
    db: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List document keys
    Keys,
    /// Print the merged document as JSON
    Show { key: DocumentKey },
    /// Overwrite a whole document from a JSON file
    Write { key: DocumentKey, file: PathBuf },
    /// Replace one homepage section from a JSON file
    Section { name: String, file: PathBuf },
    /// Write default templates to the store
    Init {
        /// Only seed documents that are not stored yet
        #[arg(long)]
        if_absent: bool,
    },
}

fn main() -> ExitCode {
    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let mut config = match &args.config {
        Some(path) => CoreConfig::load(path)?,
        None => CoreConfig::default(),
    };
    if let Some(db) = args.db {
        config.db_path = Some(db);
    }
    if let Some(dir) = &config.log_dir {
        init_logging(&config.log_level, dir)?;
    }

    if let Command::Keys = args.command {
        for key in DocumentKey::ALL {
            println!("{key}");
        }
        return Ok(());
    }

    let service = ContentService::new(Arc::new(config.open_store()?), config.concurrency_policy);
    service.start();
    if let Some(err) = service.synchronizer().last_error() {
        eprintln!("warning: {err}");
    }

    match args.command {
        Command::Keys => {}
        Command::Show { key } => {
            let value = service.synchronizer().page(key).to_value()?;
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        Command::Write { key, file } => {
            let page = merge_page(key, Some(&read_json(&file)?));
            service.mutator().write_page(&page)?;
            println!("wrote {key}");
        }
        Command::Section { name, file } => {
            let section = HomepageSection::from_json(&name, read_json(&file)?)?;
            service.update_section(section)?;
            println!("wrote homepage section {name}");
        }
        Command::Init { if_absent } => {
            let mode = if if_absent {
                InitMode::SeedIfAbsent
            } else {
                InitMode::Overwrite
            };
            let report = service.initialize_content(mode)?;
            info!(
                "event=cli_init module=cli status=ok written={} skipped={}",
                report.written.len(),
                report.skipped.len()
            );
            for key in &report.written {
                println!("initialized {key}");
            }
            for key in &report.skipped {
                println!("kept {key}");
            }
        }
    }
    Ok(())
}

fn read_json(path: &Path) -> Result<Value, Box<dyn Error>> {
    let raw = std::fs::read_to_string(path)
        .map_err(|err| format!("cannot read `{}`: {err}", path.display()))?;
    Ok(serde_json::from_str(&raw)?)
}
