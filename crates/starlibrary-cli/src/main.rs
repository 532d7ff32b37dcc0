use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use starlibrary_config::Config;
use starlibrary_engine::{SiteOptions, build_site};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "starlibrary")]
#[command(author, version, about = "Build a tiny HTML site from notes/", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build site/ from notes/
    Build(BuildArgs),
}

#[derive(clap::Args, Debug, Default)]
struct BuildArgs {
    /// Directory containing the markdown notes
    #[arg(long)]
    notes: Option<PathBuf>,

    /// Directory to write the site into
    #[arg(long)]
    out: Option<PathBuf>,

    /// Site title
    #[arg(long)]
    title: Option<String>,

    /// Config file (defaults to ~/.config/starlibrary/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,
}

impl BuildArgs {
    /// Config file values, overridden by any flags given on the command line.
    fn resolve(self) -> Result<Config> {
        let config_path = self.config.clone().unwrap_or_else(Config::config_path);
        let mut config = match Config::load_from_path(&config_path) {
            Ok(Some(config)) => {
                log::info!("Loaded config from {}", config_path.display());
                config
            }
            Ok(None) if self.config.is_some() => {
                anyhow::bail!("Config file not found: {}", config_path.display())
            }
            Ok(None) => Config::default(),
            Err(e) => return Err(e).context("Failed to load config file"),
        };

        if let Some(notes) = self.notes {
            config.notes_path = notes;
        }
        if let Some(out) = self.out {
            config.out_path = out;
        }
        if let Some(title) = self.title {
            config.title = title;
        }
        Ok(config)
    }
}

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Build(args) => {
            let config = args.resolve()?;
            let opts = SiteOptions::new(&config.notes_path, &config.out_path, &config.title);
            let notes = build_site(&opts).with_context(|| {
                format!(
                    "Failed to build site from {}",
                    config.notes_path.display()
                )
            })?;
            println!(
                "Built {} note(s) into {}",
                notes.len(),
                config.out_path.display()
            );
        }
    }
    Ok(())
}
