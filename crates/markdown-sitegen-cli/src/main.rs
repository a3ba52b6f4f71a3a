mod site;
mod template;

use anyhow::{Context, Result};
use markdown_sitegen_config::Config;
use markdown_sitegen_engine::Escaping;
use std::{env, path::PathBuf, process};

#[derive(Debug, Default, PartialEq)]
struct Args {
    config_path: Option<PathBuf>,
    verbose: bool,
}

fn parse_args(args: &[String]) -> Result<Args, String> {
    let mut parsed = Args::default();
    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" | "-c" => {
                let path = iter
                    .next()
                    .ok_or_else(|| format!("{arg} requires a path"))?;
                parsed.config_path = Some(PathBuf::from(path));
            }
            "--verbose" | "-v" => parsed.verbose = true,
            other => return Err(format!("unexpected argument '{other}'")),
        }
    }
    Ok(parsed)
}

fn load_config(args: &Args) -> Result<Config> {
    match &args.config_path {
        Some(path) => Config::load_from_path(path)?
            .with_context(|| format!("config file {} not found", path.display())),
        None => match Config::load()? {
            Some(config) => {
                log::info!("Loaded config from {}", Config::config_path().display());
                Ok(config)
            }
            None => {
                log::info!(
                    "No {} found, using default site layout",
                    Config::config_path().display()
                );
                Ok(Config::default())
            }
        },
    }
}

fn run(config: &Config) -> Result<()> {
    let copied = site::copy_static(&config.static_dir, &config.output_dir)?;
    log::info!("Copied {copied} static files");

    let escaping = if config.escape_html {
        Escaping::Html
    } else {
        Escaping::Verbatim
    };
    let pages = site::generate_pages_recursive(
        &config.content_dir,
        &config.template_path,
        &config.output_dir,
        escaping,
    )?;
    log::info!(
        "Generated {} pages into {}",
        pages.len(),
        config.output_dir.display()
    );
    Ok(())
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    let parsed = match parse_args(&args) {
        Ok(parsed) => parsed,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Usage: {} [--config <path>] [--verbose]", args[0]);
            process::exit(1);
        }
    };

    let level = if parsed.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();

    let config = load_config(&parsed)?;
    run(&config)
}
