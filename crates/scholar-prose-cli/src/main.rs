use anyhow::{Context, Result};
use scholar_prose_config::Config;
use scholar_prose_engine::{
    RenderMode, Thresholds, classify_document_with,
    render::html::{article_to_html, requirements_to_html},
    render_article, render_requirements,
};
use std::{
    env,
    io::{self, Read},
    path::PathBuf,
    process,
};

const USAGE: &str = "Usage: scholar-prose [--requirements] [--json] [--config PATH] [FILE]";

#[derive(Debug, Default, PartialEq, Eq)]
struct Args {
    requirements: bool,
    json: bool,
    config: Option<PathBuf>,
    file: Option<PathBuf>,
}

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Run(Args),
    Help,
}

fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<Command, String> {
    let mut parsed = Args::default();
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "--requirements" => parsed.requirements = true,
            "--json" => parsed.json = true,
            "--config" => {
                let path = args.next().ok_or("--config needs a path")?;
                parsed.config = Some(PathBuf::from(path));
            }
            flag if flag.starts_with("--") => return Err(format!("unknown option '{flag}'")),
            file => {
                if parsed.file.is_some() {
                    return Err("only one input file can be given".to_string());
                }
                parsed.file = Some(PathBuf::from(file));
            }
        }
    }
    Ok(Command::Run(parsed))
}

fn load_config(args: &Args) -> Result<Config> {
    let (config_path, explicit) = match &args.config {
        Some(path) => (path.clone(), true),
        None => (Config::config_path(), false),
    };
    log::info!("Config path: {}", config_path.display());

    match Config::load_from_path(&config_path)? {
        Some(config) => {
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        }
        None if explicit => {
            anyhow::bail!("config file '{}' does not exist", config_path.display())
        }
        None => {
            log::info!("No config file found, using defaults");
            Ok(Config::default())
        }
    }
}

fn read_input(file: Option<&PathBuf>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read input file '{}'", path.display())),
        None => {
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .context("failed to read standard input")?;
            Ok(input)
        }
    }
}

/// Renders `input` in the chosen mode as HTML or pretty JSON.
fn render(input: &str, mode: RenderMode, json: bool, thresholds: &Thresholds) -> Result<String> {
    match mode {
        RenderMode::Article => {
            let article = render_article(classify_document_with(input, thresholds));
            log::info!("Rendered article with {} nodes", article.nodes.len());
            if json {
                serde_json::to_string_pretty(&article).context("failed to serialize article")
            } else {
                Ok(article_to_html(&article))
            }
        }
        RenderMode::Requirement => {
            // One requirement per non-empty line.
            let lines: Vec<&str> = input.lines().filter(|l| !l.trim().is_empty()).collect();
            let items = render_requirements(&lines, thresholds);
            log::info!("Rendered {} requirement items", items.len());
            if json {
                serde_json::to_string_pretty(&items).context("failed to serialize requirements")
            } else {
                Ok(requirements_to_html(&items))
            }
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("scholar-prose starting up");

    let args = match parse_args(env::args().skip(1)) {
        Ok(Command::Run(args)) => args,
        Ok(Command::Help) => {
            println!("{USAGE}");
            return Ok(());
        }
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("{USAGE}");
            process::exit(1);
        }
    };

    let config = load_config(&args)?;
    let mode = if args.requirements {
        RenderMode::Requirement
    } else {
        config.mode
    };
    log::info!(
        "Output mode: {mode:?} as {}",
        if args.json { "JSON" } else { "HTML" }
    );

    let input = read_input(args.file.as_ref())?;
    println!("{}", render(&input, mode, args.json, &config.thresholds)?);
    Ok(())
}
