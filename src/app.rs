use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::Parser;
use colored::Colorize;

use crate::cli::args::{CliArgs, Command};
use crate::cli::validation;
use crate::config::{self, ConfigFile};
use crate::report;
use crate::server::{self, ServeError};
use crate::stats::Stats;
use crate::store;
use crate::update::{self, Options, UpdateError};

fn format_kv_line(label: &str, value: &str) {
    println!(":: {:<10}: {}", label, value);
}

fn print_banner() {
    println!(
        ":: tablepatch v{} :: review table regenerator ::",
        env!("CARGO_PKG_VERSION")
    );
    println!();
}

fn resolve_update_options(
    data: Option<String>,
    html: Option<String>,
    cfg: &ConfigFile,
) -> Options {
    let data_path = data
        .or_else(|| cfg.data.clone())
        .map(|p| config::expand_tilde(&p))
        .unwrap_or_else(|| PathBuf::from(update::DEFAULT_DATA_PATH));
    let html_path = html
        .or_else(|| cfg.html.clone())
        .map(|p| config::expand_tilde(&p))
        .unwrap_or_else(|| PathBuf::from(update::DEFAULT_HTML_PATH));
    Options {
        data_path,
        html_path,
    }
}

fn run_update_command(options: Options) {
    format_kv_line("Data", &options.data_path.display().to_string());
    format_kv_line("Html", &options.html_path.display().to_string());
    println!();

    match update::run_update(&options) {
        Ok(outcome) => {
            format_kv_line("Articles", &outcome.stats.total.to_string());
            format_kv_line(
                "Countries",
                &outcome.stats.distinct_countries().to_string(),
            );
            format_kv_line("Types", &outcome.stats.distinct_study_types().to_string());
            format_kv_line(
                "Period",
                &format!("{}-{}", outcome.stats.min_year, outcome.stats.max_year),
            );
            println!();
            println!(
                "{} {} rows written",
                "table updated ::".bold().green(),
                outcome.stats.total
            );
            report::print_report(&outcome.stats);
        }
        Err(e @ UpdateError::NoArticles { .. }) => {
            println!("{} {e}", "nothing to update ::".bold().yellow());
        }
        Err(e) => {
            println!("{} {e}", "update skipped ::".bold().yellow());
            // The report is an independent read-only pass; it still runs
            // when only the document patch failed.
            let articles = store::load_articles(&options.data_path);
            if !articles.is_empty() {
                report::print_report(&Stats::collect(&articles));
            }
        }
    }

    println!();
    println!(":: Completed ::");
}

fn run_report_command(data_path: PathBuf) {
    let articles = store::load_articles(&data_path);
    if articles.is_empty() {
        println!(
            "{} no articles loaded",
            "nothing to report ::".bold().yellow()
        );
        return;
    }
    report::print_report(&Stats::collect(&articles));
}

fn run_serve_command(port: u16, open_browser: bool) -> Result<(), String> {
    let rt = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|e| format!("failed to build runtime: {e}"))?;
    rt.block_on(server::serve(port, open_browser))
        .map_err(|e| match e {
            ServeError::Bind { port, source } => format!(
                "failed to bind port {port}: {source} (try a different port: tablepatch serve {})",
                port.saturating_add(1)
            ),
            other => other.to_string(),
        })
}

pub fn run_cli() -> Result<(), String> {
    let args = match CliArgs::try_parse() {
        Ok(args) => args,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                print!("{e}");
                return Ok(());
            }
            _ => return Err(e.to_string()),
        },
    };

    validation::validate(&args)?;

    let cfg = match args.config.as_deref() {
        Some(path) => config::load_config(&config::expand_tilde(path), false)?,
        None => match config::default_config_path() {
            Some(path) => config::load_config(&path, true)?,
            None => ConfigFile::default(),
        },
    };

    if args.no_color || cfg.no_color.unwrap_or(false) {
        colored::control::set_override(false);
    }

    print_banner();

    let command = args.command.unwrap_or(Command::Update {
        data: None,
        html: None,
    });
    match command {
        Command::Update { data, html } => {
            run_update_command(resolve_update_options(data, html, &cfg));
            Ok(())
        }
        Command::Report { data } => {
            let options = resolve_update_options(data, None, &cfg);
            run_report_command(options.data_path);
            Ok(())
        }
        Command::Serve { port, no_browser } => {
            let port = port.or(cfg.port).unwrap_or(server::DEFAULT_PORT);
            let open_browser = !no_browser && cfg.open_browser.unwrap_or(true);
            run_serve_command(port, open_browser)
        }
    }
}
