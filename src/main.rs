use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::{Generator, generate};
use colored::Colorize;
use projtree::cli::Cli;
use projtree::generate::TreeRequest;
use projtree::output::{self, Verbosity};
use projtree::ProjtreeContext;
use std::io;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {}", "Error:".red().bold(), e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        print_completions(shell, &mut Cli::command());
        return Ok(());
    }

    if cli.quiet {
        output::set_verbosity(Verbosity::Quiet);
    } else if cli.verbose {
        output::set_verbosity(Verbosity::Verbose);
    }

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let context = ProjtreeContext::new()?;

    let mut request = TreeRequest::new(cli.root);
    request.ignore_file = cli
        .ignore_file
        .or_else(|| context.config.core.ignore_file.clone());
    request.base_patterns = context.config.tracking.ignore_patterns.clone();
    request.extra_patterns = cli.patterns;
    request.exclude_paths = cli.excludes;
    request.follow_symlinks = context.config.tracking.follow_symlinks;

    let rendered = projtree::generate::execute(&request)?;
    println!("{rendered}");

    Ok(())
}

fn print_completions<G: Generator>(g: G, cmd: &mut clap::Command) {
    generate(g, cmd, cmd.get_name().to_string(), &mut io::stdout());
}
