use anyhow::Result;
use clap::Parser;

mod category;
mod cli_args;
mod config;
mod diff;
mod inputs;
mod llm;
mod logging;
mod report;
mod setup;

use cli_args::Cli;
use config::Config;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logger(cli.verbose);

    let cfg = Config::from_sources(&cli);

    // Required inputs abort the run before any network call.
    let diff_text = inputs::read_required(&cli.diff, "diff file")?;
    let files_raw = inputs::read_required(&cli.files, "changed-file list")?;
    let changed_files = inputs::parse_changed_files(&files_raw);

    let schema = cli.schema.as_deref().and_then(inputs::read_optional);

    log::info!(
        "{} changed file(s), {} diff byte(s)",
        changed_files.len(),
        diff_text.len()
    );

    let client = setup::build_suggestion_client(&cfg, cli.no_model);

    let markdown = report::generate(
        &diff_text,
        &changed_files,
        schema.as_deref(),
        client.as_ref(),
        cfg.max_tokens,
    );

    report::write(&cli.output, &markdown)?;

    println!("Wrote test suggestions to {:?}", cli.output);
    Ok(())
}
