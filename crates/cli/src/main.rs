use anyhow::Context;
use clap::{CommandFactory, Parser};
use ferrous_txt_domain::{fully_qualified, RecordType};
use std::process::ExitCode;
use tracing::info;

mod args;
mod bootstrap;
mod di;
mod output;

use args::Cli;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let Some(fqdn) = cli.fqdn.as_deref().filter(|name| !name.is_empty()) else {
        eprintln!("missing fqdn");
        eprintln!("{}", Cli::command().render_help());
        return Ok(ExitCode::FAILURE);
    };

    let config = cli.query_config().context("invalid arguments")?;
    bootstrap::init_logging(&cli.logging_config())?;

    let fqdn = fully_qualified(fqdn);
    print!("{}", output::Settings(&config));

    let services = di::DnsServices::new(&config);

    info!("----- querying -----");
    let response = services
        .resolve_txt
        .execute(&fqdn, RecordType::TXT, &config.nameservers, config.recursive)
        .await
        .with_context(|| format!("error querying dns for {}", fqdn))?;

    print!("{}", output::Report(&response));

    Ok(ExitCode::SUCCESS)
}
