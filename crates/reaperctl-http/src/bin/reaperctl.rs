//! Reaper CLI client binary.

use clap::Parser;
use console::style;
use reaperctl::ReaperError;
use reaperctl_http::{Cli, HOST_ENV_VAR, ReaperApi, handle_cli_command, resolve_host};

fn fail(err: ReaperError) -> ! {
    eprintln!("{}", style(err).red());
    std::process::exit(1);
}

#[tokio::main]
async fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let env_host = std::env::var(HOST_ENV_VAR).ok();
    let host = match resolve_host(cli.host, env_host) {
        Ok(host) => host,
        Err(err) => fail(err),
    };

    let api = ReaperApi::new(&host);
    if let Err(err) = handle_cli_command(&api, cli.command).await {
        fail(err);
    }
}
