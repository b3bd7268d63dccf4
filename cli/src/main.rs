use clap::error::ErrorKind;
use clap::Parser;
use todoly_core::{Authenticator, ItemRepository, TodolyClient, UreqTransport};

mod args;
mod render;

use args::{Cli, Commands};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            let _ = err.print();
            std::process::exit(code);
        }
    };

    if let Err(err) = run(cli) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let client = TodolyClient::new(&cli.url);
    let transport = UreqTransport::new();

    let token = Authenticator::new(client.clone()).authenticate(&transport)?;
    let repo = ItemRepository::new(transport, client, token.token_string);

    match cli.command {
        Commands::List => render::print_items(&repo.list()?),
        Commands::Add { content } => repo.add_many(&content)?,
        Commands::Check { ids } => repo.set_checked_many(&ids, true)?,
        Commands::Uncheck { ids } => repo.set_checked_many(&ids, false)?,
        Commands::Del { ids } => repo.delete_many(&ids)?,
    }
    Ok(())
}
