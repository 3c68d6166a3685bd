use clap::Parser;
use folio_utils::{
    alloy::StringExt,
    config::Config,
    disk_storage::DiskStorageInterface,
    log::{init_file_logging, init_stderr_logging},
};
use tracing::info;

mod cli;
mod panic_hook;

#[tokio::main]
async fn main() -> folio_tui::Result<()> {
    let cli = cli::Cli::parse();

    let address = cli
        .address
        .as_deref()
        .map(|address| address.parse_as_address())
        .transpose()?;
    let config = Config::load()?.with_overrides(address, cli.rpc_url);

    match cli.cmd {
        None => {
            // The terminal belongs to ratatui, so logs go to a file.
            let log_path = init_file_logging()?;
            panic_hook::set();
            info!(path = %log_path.display(), "logging to file");

            folio_tui::App::new(&config)?.run().await?;
        }
        Some(cmd) => {
            init_stderr_logging()?;
            cmd.handle(&config).await?;
        }
    }

    Ok(())
}
