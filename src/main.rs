use anyhow::Result;
use clap::Parser;
use folioterm::app::App;
use folioterm::cli::{self, Cli};
use folioterm::logging::{self, LogTarget};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // The TUI owns stdout, so interactive runs log to a file
    let target = if cli.command.is_some() {
        LogTarget::Stderr
    } else {
        LogTarget::default_file()
    };
    logging::init(target, cli.debug)?;

    let config = cli.load_config().await?;
    let startup_screen = cli.startup_screen();
    let config_path = cli.config_path();

    match cli.command {
        Some(command) => cli::execute(command, config, config_path).await,
        None => {
            let mut app = App::new(config, startup_screen);
            app.run().await
        }
    }
}
