mod startup;

use clap::{Parser, Subcommand};
use eventageous::App;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "eventageous", about = "Load the event listing and render it")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Load the events and render the listing page
    Render {
        /// Timezone for event dates, overriding TIMEZONE
        #[arg(long)]
        timezone: Option<String>,
        /// Write the page to a file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Go to the login endpoint unless the server already reports a login
    Login,
}

#[tokio::main]
async fn main() -> miette::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    startup::init_logging()?;

    info!("Starting Eventageous");

    // Load configuration
    let mut config = startup::load_config()?;

    match cli.command {
        Command::Render { timezone, output } => {
            if let Some(timezone) = timezone {
                config.timezone = timezone;
                config.validate()?;
            }

            let app = App::new(&config)?;
            let page = app.render_page().await?;

            match output {
                Some(path) => {
                    tokio::fs::write(&path, page)
                        .await
                        .map_err(eventageous::error::Error::from)?;
                    info!("Wrote page to {}", path.display());
                }
                None => println!("{}", page),
            }

            app.shutdown().await?;
        }
        Command::Login => {
            let app = App::new(&config)?;

            // Learn what the server thinks of the session first
            if let Err(e) = app.load_events().await {
                tracing::warn!("Could not refresh the session: {}", e);
            }

            if app.login().await? {
                info!("Login redirect started");
            } else {
                let session = app.current_session();
                info!(
                    "Already logged in as {}",
                    session.user_email.as_deref().unwrap_or("an unknown user")
                );
            }

            app.shutdown().await?;
        }
    }

    Ok(())
}
