use std::net::IpAddr;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use studio_testing::{gallery, resend, serve};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Command::Resend {
            host,
            port,
            api_key,
        } => {
            info!("Starting resend testing server on {host}:{port}");
            info!("Send endpoint: http://{host}:{port}{}", resend::SEND_ROUTE);
            info!("API key: {api_key:?}");
            info!(
                "Recipients containing {:?} are rejected with an error object",
                resend::REJECT_MARKER
            );
            serve(host, port, resend::router(api_key)).await?
        }
        Command::Gallery {
            host,
            port,
            access_token,
        } => {
            info!("Starting gallery testing server on {host}:{port}");
            info!("Brands endpoint: http://{host}:{port}{}", gallery::BRANDS_ROUTE);
            info!("Access token: {access_token:?}");
            serve(host, port, gallery::router(access_token)).await?
        }
        Command::Completion { shell } => {
            clap_complete::generate(
                shell,
                &mut Cli::command(),
                env!("CARGO_BIN_NAME"),
                &mut std::io::stdout(),
            );
        }
    }

    Ok(())
}

#[derive(Debug, Parser)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Start the resend testing server
    Resend {
        #[arg(long, default_value = "127.0.0.1")]
        host: IpAddr,
        #[arg(long, default_value = "8001")]
        port: u16,
        #[arg(long, default_value = "test-api-key")]
        api_key: String,
    },
    /// Start the gallery platform testing server
    Gallery {
        #[arg(long, default_value = "127.0.0.1")]
        host: IpAddr,
        #[arg(long, default_value = "8002")]
        port: u16,
        #[arg(long, default_value = "test-token")]
        access_token: String,
    },
    /// Generate shell completions
    Completion {
        /// The shell to generate completions for
        #[clap(value_enum)]
        shell: Shell,
    },
}
