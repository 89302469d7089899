use studio_config::Config;
use studio_email_contracts::EmailService;
use tracing::{info, warn};

use crate::environment::Environment;

pub async fn serve(config: Config) -> anyhow::Result<()> {
    let environment = Environment::new(&config)?;

    if environment.email.is_enabled() {
        info!("Checking email provider");
        if let Err(err) = environment.email.ping().await {
            warn!("email provider is not reachable: {err:#}");
        }
    }

    let server = environment.rest_server();
    info!("Starting http server on {}", config.http.address);
    server.serve(config.http.address).await
}
