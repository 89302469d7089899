use std::collections::BTreeMap;

use anyhow::{bail, Context};
use clap::Subcommand;
use studio_config::Config;
use studio_email_contracts::{Email, EmailService};
use studio_models::email_address::EmailAddressWithName;

use crate::environment;

#[derive(Debug, Subcommand)]
pub enum EmailCommand {
    /// Test email deliverability
    Test { recipient: EmailAddressWithName },
}

impl EmailCommand {
    pub async fn invoke(self, config: Config) -> anyhow::Result<()> {
        match self {
            EmailCommand::Test { recipient } => test(config, recipient).await,
        }
    }
}

async fn test(config: Config, recipient: EmailAddressWithName) -> anyhow::Result<()> {
    let email_service = environment::email(&config.email)?;
    if !email_service.is_enabled() {
        bail!("Email delivery is not configured");
    }

    email_service
        .send(Email {
            recipient,
            subject: "Email Deliverability Test".into(),
            html: "<p>Email deliverability seems to be working!</p>".into(),
            text: "Email deliverability seems to be working!".into(),
            reply_to: None,
            headers: BTreeMap::new(),
        })
        .await
        .context("Failed to send email")?;

    println!("Test email has been sent");

    Ok(())
}
