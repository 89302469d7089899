use anyhow::bail;
use clap::Subcommand;
use studio_client::{ContactForm, FormStatus, HttpContactApi};
use studio_config::Config;
use url::Url;

#[derive(Debug, Subcommand)]
pub enum ContactCommand {
    /// Submit a message through the contact form of a running server
    Send {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        message: String,
        #[arg(long)]
        phone: Option<String>,
        /// Inquiry topic, e.g. "Maternity — The Total Bump"
        #[arg(long)]
        interest: Option<String>,
        /// Base URL of the server, defaults to client.url
        #[arg(long)]
        url: Option<Url>,
    },
}

impl ContactCommand {
    pub async fn invoke(self, config: Config) -> anyhow::Result<()> {
        match self {
            ContactCommand::Send {
                name,
                email,
                message,
                phone,
                interest,
                url,
            } => {
                let api = HttpContactApi::new(url.as_ref().unwrap_or(&config.client.url))?;

                let mut form =
                    ContactForm::new(interest.as_deref()).with_timeout(*config.client.timeout);
                form.fields.name = name;
                form.fields.email = email;
                form.fields.message = message;
                form.fields.phone = phone.unwrap_or_default();

                send(&mut form, &api).await
            }
        }
    }
}

async fn send(form: &mut ContactForm, api: &HttpContactApi) -> anyhow::Result<()> {
    match form.submit(api).await {
        FormStatus::Success { message } => {
            println!("{message}");
            Ok(())
        }
        FormStatus::Error { message, debug } => {
            for (field, error) in form.visible_errors() {
                eprintln!("{field:?}: {error}");
            }
            if let Some(debug) = debug {
                eprintln!("{debug}");
            }
            bail!(message)
        }
        status @ (FormStatus::Idle | FormStatus::Loading) => {
            bail!("Unexpected form status {status:?}")
        }
    }
}
