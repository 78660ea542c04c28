use std::time::Duration;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use stockform_client::{ApiConfig, DEFAULT_API_URL, HttpProductApi};
use stockform_core::ProductId;
use stockform_form::ProductFormController;
use stockform_observability::LogFormat;

use crate::terminal::{TerminalNotifier, render_list};

mod fields;
mod session;

pub(crate) type Form = ProductFormController<HttpProductApi, TerminalNotifier>;

#[derive(Debug, Parser)]
#[command(name = "stockform", about = "Product inventory form", long_about = None)]
pub(crate) struct Cli {
    #[command(flatten)]
    api: ApiArgs,

    /// Log output format (json or pretty); logs go to stderr
    #[arg(long, global = true, env = "STOCKFORM_LOG_FORMAT", default_value = "json")]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Args)]
struct ApiArgs {
    /// Base URL of the product API
    #[arg(long, global = true, env = "STOCKFORM_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Request timeout in seconds (transport default when unset)
    #[arg(long, global = true, env = "STOCKFORM_TIMEOUT_SECS")]
    timeout_secs: Option<u64>,
}

impl ApiArgs {
    fn config(&self) -> anyhow::Result<ApiConfig> {
        let mut config = ApiConfig::parse(&self.api_url).context("invalid --api-url")?;
        if let Some(secs) = self.timeout_secs {
            config = config.with_timeout(Duration::from_secs(secs));
        }
        Ok(config)
    }
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List active products
    List,
    /// List removed (soft-deleted) products
    Removed,
    /// Add a new product
    Add(fields::NewProductArgs),
    /// Replace an active product, changing the given fields
    Update {
        /// Id of the product to update
        id: ProductId,
        #[command(flatten)]
        fields: fields::ProductFieldArgs,
    },
    /// Move a product to the removed list
    Delete {
        id: ProductId,
    },
    /// Move a removed product back to the active list
    Restore {
        id: ProductId,
    },
    /// Permanently delete a removed product
    Purge {
        id: ProductId,
    },
    /// Interactive form session
    Session,
}

impl Cli {
    pub(crate) fn log_format(&self) -> LogFormat {
        self.log_format
    }

    pub(crate) async fn run(self) -> anyhow::Result<()> {
        let config = self.api.config()?;
        tracing::debug!(base_url = %config.base_url, timeout = ?config.timeout, "api configured");
        let api = HttpProductApi::new(config)?;

        let notifier = match self.command {
            Commands::Session => TerminalNotifier::blocking(),
            _ => TerminalNotifier::default(),
        };
        let mut form = ProductFormController::new(api, notifier);

        match self.command {
            Commands::List => {
                form.initialize().await?;
                print!("{}", render_list("Current Products", form.active()));
            }
            Commands::Removed => {
                form.show_removed().await?;
                print!("{}", render_list("Removed Products", form.removed()));
            }
            Commands::Add(args) => {
                for (field, value) in args.values() {
                    form.update_field(field, value);
                }
                fields::require_filled(form.draft()).map_err(anyhow::Error::msg)?;
                form.submit().await?;
            }
            Commands::Update { id, fields } => {
                let changes = fields.values();
                if changes.is_empty() {
                    anyhow::bail!("no fields given; nothing to update");
                }
                form.initialize().await?;
                form.edit_by_id(&id)?;
                for (field, value) in changes {
                    form.update_field(field, value);
                }
                fields::require_filled(form.draft()).map_err(anyhow::Error::msg)?;
                form.submit().await?;
            }
            Commands::Delete { id } => form.remove_product(id).await?,
            Commands::Restore { id } => form.restore_product(id).await?,
            Commands::Purge { id } => form.purge_product(id).await?,
            Commands::Session => session::run(form).await?,
        }
        Ok(())
    }
}
