//! Verdant CLI
//!
//! Runs the catalog page's behavior natively, for checking content and
//! tunables without a browser.
//!
//! ## Usage
//!
//! ```bash
//! # List every plant
//! verdant plants
//!
//! # Apply the facet filter
//! verdant plants --type succulent --difficulty easy
//!
//! # Check an address the way the signup form does
//! verdant validate-email someone@example.com
//!
//! # Run the full signup flow with real timers
//! verdant subscribe --email someone@example.com --consent
//!
//! # Print the effective configuration
//! verdant --config site.json config
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use verdant_core::{
    apply, run_submission, validate_email, Catalog, FacetGroup, FilterSelection, FormHandle,
    FormState, Newsletter, SimulatedSubscriber, SiteConfig, SubmissionRecord, Subscribe,
    TokioTimer, VerdantError, VerdantResult, ALL, NO_RESULTS_MESSAGE,
};

/// Verdant - plant-care catalog tools
#[derive(Parser)]
#[command(name = "verdant")]
#[command(version = "0.1.0")]
#[command(about = "Verdant - plant-care catalog tools")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Site configuration file (JSON); defaults apply when omitted
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List plants matching the facet filter
    Plants {
        /// Plant type (foliage, succulent, flowering, herb) or "all"
        #[arg(long = "type", default_value = ALL)]
        plant_type: String,

        /// Care level (easy, moderate, expert) or "all"
        #[arg(long, default_value = ALL)]
        difficulty: String,
    },

    /// Check an email address
    ValidateEmail {
        email: String,
    },

    /// Run the newsletter signup flow
    Subscribe {
        #[arg(long)]
        email: String,

        /// Agree to receive emails
        #[arg(long)]
        consent: bool,

        /// Make the subscriber fail, to see the retry path
        #[arg(long)]
        offline: bool,
    },

    /// Print the effective configuration as JSON
    Config,
}

/// Setup logging based on verbosity level
fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

fn load_config(path: Option<&PathBuf>) -> Result<SiteConfig> {
    let Some(path) = path else {
        return Ok(SiteConfig::default());
    };
    SiteConfig::from_file(path).with_context(|| format!("Failed to load config {}", path.display()))
}

/// Prints every state the form passes through
struct ReportingForm {
    form: Newsletter,
    last: FormState,
}

impl ReportingForm {
    fn new(form: Newsletter) -> Self {
        let last = form.state();
        Self { form, last }
    }
}

impl FormHandle for ReportingForm {
    fn update<R>(&mut self, f: impl FnOnce(&mut Newsletter) -> R) -> R {
        let result = f(&mut self.form);
        let state = self.form.state();
        if state != self.last {
            println!("State: {}", describe(state));
            self.last = state;
        }
        result
    }
}

fn describe(state: FormState) -> String {
    match state {
        FormState::Idle => "idle".to_string(),
        FormState::Invalid(e) => format!("invalid ({})", e),
        FormState::Submitting => "submitting".to_string(),
        FormState::Success => "success".to_string(),
    }
}

/// Subscriber that is never reachable
struct OfflineSubscriber;

impl Subscribe for OfflineSubscriber {
    async fn subscribe(&self, _record: &SubmissionRecord) -> VerdantResult<()> {
        Err(VerdantError::Subscribe("mailing list offline".to_string()))
    }
}

async fn subscribe(config: &SiteConfig, email: String, consent: bool, offline: bool) -> Result<()> {
    let mut form = Newsletter::new();
    form.set_email(email);
    form.set_consent(consent);
    let mut form = ReportingForm::new(form);

    let window = config.success_window();
    let settled = if offline {
        run_submission(&mut form, &OfflineSubscriber, &TokioTimer, window).await
    } else {
        let subscriber = SimulatedSubscriber::new(TokioTimer, config.submit_latency());
        run_submission(&mut form, &subscriber, &TokioTimer, window).await
    };

    match settled {
        FormState::Invalid(e) => anyhow::bail!("{}", e),
        _ => Ok(()),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    let config = load_config(cli.config.as_ref())?;
    tracing::debug!(
        stagger_ms = config.stagger_ms,
        submit_latency_ms = config.submit_latency_ms,
        success_window_ms = config.success_window_ms,
        "Effective configuration"
    );

    match cli.command {
        Commands::Plants {
            plant_type,
            difficulty,
        } => {
            let catalog = Catalog::embedded()?;
            let selection = FilterSelection::default()
                .select(FacetGroup::Type, &plant_type)?
                .select(FacetGroup::Difficulty, &difficulty)?;
            let outcome = apply(&selection, &catalog.plants, config.stagger());

            if outcome.is_empty() {
                println!("{}", NO_RESULTS_MESSAGE);
                return Ok(());
            }

            println!(
                "Plants ({} of {}):",
                outcome.shown.len(),
                catalog.len()
            );
            for card in &outcome.shown {
                if let Some(plant) = catalog.get(&card.id) {
                    println!(
                        "  {:<18} {:<10} {:<9} delay {}",
                        plant.name,
                        plant.plant_type,
                        plant.difficulty,
                        card.css_delay()
                    );
                }
            }
        }

        Commands::ValidateEmail { email } => {
            if !validate_email(email.trim()) {
                anyhow::bail!("'{}' is not a valid email address", email);
            }
            println!("'{}' is a valid email address", email);
        }

        Commands::Subscribe {
            email,
            consent,
            offline,
        } => {
            subscribe(&config, email, consent, offline).await?;
        }

        Commands::Config => {
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
    }

    Ok(())
}
