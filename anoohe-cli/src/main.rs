//! `anoohe-showcase`: drive the showcase engine and newsletter flow from a
//! terminal.

mod simulate;

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use anoohe_core::{
    BrandCatalog, NewsletterForm, ShowcaseSettings, SimulatedNewsletter,
    SubmitOutcome,
};

use simulate::{HoverEvent, SimulateOptions};

#[derive(Parser)]
#[command(
    name = "anoohe-showcase",
    about = "Anoohe brand showcase simulator"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the showcase headless and print each frame
    Simulate {
        /// Viewport width in px; omit to simulate an unmeasured viewport
        #[arg(long)]
        width: Option<f32>,
        #[arg(long, default_value_t = 60)]
        frames: u32,
        #[arg(long, default_value_t = 60)]
        fps: u32,
        /// Hover a tile at a frame, e.g. `3@10`; `none@20` clears hover
        #[arg(long, value_name = "TILE@FRAME")]
        hover: Vec<HoverEvent>,
        /// Press Space at the given frame
        #[arg(long, value_name = "FRAME")]
        toggle_at: Vec<u32>,
        /// Report a rendering fault at the given frame
        #[arg(long, value_name = "FRAME")]
        fault_at: Option<u32>,
        /// Fail logo loads whose asset reference contains this fragment
        #[arg(long, value_name = "FRAGMENT")]
        fail_logo: Vec<String>,
        /// Simulate a surface without accelerated graphics
        #[arg(long)]
        no_accel: bool,
        /// Print frames as JSON lines
        #[arg(long)]
        json: bool,
    },
    /// Submit an address through the simulated newsletter endpoint
    Subscribe {
        #[arg(long)]
        email: String,
        /// Endpoint latency; defaults to the configured newsletter delay
        #[arg(long)]
        delay_ms: Option<u64>,
    },
    /// List the brands in the showcase catalog
    Brands,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let (settings, source) = ShowcaseSettings::load_from_env()?;
    tracing::debug!(?source, "showcase settings loaded");

    match cli.command {
        Command::Simulate {
            width,
            frames,
            fps,
            hover,
            toggle_at,
            fault_at,
            fail_logo,
            no_accel,
            json,
        } => {
            let opts = SimulateOptions {
                width,
                frames,
                fps,
                hover,
                toggle_at,
                fault_at,
                fail_logo,
                no_accel,
                json,
            };
            simulate::run(opts, settings).await
        }
        Command::Subscribe { email, delay_ms } => {
            let delay = delay_ms
                .map(Duration::from_millis)
                .unwrap_or_else(|| settings.newsletter_delay());
            let service = SimulatedNewsletter::new(delay);
            let mut form = NewsletterForm::new();
            form.set_email(email);

            match form.submit(&service).await {
                SubmitOutcome::Subscribed(receipt) => {
                    println!(
                        "{} ({} at {})",
                        form.status().message().unwrap_or_default(),
                        receipt.email,
                        receipt.subscribed_at.to_rfc3339()
                    );
                    Ok(())
                }
                SubmitOutcome::Invalid => {
                    let error = form.email_props().error.unwrap_or_default();
                    bail!("{error}")
                }
                SubmitOutcome::Failed(err) => {
                    bail!(
                        "{} ({err})",
                        form.status().message().unwrap_or_default()
                    )
                }
            }
        }
        Command::Brands => {
            let catalog = BrandCatalog::storefront()?;
            for (slot, brand) in catalog.brands().iter().enumerate() {
                println!(
                    "{slot}\t{}\t{}\t{}\t{}",
                    brand.slug, brand.name, brand.id, brand.logo
                );
            }
            Ok(())
        }
    }
}
