//! Terminal front end: resolve the reference, ask the scraper service,
//! normalize the payload, render it.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use tubescout_core::{normalize, resolve, Config, NormalizedView, RefKind};
use ytscraper_client::{ScrapeBackend, ScrapeClient};

mod render;

#[derive(Parser)]
#[command(name = "tubescout")]
#[command(about = "Scrape YouTube video and channel metadata")]
#[command(version)]
struct Cli {
    /// Print the raw scrape payload as JSON instead of the rendered view
    #[arg(long, global = true)]
    json: bool,

    /// Show the full description and the complete recent-videos list
    #[arg(long, global = true)]
    full: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scrape a video by URL, shortened URL, or bare ID
    Video {
        reference: String,

        /// Save the transcript PDF as <video_id>.pdf
        #[arg(long)]
        transcript: bool,
    },

    /// Scrape a channel by URL, handle, or bare ID
    Channel {
        reference: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("tubescout=info".parse()?))
        .init();

    let cli = Cli::parse();
    let config = Config::from_env();
    config.log_redacted();

    let client = ScrapeClient::new(&config.api_base, &config.api_key);

    match cli.command {
        Commands::Video {
            reference,
            transcript,
        } => {
            let reference = reference.trim();
            if reference.is_empty() {
                bail!("Please enter a YouTube video URL or ID");
            }
            let video_id = resolve(RefKind::Video, reference);
            info!(%video_id, "Scraping video");

            let result = client.scrape_video(&video_id).await?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&result)?);
                return Ok(());
            }

            let view = normalize(RefKind::Video, result);
            render::print_view(&view, cli.full);

            if transcript {
                if let NormalizedView::Video(video) = &view {
                    match &video.video_id {
                        Some(id) => {
                            let bytes = client.download_transcript_pdf(id).await?;
                            let path = format!("{id}.pdf");
                            std::fs::write(&path, bytes)
                                .with_context(|| format!("Failed to write {path}"))?;
                            info!(path = %path, "Transcript saved");
                            println!("\nTranscript saved to {path}");
                        }
                        None => {
                            // Without a video id there is no transcript artifact.
                            warn!("Result carried no video_id, skipping transcript download");
                        }
                    }
                }
            }
        }

        Commands::Channel { reference } => {
            let reference = reference.trim();
            if reference.is_empty() {
                bail!("Please enter a YouTube channel URL or ID");
            }
            let channel_id = resolve(RefKind::Channel, reference);
            info!(%channel_id, "Scraping channel");

            let result = client.scrape_channel(&channel_id).await?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&result)?);
                return Ok(());
            }

            let view = normalize(RefKind::Channel, result);
            render::print_view(&view, cli.full);
        }
    }

    Ok(())
}
