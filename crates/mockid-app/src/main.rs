// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// MockID CLI — reads a card input file, generates a preview document, and
// exports it as a PNG.

use std::path::PathBuf;

use clap::Parser;
use mockid_app::{CardInput, DocumentSession};
use mockid_core::AppConfig;
use mockid_core::error::Result;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "mockid", version, about = "Synthetic identity document preview generator")]
struct Cli {
    /// Card input JSON file.
    #[arg(long)]
    input: PathBuf,

    /// Optional photo file (JPEG or PNG).
    #[arg(long)]
    photo: Option<PathBuf>,

    /// Export scale factor (output pixels per logical card unit).
    #[arg(long, default_value_t = 3.0)]
    scale: f32,

    /// Directory the exported PNG is written to.
    #[arg(long, default_value = ".")]
    out: PathBuf,

    /// Seed for the random source, for reproducible output.
    #[arg(long)]
    seed: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let input: CardInput = serde_json::from_str(&std::fs::read_to_string(&cli.input)?)?;

    let photo = match &cli.photo {
        Some(path) => Some(mockid_app::photo::decode_photo(std::fs::read(path)?).await?),
        None => None,
    };

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let config = AppConfig {
        export_scale: cli.scale,
        output_dir: cli.out,
        ..AppConfig::default()
    };
    let out_dir = config.output_dir.clone();

    let mut session = DocumentSession::new(config);
    session.generate(&input, photo, &mut rng)?;

    let artifact = session.export().await?;
    let path = artifact.write_to_dir(&out_dir)?;
    info!(path = %path.display(), "export written");

    Ok(())
}
