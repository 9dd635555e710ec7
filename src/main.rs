use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use qrpng::raster::{DEFAULT_BORDER, DEFAULT_SCALE};
use qrpng::{EccLevel, QrCodeGenerator};

/// Render text as a QR code PNG.
#[derive(Parser, Debug)]
#[command(name = "qrpng", version, about)]
struct Cli {
    /// Text to encode
    text: String,

    /// Write the PNG here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Pixels per module
    #[arg(long, default_value_t = DEFAULT_SCALE)]
    scale: u32,

    /// Quiet-zone width in modules
    #[arg(long, default_value_t = DEFAULT_BORDER)]
    border: u32,

    /// Error correction level (L, M, Q, H)
    #[arg(long, default_value_t = EccLevel::Medium)]
    ecc: EccLevel,
}

fn main() -> Result<()> {
    // stdout may carry the image, so logs go to stderr.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    let cli = Cli::parse();
    log::debug!("{:?}", cli);

    let generator = QrCodeGenerator::builder()
        .ecc(cli.ecc)
        .scale(cli.scale)
        .border(cli.border)
        .build();
    log::debug!("ecc {}, {:?}", generator.ecc(), generator.options());
    let png = generator.generate(&cli.text).context("failed to generate QR code")?;

    match cli.output {
        Some(path) => {
            if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
                fs::create_dir_all(dir)
                    .with_context(|| format!("failed to create {}", dir.display()))?;
            }
            fs::write(&path, &png).with_context(|| format!("failed to write {}", path.display()))?;
            log::info!("wrote {} bytes to {}", png.len(), path.display());
        }
        None => {
            let mut out = io::stdout().lock();
            out.write_all(&png).context("failed to write to stdout")?;
            out.flush()?;
        }
    }
    Ok(())
}
