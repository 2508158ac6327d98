use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use drawpp_engine::canvas::Canvas;
use drawpp_engine::logging::{init_logging, LoggingConfig};

mod scenes;

/// Renders drawpp demo scenes to PNG files.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Log filter in `env_logger` syntax; falls back to `RUST_LOG`.
    #[arg(long, global = true)]
    log: Option<String>,

    #[command(subcommand)]
    demo: Demo,
}

#[derive(Subcommand, Debug)]
enum Demo {
    /// Three overlapping squares, the middle one half transparent.
    Squares {
        #[arg(short, long, default_value = "output.png")]
        out: PathBuf,
    },
    /// A fan of translucent triangles.
    Triangles {
        #[arg(short, long, default_value = "triangles.png")]
        out: PathBuf,
    },
    /// Prints the similarity score of two equally sized images.
    Compare { a: PathBuf, b: PathBuf },
    /// Paints a procedural mustache over an image.
    Mustache {
        image: PathBuf,
        #[arg(short, long, default_value = "mustache.png")]
        out: PathBuf,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(LoggingConfig { env_filter: args.log.clone(), ..Default::default() });

    match args.demo {
        Demo::Squares { out } => save(&scenes::squares(), out),
        Demo::Triangles { out } => save(&scenes::triangles(), out),
        Demo::Compare { a, b } => {
            let ca = scenes::image_canvas(&a)?;
            let cb = scenes::image_canvas(&b)?;
            if (ca.width(), ca.height()) != (cb.width(), cb.height()) {
                bail!(
                    "cannot compare {}x{} with {}x{}",
                    ca.width(),
                    ca.height(),
                    cb.width(),
                    cb.height()
                );
            }
            let score = ca.compare(&cb);
            println!("compare value: {score}");
            println!("1/compare: {}", 1.0 / score);
            Ok(())
        }
        Demo::Mustache { image, out } => save(&scenes::mustache(&image)?, out),
    }
}

fn save(canvas: &Canvas, out: PathBuf) -> Result<()> {
    canvas.save_png(&out).with_context(|| format!("writing {}", out.display()))?;
    log::info!("wrote {}", out.display());
    Ok(())
}
