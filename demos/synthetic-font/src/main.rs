//! Writes a generated multi-page bitmap font to disk.
//!
//! Configuration is read from the environment; see [`config::DemoConfig`]
//! and [`logging::LoggingConfig`].

mod config;
mod logging;
mod synth;

use color_eyre::eyre::{Context, Result};

use crate::{
    config::DemoConfig,
    logging::{LoggingConfig, init_logging},
};

fn main() -> Result<()> {
    // panic hook
    color_eyre::install()?;

    let _guard =
        init_logging(&LoggingConfig::from_env()).wrap_err("Failed to initialize logging")?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "synthetic-font starting up"
    );

    let config = DemoConfig::from_env()?;
    let info = config.load_info()?;

    if let Some(dir) = config.output.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)
            .wrap_err_with(|| format!("Failed to create '{}'", dir.display()))?;
    }

    let font = synth::generate(config.pages);
    let pages =
        bmfont_writer::write_font_with_pages(&font.data, &font.pages, &config.output, info.as_ref())
            .wrap_err_with(|| format!("Failed to write '{}'", config.output.display()))?;

    println!("\nBitmap font written!");
    println!("Font file: {}", config.output.display());
    println!("Glyph count: {}", font.data.glyph_count());
    println!(
        "Kerning pairs: {}",
        bmfont_writer::FontDocument::from_font(&font.data, &pages)
            .kerning_pairs()
            .len()
    );
    for (id, file) in pages.iter() {
        println!("Page {id}: {file}");
    }

    Ok(())
}
