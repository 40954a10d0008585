// src/main.rs
use std::fs;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use qrvis::{
    config::Config,
    models::Matrix,
    render::Renderer,
    style::{RendererStyle, StyleFile},
    surface::SvgSurface,
};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Load config
    let config = Config::load().expect("Failed to load config file");

    // Load style, falling back to the built-in default
    let style = match StyleFile::load(config.resolve_style_path()) {
        Ok(file) => file.into_style().expect("Invalid style file"),
        Err(err) => {
            warn!(%err, "no usable style file, using default style");
            RendererStyle::new(400.0)
        }
    };

    // Load the module matrix, falling back to the built-in demo symbol
    let matrix = match fs::read_to_string(config.resolve_matrix_path()) {
        Ok(text) => Matrix::parse_text(&text),
        Err(err) => {
            warn!(%err, "no matrix file, using demo matrix");
            Matrix::demo()
        }
    };

    let renderer = Renderer::new(style);
    let mut surface = SvgSurface::new();
    let bytes = renderer
        .render(&matrix, &mut surface)
        .expect("Render failed");

    let output_dir = config.resolve_output_dir();
    fs::create_dir_all(&output_dir).expect("Failed to create output directory");
    let output_path = output_dir.join(&config.output.file_name);
    fs::write(&output_path, &bytes).expect("Failed to write output file");

    info!(path = %output_path.display(), bytes = bytes.len(), "symbol written");
}
