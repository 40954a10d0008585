// src/config/config_types.rs
//
// Config types for the CLI

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct PathConfig {
    pub style_file: String,
    pub matrix_file: String,
    pub output_directory: String,
}

#[derive(Debug, Deserialize)]
pub struct OutputConfig {
    pub file_name: String,
}
