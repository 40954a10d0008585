// src/style/style_file.rs
// The JSON-based style document loaded by the CLI

use serde::Deserialize;
use std::error::Error;
use std::fs;
use std::path::Path as FsPath;

use crate::services::path_data;

use super::fill::FillSet;
use super::shape::{EyeShape, ModuleShape};
use super::RendererStyle;

#[derive(Debug, Deserialize)]
pub struct StyleFile {
    pub size: f64,
    #[serde(default = "default_margin")]
    pub margin: f64,
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(rename = "moduleShape", default)]
    pub module_shape: ModuleShapeSpec,
    #[serde(rename = "eyeShape", default)]
    pub eye_shape: EyeShapeSpec,
    #[serde(default)]
    pub fill: FillSet,
}

fn default_margin() -> f64 {
    4.0
}

/// Module shape as written in the style file. Custom shapes carry SVG
/// path data, stamped inside the unit cell.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleShapeSpec {
    Square,
    Dot,
    Custom { path: String },
}

impl Default for ModuleShapeSpec {
    fn default() -> Self {
        ModuleShapeSpec::Square
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EyeShapeSpec {
    Square,
    Custom { external: String, internal: String },
}

impl Default for EyeShapeSpec {
    fn default() -> Self {
        EyeShapeSpec::Square
    }
}

impl StyleFile {
    pub fn load<P: AsRef<FsPath>>(path: P) -> Result<Self, Box<dyn Error>> {
        let content = fs::read_to_string(path)?;
        let style: StyleFile = serde_json::from_str(&content)?;
        Ok(style)
    }

    /// Converts the document into a ready-to-use style, parsing any
    /// custom SVG path data.
    pub fn into_style(self) -> Result<RendererStyle, Box<dyn Error>> {
        let module_shape = match self.module_shape {
            ModuleShapeSpec::Square => ModuleShape::Square,
            ModuleShapeSpec::Dot => ModuleShape::Dot,
            ModuleShapeSpec::Custom { path } => ModuleShape::Custom(
                path_data::parse_path_data(&path)
                    .ok_or_else(|| format!("invalid module path data: '{}'", path))?,
            ),
        };

        let eye_shape = match self.eye_shape {
            EyeShapeSpec::Square => EyeShape::Square,
            EyeShapeSpec::Custom { external, internal } => EyeShape::Custom {
                external: path_data::parse_path_data(&external)
                    .ok_or_else(|| format!("invalid external eye path data: '{}'", external))?,
                internal: path_data::parse_path_data(&internal)
                    .ok_or_else(|| format!("invalid internal eye path data: '{}'", internal))?,
            },
        };

        Ok(RendererStyle {
            size: self.size,
            margin: self.margin,
            x: self.x,
            y: self.y,
            module_shape,
            eye_shape,
            fill: self.fill,
        })
    }
}
