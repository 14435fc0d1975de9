// Calendar font loading with fallback to the egui default face

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use egui::{FontData, FontDefinitions, FontFamily};
use log::{info, warn};

use crate::errors::LauncherError;

pub const CALENDAR_FONT_FAMILY: &str = "Formula1";
pub const FONT_FILES: [&str; 3] = [
    "Formula1-Regular-1.ttf",
    "Formula1-Bold_web.ttf",
    "Formula1-Wide.ttf",
];

#[derive(Debug, Clone)]
pub struct LoadedFont {
    pub name: String,
    pub bytes: Vec<u8>,
}

/// `<dir of the launcher executable>/../fonts`
pub fn default_font_dir() -> Option<PathBuf> {
    let exe = std::env::current_exe().ok()?;
    Some(exe.parent()?.join("..").join("fonts"))
}

pub fn load_font_file(path: &Path) -> Result<LoadedFont, LauncherError> {
    let bytes = fs::read(path).map_err(|e| LauncherError::FontLoadError {
        path: path.to_path_buf(),
        source: e,
    })?;
    // egui panics on the first frame for fonts it can't parse
    ab_glyph::FontRef::try_from_slice(&bytes).map_err(|e| LauncherError::InvalidFontFile {
        path: path.to_path_buf(),
        source: e,
    })?;
    let name = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(CALENDAR_FONT_FAMILY)
        .to_string();
    Ok(LoadedFont { name, bytes })
}

/// Load every calendar font found in `font_dir`. Missing or unparseable files are logged and
/// skipped.
pub fn load_font_files(font_dir: &Path) -> Vec<LoadedFont> {
    FONT_FILES
        .iter()
        .filter_map(|file| match load_font_file(&font_dir.join(file)) {
            Ok(font) => {
                info!("Loaded font '{}'", file);
                Some(font)
            }
            Err(e) => {
                warn!("{}", e);
                None
            }
        })
        .collect()
}

/// egui font setup with a `Formula1` family: the loaded fonts first, then the default
/// proportional fonts so glyphs always resolve.
pub fn font_definitions(fonts: Vec<LoadedFont>) -> FontDefinitions {
    let mut definitions = FontDefinitions::default();

    let mut family: Vec<String> = Vec::with_capacity(fonts.len());
    for font in fonts {
        family.push(font.name.clone());
        definitions
            .font_data
            .insert(font.name, Arc::new(FontData::from_owned(font.bytes)));
    }

    let fallback = definitions
        .families
        .get(&FontFamily::Proportional)
        .cloned()
        .unwrap_or_default();
    family.extend(fallback);

    definitions
        .families
        .insert(FontFamily::Name(CALENDAR_FONT_FAMILY.into()), family);
    definitions
}

pub fn calendar_family() -> FontFamily {
    FontFamily::Name(CALENDAR_FONT_FAMILY.into())
}
