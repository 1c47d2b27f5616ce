use anyhow::{anyhow, Context, Result};
use rusttype::{Font, Scale};
use std::fs;
use std::path::Path;

pub struct FontConfig {
    pub font: Font<'static>,
    pub scale: Scale,
}

/// The font faces used by the snapshot, all cut from one TTF file.
pub struct Fonts {
    pub title: FontConfig,
    pub regular: FontConfig,
    pub small: FontConfig,
}

impl Fonts {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let bytes =
            fs::read(path).context(format!("Failed to read font {}", path.display()))?;
        let font = Font::try_from_vec(bytes)
            .ok_or_else(|| anyhow!("{} is not a usable TrueType font", path.display()))?;

        Ok(Self {
            title: get_font_config(&font, 28.0),
            regular: get_font_config(&font, 24.0),
            small: get_font_config(&font, 20.0),
        })
    }
}

fn get_font_config(font: &Font<'static>, scale: f32) -> FontConfig {
    FontConfig {
        font: font.clone(),
        scale: Scale::uniform(scale),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_missing_font_file() {
        assert!(Fonts::load("/nonexistent/font.ttf").is_err());
    }

    #[test]
    fn test_garbage_font_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"definitely not a font").unwrap();
        assert!(Fonts::load(temp_file.path()).is_err());
    }
}
