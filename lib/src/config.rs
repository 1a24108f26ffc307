use crate::color::Color;
use serde::{Deserialize, Serialize};

/// Control points scattered per base color when the caller does not say
/// otherwise.
pub const DEFAULT_POINTS_PER_COLOR: u32 = 5;

fn default_points_per_color() -> u32 {
    DEFAULT_POINTS_PER_COLOR
}

/// One render request: the palette to blend and the surface to cover.
/// The core holds no state between requests; the shell rebuilds a config
/// and calls [`crate::render`] whenever anything changed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeshConfig {
    pub base_colors: Vec<Color>,
    #[serde(default = "default_points_per_color")]
    pub points_per_color: u32,
    pub width: u32,
    pub height: u32,
}

impl MeshConfig {
    pub fn with_preset(base_colors: Vec<Color>, points_per_color: u32, preset: SurfacePreset) -> Self {
        let (width, height) = preset.dimensions();

        MeshConfig {
            base_colors,
            points_per_color,
            width,
            height,
        }
    }
}

/// Surface dimension presets offered by the shell. Width and height are
/// opaque to the core; new presets can be added without touching it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SurfacePreset {
    /// 1080x1080
    Square,
    /// 1080x1920
    Reel,
    /// 1200x675
    Post,
}

impl SurfacePreset {
    pub fn dimensions(self) -> (u32, u32) {
        match self {
            SurfacePreset::Square => (1080, 1080),
            SurfacePreset::Reel => (1080, 1920),
            SurfacePreset::Post => (1200, 675),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn presets_map_to_their_dimensions() {
        assert_eq!(SurfacePreset::Square.dimensions(), (1080, 1080));
        assert_eq!(SurfacePreset::Reel.dimensions(), (1080, 1920));
        assert_eq!(SurfacePreset::Post.dimensions(), (1200, 675));
    }

    #[test]
    fn config_deserializes_with_default_point_count() {
        let json = r##"{
            "base_colors": ["#ff0000", "#0000ff"],
            "width": 1200,
            "height": 675
        }"##;

        let config: MeshConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.base_colors.len(), 2);
        assert_eq!(config.points_per_color, DEFAULT_POINTS_PER_COLOR);
        assert_eq!((config.width, config.height), (1200, 675));
    }

    #[test]
    fn invalid_color_fails_at_configuration_build_time() {
        let json = r##"{
            "base_colors": ["#ff0000", "not-a-color"],
            "width": 100,
            "height": 100
        }"##;

        assert!(serde_json::from_str::<MeshConfig>(json).is_err());
    }
}
