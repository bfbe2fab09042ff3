//! Icons used by the adapters.

/// Vector icon drawn from a single path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SvgIcon {
    pub width: f32,
    pub height: f32,
    pub view_box: &'static str,
    pub path: &'static str,
    pub fill: &'static str,
}

const FACEBOOK_PATH: &str = "M18,32V18h6l1-6h-7V9c0-2,1.002-3,3-3h3V0c-1,0-3.24,0-5,0c-5,0-7,3-7,8v4H6v6h6v14H18z";

/// Facebook "f" mark in brand blue, 32×32 unless resized.
pub fn facebook_icon(width: Option<f32>, height: Option<f32>) -> SvgIcon {
    SvgIcon {
        width: width.unwrap_or(32.0),
        height: height.unwrap_or(32.0),
        view_box: "0 0 32 32",
        path: FACEBOOK_PATH,
        fill: "#1877F2",
    }
}

/// Glyph from the bundled Ionicons font.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ionicon {
    CheckmarkCircle,
    CloseCircle,
    InformationCircle,
}

impl Ionicon {
    pub fn name(self) -> &'static str {
        match self {
            Ionicon::CheckmarkCircle => "checkmark-circle",
            Ionicon::CloseCircle => "close-circle",
            Ionicon::InformationCircle => "information-circle",
        }
    }
}
