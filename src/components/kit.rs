//! Vocabulary of the underlying UI kit.
//!
//! These mirror the prop values the component library accepts. The adapters
//! in this module only ever produce them; nothing here renders.

use std::fmt;

/// Button fill style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Appearance {
    Filled,
    Outline,
    Ghost,
}

/// Semantic color of a control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Primary,
    Success,
    Info,
    Warning,
    Danger,
    Basic,
    Control,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Size {
    Tiny,
    Small,
    #[default]
    Medium,
    Large,
    Giant,
}

/// Typography category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
    S1,
    S2,
    P1,
    P2,
    C1,
    C2,
    Label,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAppearance {
    #[default]
    Default,
    Alternative,
    Hint,
}

/// Keyboard shown for a text input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyboardType {
    #[default]
    Default,
    NumberPad,
    DecimalPad,
    Numeric,
    EmailAddress,
    PhonePad,
}

/// A length that is either absolute points or a percentage of the parent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Dimension {
    Points(f32),
    Percent(f32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontWeight {
    Normal,
    SemiBold,
    Bold,
}

impl FontWeight {
    pub fn as_css(&self) -> &'static str {
        match self {
            FontWeight::Normal => "400",
            FontWeight::SemiBold => "600",
            FontWeight::Bold => "700",
        }
    }
}

/// The subset of style props the adapters set. Unset fields are left to the kit.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Style {
    pub border_radius: Option<f32>,
    pub margin_vertical: Option<f32>,
    pub margin_top: Option<f32>,
    pub margin_bottom: Option<f32>,
    pub margin_left: Option<Dimension>,
    pub padding_vertical: Option<f32>,
    pub min_height: Option<f32>,
    pub width: Option<Dimension>,
    pub font_weight: Option<FontWeight>,
    pub background_color: Option<&'static str>,
}

impl Style {
    /// Overlay `other` on top of `self`, field by field.
    pub fn merge(mut self, other: &Style) -> Style {
        macro_rules! overlay {
            ($($field:ident),*) => {
                $(if other.$field.is_some() {
                    self.$field = other.$field.clone();
                })*
            };
        }
        overlay!(
            border_radius,
            margin_vertical,
            margin_top,
            margin_bottom,
            margin_left,
            padding_vertical,
            min_height,
            width,
            font_weight,
            background_color
        );
        self
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::H1 => "h1",
            Category::H2 => "h2",
            Category::H3 => "h3",
            Category::H4 => "h4",
            Category::H5 => "h5",
            Category::H6 => "h6",
            Category::S1 => "s1",
            Category::S2 => "s2",
            Category::P1 => "p1",
            Category::P2 => "p2",
            Category::C1 => "c1",
            Category::C2 => "c2",
            Category::Label => "label",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_prefers_caller_style() {
        let base = Style {
            border_radius: Some(10.0),
            margin_vertical: Some(4.0),
            ..Style::default()
        };
        let merged = base.merge(&Style {
            margin_vertical: Some(0.0),
            width: Some(Dimension::Percent(100.0)),
            ..Style::default()
        });

        assert_eq!(merged.border_radius, Some(10.0));
        assert_eq!(merged.margin_vertical, Some(0.0));
        assert_eq!(merged.width, Some(Dimension::Percent(100.0)));
    }

    #[test]
    fn category_names() {
        assert_eq!(Category::H3.to_string(), "h3");
        assert_eq!(Category::Label.to_string(), "label");
    }
}
