//! Card container and its parts.

use super::kit::{Category, FontWeight, Style, TextAppearance};
use super::text::TextProps;

pub fn card_style() -> Style {
    Style {
        margin_vertical: Some(8.0),
        border_radius: Some(12.0),
        ..Style::default()
    }
}

pub fn card_header_style() -> Style {
    Style {
        margin_bottom: Some(12.0),
        ..Style::default()
    }
}

pub fn card_content_style() -> Style {
    Style {
        padding_vertical: Some(4.0),
        ..Style::default()
    }
}

pub fn card_footer_style() -> Style {
    Style {
        margin_top: Some(12.0),
        ..Style::default()
    }
}

pub fn card_title(content: impl Into<String>) -> TextProps {
    TextProps {
        content: content.into(),
        category: Category::H6,
        appearance: TextAppearance::Default,
        style: Style {
            font_weight: Some(FontWeight::SemiBold),
            ..Style::default()
        },
    }
}

pub fn card_description(content: impl Into<String>) -> TextProps {
    TextProps {
        content: content.into(),
        category: Category::S1,
        appearance: TextAppearance::Hint,
        style: Style::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_and_description() {
        let title = card_title("Om markedet");
        assert_eq!(title.category, Category::H6);
        assert_eq!(title.style.font_weight, Some(FontWeight::SemiBold));

        let description = card_description("Hver lørdag");
        assert_eq!(description.category, Category::S1);
        assert_eq!(description.appearance, TextAppearance::Hint);
    }
}
