use super::kit::{Category, Style, TextAppearance};

/// App-level typography.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextVariant {
    #[default]
    Default,
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
    Lead,
    Muted,
    Small,
}

impl TextVariant {
    pub fn category(self) -> Category {
        match self {
            TextVariant::H1 => Category::H1,
            TextVariant::H2 => Category::H2,
            TextVariant::H3 => Category::H3,
            TextVariant::H4 => Category::H4,
            TextVariant::H5 => Category::H5,
            TextVariant::H6 => Category::H6,
            TextVariant::Lead => Category::P1,
            TextVariant::Muted => Category::S1,
            TextVariant::Small => Category::C1,
            TextVariant::Default => Category::P1,
        }
    }

    pub fn appearance(self) -> TextAppearance {
        match self {
            TextVariant::Muted => TextAppearance::Hint,
            _ => TextAppearance::Default,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextProps {
    pub content: String,
    pub category: Category,
    pub appearance: TextAppearance,
    pub style: Style,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    content: String,
    variant: TextVariant,
    style: Style,
}

impl Text {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            variant: TextVariant::Default,
            style: Style::default(),
        }
    }

    pub fn variant(mut self, variant: TextVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn props(&self) -> TextProps {
        TextProps {
            content: self.content.clone(),
            category: self.variant.category(),
            appearance: self.variant.appearance(),
            style: self.style.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variant_mapping_table() {
        let table = [
            (TextVariant::Default, Category::P1, TextAppearance::Default),
            (TextVariant::H1, Category::H1, TextAppearance::Default),
            (TextVariant::H2, Category::H2, TextAppearance::Default),
            (TextVariant::H3, Category::H3, TextAppearance::Default),
            (TextVariant::H4, Category::H4, TextAppearance::Default),
            (TextVariant::H5, Category::H5, TextAppearance::Default),
            (TextVariant::H6, Category::H6, TextAppearance::Default),
            (TextVariant::Lead, Category::P1, TextAppearance::Default),
            (TextVariant::Muted, Category::S1, TextAppearance::Hint),
            (TextVariant::Small, Category::C1, TextAppearance::Default),
        ];
        for (variant, category, appearance) in table {
            assert_eq!(variant.category(), category, "{variant:?}");
            assert_eq!(variant.appearance(), appearance, "{variant:?}");
        }
    }

    #[test]
    fn muted_text_props() {
        let props = Text::new("12 bedømmelser").variant(TextVariant::Muted).props();
        assert_eq!(props.category, Category::S1);
        assert_eq!(props.appearance, TextAppearance::Hint);
        assert_eq!(props.content, "12 bedømmelser");
    }
}
