use std::fmt;
use std::sync::Arc;

use super::kit::{Category, Dimension, FontWeight, KeyboardType, Style};

/// Line height the multiline min-height is computed from.
const LINE_HEIGHT: f32 = 20.0;
/// Min-height of a multiline input without an explicit line count.
const DEFAULT_MULTILINE_HEIGHT: f32 = 60.0;

#[derive(Debug, Clone, PartialEq)]
pub struct InputProps {
    pub placeholder: Option<String>,
    pub value: Option<String>,
    pub multiline: bool,
    pub keyboard_type: KeyboardType,
    pub style: Style,
    /// Only set for multiline inputs.
    pub text_style: Option<Style>,
}

/// Text field. Every keystroke is forwarded to `on_change_text` as is.
#[derive(Default)]
pub struct Input {
    placeholder: Option<String>,
    value: Option<String>,
    multiline: bool,
    number_of_lines: Option<u16>,
    keyboard_type: KeyboardType,
    style: Style,
    on_change_text: Option<Arc<dyn Fn(&str) + Send + Sync>>,
}

impl Input {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn multiline(mut self, multiline: bool) -> Self {
        self.multiline = multiline;
        self
    }

    pub fn number_of_lines(mut self, lines: u16) -> Self {
        self.number_of_lines = Some(lines);
        self
    }

    pub fn keyboard_type(mut self, keyboard_type: KeyboardType) -> Self {
        self.keyboard_type = keyboard_type;
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn on_change_text<F>(mut self, callback: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.on_change_text = Some(Arc::new(callback));
        self
    }

    pub fn props(&self) -> InputProps {
        let base = Style {
            margin_vertical: Some(4.0),
            border_radius: Some(8.0),
            ..Style::default()
        };
        let text_style = self.multiline.then(|| {
            let min_height = match self.number_of_lines {
                Some(lines) if lines > 0 => f32::from(lines) * LINE_HEIGHT,
                _ => DEFAULT_MULTILINE_HEIGHT,
            };
            Style {
                min_height: Some(min_height),
                ..Style::default()
            }
        });
        InputProps {
            placeholder: self.placeholder.clone(),
            value: self.value.clone(),
            multiline: self.multiline,
            keyboard_type: self.keyboard_type,
            style: base.merge(&self.style),
            text_style,
        }
    }

    /// Deliver an edit. Returns whether a callback was attached.
    pub fn change_text(&self, text: &str) -> bool {
        match &self.on_change_text {
            Some(callback) => {
                callback(text);
                true
            }
            None => false,
        }
    }
}

impl fmt::Debug for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Input")
            .field("placeholder", &self.placeholder)
            .field("value", &self.value)
            .field("multiline", &self.multiline)
            .field("number_of_lines", &self.number_of_lines)
            .field("on_change_text", &self.on_change_text.is_some())
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LabelProps {
    pub content: String,
    pub category: Category,
    pub style: Style,
}

/// Form field caption.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    content: String,
    style: Style,
}

impl Label {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            style: Style::default(),
        }
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn props(&self) -> LabelProps {
        let base = Style {
            margin_bottom: Some(2.0),
            margin_left: Some(Dimension::Percent(3.0)),
            font_weight: Some(FontWeight::SemiBold),
            ..Style::default()
        };
        LabelProps {
            content: self.content.clone(),
            category: Category::Label,
            style: base.merge(&self.style),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn single_line_has_no_text_style() {
        let props = Input::new().placeholder("Stadeholder").props();
        assert_eq!(props.text_style, None);
        assert_eq!(props.style.border_radius, Some(8.0));
    }

    #[test]
    fn multiline_min_height() {
        let props = Input::new().multiline(true).number_of_lines(4).props();
        assert_eq!(props.text_style.unwrap().min_height, Some(80.0));

        let props = Input::new().multiline(true).props();
        assert_eq!(props.text_style.unwrap().min_height, Some(60.0));
    }

    #[test]
    fn change_text_forwards_verbatim() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let input = Input::new()
            .keyboard_type(KeyboardType::NumberPad)
            .on_change_text(move |text| sink.lock().unwrap().push(text.to_string()));

        assert!(input.change_text("12"));
        assert!(input.change_text(" 12 "));
        assert_eq!(*seen.lock().unwrap(), ["12", " 12 "]);
        assert!(!Input::new().change_text("x"));
    }

    #[test]
    fn label_props() {
        let props = Label::new("Kommentar").props();
        assert_eq!(props.category, Category::Label);
        assert_eq!(props.style.margin_left, Some(Dimension::Percent(3.0)));
        assert_eq!(props.style.font_weight, Some(FontWeight::SemiBold));
    }
}
