use std::fmt;
use std::sync::Arc;

use super::kit::{Appearance, Size, Status, Style};

/// App-level button look.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Default,
    Destructive,
    Outline,
    Secondary,
    Ghost,
    Link,
}

impl ButtonVariant {
    pub fn appearance(self) -> Appearance {
        match self {
            ButtonVariant::Outline => Appearance::Outline,
            ButtonVariant::Ghost | ButtonVariant::Link => Appearance::Ghost,
            ButtonVariant::Default | ButtonVariant::Destructive | ButtonVariant::Secondary => {
                Appearance::Filled
            }
        }
    }

    pub fn status(self) -> Status {
        match self {
            ButtonVariant::Destructive => Status::Danger,
            ButtonVariant::Secondary => Status::Basic,
            ButtonVariant::Default
            | ButtonVariant::Outline
            | ButtonVariant::Ghost
            | ButtonVariant::Link => Status::Primary,
        }
    }
}

/// Props handed to the kit's button.
#[derive(Debug, Clone, PartialEq)]
pub struct ButtonProps {
    pub label: String,
    pub appearance: Appearance,
    pub status: Status,
    pub size: Size,
    pub style: Style,
    pub disabled: bool,
}

pub struct Button {
    label: String,
    variant: ButtonVariant,
    size: Size,
    style: Style,
    disabled: bool,
    on_press: Option<Arc<dyn Fn() + Send + Sync>>,
}

impl Button {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            variant: ButtonVariant::Default,
            size: Size::Medium,
            style: Style::default(),
            disabled: false,
            on_press: None,
        }
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn on_press<F>(mut self, callback: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_press = Some(Arc::new(callback));
        self
    }

    pub fn props(&self) -> ButtonProps {
        let base = Style {
            border_radius: Some(10.0),
            margin_vertical: Some(4.0),
            ..Style::default()
        };
        ButtonProps {
            label: self.label.clone(),
            appearance: self.variant.appearance(),
            status: self.variant.status(),
            size: self.size,
            style: base.merge(&self.style),
            disabled: self.disabled,
        }
    }

    /// Deliver a tap. Returns whether the callback ran; disabled buttons
    /// swallow taps like the kit does.
    pub fn press(&self) -> bool {
        match (&self.on_press, self.disabled) {
            (Some(callback), false) => {
                callback();
                true
            }
            _ => false,
        }
    }
}

impl fmt::Debug for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Button")
            .field("label", &self.label)
            .field("variant", &self.variant)
            .field("size", &self.size)
            .field("disabled", &self.disabled)
            .field("on_press", &self.on_press.is_some())
            .finish()
    }
}
