//! Presentation adapters over the UI kit.
//!
//! Each adapter takes a narrow set of app-level props and turns them into the
//! kit's vocabulary (see [`kit`]). Variant mappings are exhaustive `match`es,
//! so adding a variant without deciding its mapping does not compile.
//! Callbacks fire synchronously; nothing is debounced or validated.

pub mod kit;

mod button;
mod card;
mod icon;
mod input;
mod text;
mod toast;
mod upload_progress;

pub use button::{Button, ButtonProps, ButtonVariant};
pub use card::{
    card_content_style, card_description, card_footer_style, card_header_style, card_style,
    card_title,
};
pub use icon::{facebook_icon, Ionicon, SvgIcon};
pub use input::{Input, InputProps, Label, LabelProps};
pub use text::{Text, TextProps, TextVariant};
pub use toast::{toast_background, toast_icon, toast_view, ToastView, TOAST_DURATION_MS};
pub use upload_progress::{upload_color, upload_progress_view, upload_status_key, UploadProgressView};
