use super::icon::Ionicon;
use crate::model::ToastKind;
use crate::stores::ToastState;

/// How long a toast stays before it hides itself.
pub const TOAST_DURATION_MS: u64 = 3000;

/// Everything the toast overlay needs to draw.
#[derive(Debug, Clone, PartialEq)]
pub struct ToastView {
    pub message: String,
    pub background_color: &'static str,
    pub icon: Ionicon,
    pub icon_color: &'static str,
}

pub fn toast_background(kind: ToastKind) -> &'static str {
    match kind {
        ToastKind::Success => "#10B981",
        ToastKind::Error => "#EF4444",
        ToastKind::Info => "#3366FF",
    }
}

pub fn toast_icon(kind: ToastKind) -> Ionicon {
    match kind {
        ToastKind::Success => Ionicon::CheckmarkCircle,
        ToastKind::Error => Ionicon::CloseCircle,
        ToastKind::Info => Ionicon::InformationCircle,
    }
}

/// `None` while the toast is hidden.
pub fn toast_view(state: &ToastState) -> Option<ToastView> {
    if !state.visible {
        return None;
    }
    Some(ToastView {
        message: state.message.clone(),
        background_color: toast_background(state.kind),
        icon: toast_icon(state.kind),
        icon_color: "#FFFFFF",
    })
}
