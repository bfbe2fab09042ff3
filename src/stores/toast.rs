use crate::model::ToastKind;
use crate::store::{NoSnapshot, Persist, PersistPolicy, PersistedStore};

/// The single app-wide toast.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ToastState {
    pub visible: bool,
    pub message: String,
    pub kind: ToastKind,
}

impl Persist for ToastState {
    type Snapshot = NoSnapshot;
    const NAME: &'static str = "toast-store";
    const POLICY: PersistPolicy = PersistPolicy::Nothing;

    fn snapshot(&self) -> NoSnapshot {
        NoSnapshot {}
    }

    fn restore(&mut self, _: NoSnapshot) {}
}

pub type ToastStore = PersistedStore<ToastState>;

impl PersistedStore<ToastState> {
    pub fn show_toast(&self, message: impl Into<String>, kind: ToastKind) {
        self.set(ToastState {
            visible: true,
            message: message.into(),
            kind,
        });
    }

    pub fn show_success(&self, message: impl Into<String>) {
        self.show_toast(message, ToastKind::Success);
    }

    pub fn hide_toast(&self) {
        self.set(ToastState::default());
    }
}
