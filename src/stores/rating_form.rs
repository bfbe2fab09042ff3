//! The stall/market rating form.
//!
//! Form fields are kept across restarts so a half-written rating is not lost;
//! modal and submission flags always start cleared.

use serde::{Deserialize, Serialize};

use crate::model::RatingType;
use crate::store::{Persist, PersistPolicy, PersistedStore};

/// Rating a fresh form starts with.
pub const DEFAULT_RATING: u8 = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RatingFormState {
    pub rating: u8,
    pub rating_type: RatingType,
    pub stall_name: String,
    pub mobile_pay_code: String,
    pub comments: String,
    pub photo_uri: Option<String>,
    pub show_full_screen: bool,
    pub show_camera: bool,
    pub is_submitting: bool,
}

impl Default for RatingFormState {
    fn default() -> Self {
        Self {
            rating: DEFAULT_RATING,
            rating_type: RatingType::Stall,
            stall_name: String::new(),
            mobile_pay_code: String::new(),
            comments: String::new(),
            photo_uri: None,
            show_full_screen: false,
            show_camera: false,
            is_submitting: false,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingFormSnapshot {
    pub rating: u8,
    pub rating_type: RatingType,
    pub stall_name: String,
    pub mobile_pay_code: String,
    pub comments: String,
    pub photo_uri: Option<String>,
}

impl Persist for RatingFormState {
    type Snapshot = RatingFormSnapshot;
    const NAME: &'static str = "rating-form-store";
    const POLICY: PersistPolicy = PersistPolicy::Fields(&[
        "rating",
        "ratingType",
        "stallName",
        "mobilePayCode",
        "comments",
        "photoUri",
    ]);

    fn snapshot(&self) -> RatingFormSnapshot {
        RatingFormSnapshot {
            rating: self.rating,
            rating_type: self.rating_type,
            stall_name: self.stall_name.clone(),
            mobile_pay_code: self.mobile_pay_code.clone(),
            comments: self.comments.clone(),
            photo_uri: self.photo_uri.clone(),
        }
    }

    fn restore(&mut self, snapshot: RatingFormSnapshot) {
        self.rating = snapshot.rating;
        self.rating_type = snapshot.rating_type;
        self.stall_name = snapshot.stall_name;
        self.mobile_pay_code = snapshot.mobile_pay_code;
        self.comments = snapshot.comments;
        self.photo_uri = snapshot.photo_uri;
    }
}

pub type RatingFormStore = PersistedStore<RatingFormState>;

impl PersistedStore<RatingFormState> {
    pub fn set_rating(&self, rating: u8) {
        self.update(|s| s.rating = rating);
    }

    pub fn set_rating_type(&self, rating_type: RatingType) {
        self.update(|s| s.rating_type = rating_type);
    }

    pub fn set_stall_name(&self, name: impl Into<String>) {
        let name = name.into();
        self.update(|s| s.stall_name = name);
    }

    pub fn set_mobile_pay_code(&self, code: impl Into<String>) {
        let code = code.into();
        self.update(|s| s.mobile_pay_code = code);
    }

    pub fn set_comments(&self, comments: impl Into<String>) {
        let comments = comments.into();
        self.update(|s| s.comments = comments);
    }

    pub fn set_photo_uri(&self, uri: Option<String>) {
        self.update(|s| s.photo_uri = uri);
    }

    pub fn set_show_full_screen(&self, show: bool) {
        self.update(|s| s.show_full_screen = show);
    }

    pub fn set_show_camera(&self, show: bool) {
        self.update(|s| s.show_camera = show);
    }

    pub fn set_is_submitting(&self, submitting: bool) {
        self.update(|s| s.is_submitting = submitting);
    }

    pub fn reset_form(&self) {
        self.set(RatingFormState::default());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stores::test_writer;

    fn filled(store: &RatingFormStore) {
        store.set_rating(3);
        store.set_rating_type(RatingType::Market);
        store.set_stall_name("Fars gamle bøger");
        store.set_mobile_pay_code("12345");
        store.set_comments("Fine priser");
        store.set_photo_uri(Some("file:///photo.jpg".to_string()));
        store.set_show_camera(true);
        store.set_show_full_screen(true);
        store.set_is_submitting(true);
    }

    #[tokio::test]
    async fn draft_survives_restart_flags_do_not() {
        let (_, writer) = test_writer();
        let store = RatingFormStore::with_defaults(writer.clone());
        filled(&store);
        store.flush().await;

        let restarted = RatingFormStore::with_defaults(writer);
        restarted.hydrate().await;
        let state = restarted.get();

        assert_eq!(state.rating, 3);
        assert_eq!(state.rating_type, RatingType::Market);
        assert_eq!(state.stall_name, "Fars gamle bøger");
        assert_eq!(state.photo_uri.as_deref(), Some("file:///photo.jpg"));
        assert!(!state.show_camera);
        assert!(!state.show_full_screen);
        assert!(!state.is_submitting);
    }

    #[tokio::test]
    async fn reset_restores_defaults_and_storage() {
        let (storage, writer) = test_writer();
        let store = RatingFormStore::with_defaults(writer);
        filled(&store);
        store.reset_form();
        store.flush().await;

        assert_eq!(store.get(), RatingFormState::default());
        let raw: serde_json::Value =
            serde_json::from_slice(&storage.get_raw("rating-form-store").unwrap()).unwrap();
        assert_eq!(raw["state"]["rating"], 5);
        assert_eq!(raw["state"]["ratingType"], "stall");
        assert_eq!(raw["state"]["photoUri"], serde_json::Value::Null);
    }
}
