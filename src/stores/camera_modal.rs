//! Camera modal state.

use serde::{Deserialize, Serialize};

use crate::model::CameraFacing;
use crate::store::{Persist, PersistPolicy, PersistedStore};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CameraModalState {
    pub facing: CameraFacing,
    /// Local URI of the last capture.
    pub captured_image: Option<String>,
    pub is_processing: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CameraModalSnapshot {
    pub facing: CameraFacing,
}

impl Persist for CameraModalState {
    type Snapshot = CameraModalSnapshot;
    const NAME: &'static str = "camera-modal-store";
    const POLICY: PersistPolicy = PersistPolicy::Fields(&["facing"]);

    fn snapshot(&self) -> CameraModalSnapshot {
        CameraModalSnapshot {
            facing: self.facing,
        }
    }

    fn restore(&mut self, snapshot: CameraModalSnapshot) {
        self.facing = snapshot.facing;
    }
}

pub type CameraModalStore = PersistedStore<CameraModalState>;

impl PersistedStore<CameraModalState> {
    pub fn set_facing(&self, facing: CameraFacing) {
        self.update(|s| s.facing = facing);
    }

    pub fn toggle_facing(&self) {
        self.update(|s| {
            s.facing = match s.facing {
                CameraFacing::Front => CameraFacing::Back,
                CameraFacing::Back => CameraFacing::Front,
            }
        });
    }

    pub fn set_captured_image(&self, uri: Option<String>) {
        self.update(|s| s.captured_image = uri);
    }

    pub fn set_is_processing(&self, processing: bool) {
        self.update(|s| s.is_processing = processing);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stores::test_writer;

    #[tokio::test]
    async fn only_facing_survives_restart() {
        let (_, writer) = test_writer();
        let store = CameraModalStore::with_defaults(writer.clone());
        store.toggle_facing();
        store.set_captured_image(Some("file:///tmp/capture.jpg".to_string()));
        store.set_is_processing(true);
        store.flush().await;

        let restarted = CameraModalStore::with_defaults(writer);
        restarted.hydrate().await;
        assert_eq!(
            restarted.get(),
            CameraModalState {
                facing: CameraFacing::Front,
                captured_image: None,
                is_processing: false,
            }
        );
    }
}
