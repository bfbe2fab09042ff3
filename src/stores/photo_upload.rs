use crate::model::PhotoUploadProgress;
use crate::store::Store;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PhotoUploadState {
    pub upload_progress: PhotoUploadProgress,
}

/// Progress of the current photo upload. Never persisted.
pub type PhotoUploadStore = Store<PhotoUploadState>;

impl Store<PhotoUploadState> {
    pub fn set_upload_progress(&self, progress: PhotoUploadProgress) {
        self.update(|s| s.upload_progress = progress);
    }

    pub fn reset_upload(&self) {
        self.set(PhotoUploadState::default());
    }
}
