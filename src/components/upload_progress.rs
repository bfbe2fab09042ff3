use crate::model::PhotoUploadProgress;

const ERROR_COLOR: &str = "#ff3b30";
const DONE_COLOR: &str = "#34c759";
const ACTIVE_COLOR: &str = "#007AFF";

/// Modal shown while a rating photo is blurred and uploaded.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadProgressView {
    /// Translation key of the status line.
    pub status_key: &'static str,
    pub color: &'static str,
    /// Bar fill, clamped to 0–100.
    pub bar_percent: f64,
    /// Rounded percentage for the caption.
    pub percent_label: String,
    pub error: Option<String>,
}

pub fn upload_status_key(progress: &PhotoUploadProgress) -> &'static str {
    if progress.error.is_some() {
        "form.photoUploadError"
    } else if progress.is_processing {
        "formPhotoStatus.detecting"
    } else if progress.is_uploading && progress.progress < 50.0 {
        "formPhotoStatus.preparing"
    } else if progress.is_uploading && progress.progress < 80.0 {
        "formPhotoStatus.uploading"
    } else if progress.is_uploading {
        "formPhotoStatus.finishing"
    } else {
        "formPhotoStatus.processing"
    }
}

pub fn upload_color(progress: &PhotoUploadProgress) -> &'static str {
    if progress.error.is_some() {
        ERROR_COLOR
    } else if progress.progress >= 100.0 {
        DONE_COLOR
    } else {
        ACTIVE_COLOR
    }
}

/// `None` unless the modal is meant to be visible.
pub fn upload_progress_view(
    visible: bool,
    progress: &PhotoUploadProgress,
) -> Option<UploadProgressView> {
    if !visible {
        return None;
    }
    Some(UploadProgressView {
        status_key: upload_status_key(progress),
        color: upload_color(progress),
        bar_percent: progress.progress.clamp(0.0, 100.0),
        percent_label: format!("{}%", progress.progress.round()),
        error: progress.error.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uploading(percent: f64) -> PhotoUploadProgress {
        PhotoUploadProgress {
            is_uploading: true,
            progress: percent,
            ..Default::default()
        }
    }

    #[test]
    fn status_follows_progress() {
        assert_eq!(upload_status_key(&uploading(10.0)), "formPhotoStatus.preparing");
        assert_eq!(upload_status_key(&uploading(50.0)), "formPhotoStatus.uploading");
        assert_eq!(upload_status_key(&uploading(80.0)), "formPhotoStatus.finishing");
        assert_eq!(
            upload_status_key(&PhotoUploadProgress::default()),
            "formPhotoStatus.processing"
        );

        let processing = PhotoUploadProgress {
            is_processing: true,
            ..uploading(30.0)
        };
        assert_eq!(upload_status_key(&processing), "formPhotoStatus.detecting");

        let failed = PhotoUploadProgress {
            error: Some("timeout".to_string()),
            ..processing
        };
        assert_eq!(upload_status_key(&failed), "form.photoUploadError");
        assert_eq!(upload_color(&failed), ERROR_COLOR);
    }

    #[test]
    fn view_clamps_and_rounds() {
        assert_eq!(upload_progress_view(false, &uploading(40.0)), None);

        let view = upload_progress_view(true, &uploading(120.4)).unwrap();
        assert_eq!(view.bar_percent, 100.0);
        assert_eq!(view.percent_label, "120%");
        assert_eq!(view.color, DONE_COLOR);

        let view = upload_progress_view(true, &uploading(-5.0)).unwrap();
        assert_eq!(view.bar_percent, 0.0);
        assert_eq!(view.color, ACTIVE_COLOR);
    }
}
