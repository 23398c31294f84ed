//! Post detail and attachment preview methods
//!
//! Opening a post shows its full text and, when it carries an attachment,
//! resolves the reference and decodes the image in the background. Any
//! failure ends up as a placeholder, never as an error.

use chirptui::feed::attachment::Resolution;
use chirptui::feed::PostId;
use chirptui::model::PostDetailState;

use crate::{log_debug, App, ImageMetadata, ImagePreviewState};

/// Largest attachment file we try to decode
const MAX_IMAGE_BYTES: u64 = 20 * 1024 * 1024;

impl App {
    /// Open the detail popup for the selected timeline post
    pub(crate) fn open_selected_post(&mut self) {
        if let Some(post_id) = self.model.selected_post_id(&self.feed) {
            self.open_post_detail(post_id);
        }
    }

    /// Open the detail popup for the post selected in the profile's Posts tab
    pub(crate) fn open_selected_own_post(&mut self) {
        if let Some(post_id) = self.model.selected_own_post_id(&self.feed) {
            self.open_post_detail(post_id);
        }
    }

    pub(crate) fn open_post_detail(&mut self, post_id: PostId) {
        let Some(post) = self.feed.get(post_id) else {
            return;
        };

        self.model.ui.post_detail = Some(PostDetailState {
            post_id,
            scroll_offset: 0,
        });

        let Some(attachment) = post.attachment.clone() else {
            return;
        };

        // Decoded images are reused when the same post is opened again
        if matches!(
            self.image_state_map.get(&post_id),
            Some(ImagePreviewState::Ready { .. })
        ) {
            return;
        }

        match attachment.resolve(self.assets_dir.as_deref()) {
            Resolution::Placeholder(reason) => {
                log_debug(&format!(
                    "Attachment for post {} unavailable ({}): {}",
                    post_id,
                    attachment.kind(),
                    reason
                ));
                self.image_state_map
                    .insert(post_id, ImagePreviewState::Unavailable { reason });
            }
            Resolution::File(path) => {
                let Some(picker) = self.image_picker.clone() else {
                    self.image_state_map.insert(
                        post_id,
                        ImagePreviewState::Unavailable {
                            reason: "Image preview disabled in config".to_string(),
                        },
                    );
                    return;
                };

                self.image_state_map.insert(post_id, ImagePreviewState::Loading);
                let image_tx = self.image_update_tx.clone();

                tokio::task::spawn_blocking(move || {
                    log_debug(&format!("Background: Loading image {}", path.display()));
                    let state = match Self::load_image_preview(&path, &picker) {
                        Ok((protocol, metadata)) => ImagePreviewState::Ready { protocol, metadata },
                        Err(reason) => {
                            log_debug(&format!("Background: Image load failed: {}", reason));
                            ImagePreviewState::Unavailable { reason }
                        }
                    };
                    let _ = image_tx.send((post_id, state));
                });
            }
        }
    }

    pub(crate) fn close_post_detail(&mut self) {
        self.model.ui.post_detail = None;
        self.model.ui.graphics_cleanup_frames = 1;
    }

    pub(crate) fn scroll_post_detail(&mut self, delta: i32) {
        if let Some(detail) = &mut self.model.ui.post_detail {
            detail.scroll_offset = if delta < 0 {
                detail.scroll_offset.saturating_sub(delta.unsigned_abs() as u16)
            } else {
                detail.scroll_offset.saturating_add(delta as u16)
            };
        }
    }

    fn load_image_preview(
        path: &std::path::Path,
        picker: &ratatui_image::picker::Picker,
    ) -> Result<(ratatui_image::protocol::StatefulProtocol, ImageMetadata), String> {
        let file_size = std::fs::metadata(path)
            .map_err(|e| format!("Cannot read file: {}", e))?
            .len();
        if file_size > MAX_IMAGE_BYTES {
            return Err(format!(
                "Too large to preview ({})",
                crate::utils::format_bytes(file_size)
            ));
        }

        let img = image::open(path).map_err(|e| format!("Load error: {}", e))?;
        let dimensions = (img.width(), img.height());
        let format = match img.color() {
            image::ColorType::L8 => "Grayscale 8-bit",
            image::ColorType::La8 => "Grayscale+Alpha 8-bit",
            image::ColorType::Rgb8 => "RGB 8-bit",
            image::ColorType::Rgba8 => "RGBA 8-bit",
            image::ColorType::L16 => "Grayscale 16-bit",
            image::ColorType::La16 => "Grayscale+Alpha 16-bit",
            image::ColorType::Rgb16 => "RGB 16-bit",
            image::ColorType::Rgba16 => "RGBA 16-bit",
            _ => "Other",
        };

        // Pre-downscale to roughly what a large popup can show
        let font_size = picker.font_size();
        let max_width = 120 * font_size.0 as u32;
        let max_height = 40 * font_size.1 as u32;
        let processed = if img.width() > max_width || img.height() > max_height {
            log_debug(&format!(
                "Downscaling {}x{} to fit {}x{}",
                img.width(),
                img.height(),
                max_width,
                max_height
            ));
            img.resize(max_width, max_height, image::imageops::FilterType::Triangle)
        } else {
            img
        };

        let protocol = picker.new_resize_protocol(processed);
        Ok((
            protocol,
            ImageMetadata {
                dimensions: Some(dimensions),
                format: Some(format.to_string()),
                file_size,
            },
        ))
    }
}
