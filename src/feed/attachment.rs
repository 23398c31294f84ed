//! Image references attached to posts
//!
//! A post can point at an image in one of three places. The kind is decided
//! once, when the reference enters the app (seed data or the compose
//! picker), so renderers match on the variant instead of sniffing strings.

use std::path::{Path, PathBuf};

/// Bundled asset name that never resolves to an image
pub const PLACEHOLDER_ASSET: &str = "placeholder";

const CONTENT_URI_SCHEME: &str = "content://";

/// File extensions tried, in order, when resolving a bundled asset
const ASSET_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttachmentRef {
    /// Image on the local machine, chosen through the picker
    Device(PathBuf),
    /// http(s) URL; shown as a placeholder since nothing is fetched
    Remote(String),
    /// Named asset shipped with the demo
    Bundled(String),
}

/// Outcome of resolving an attachment to something displayable
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Image file that can be decoded
    File(PathBuf),
    /// Nothing to load; render the placeholder with this note
    Placeholder(String),
}

impl AttachmentRef {
    /// Classify raw picker output. Blank input means nothing was selected.
    ///
    /// # Examples
    /// ```
    /// use chirptui::feed::AttachmentRef;
    /// use std::path::PathBuf;
    ///
    /// assert_eq!(AttachmentRef::from_picker("  "), None);
    /// assert_eq!(
    ///     AttachmentRef::from_picker("https://example.com/a.png"),
    ///     Some(AttachmentRef::Remote("https://example.com/a.png".to_string()))
    /// );
    /// assert_eq!(
    ///     AttachmentRef::from_picker("file:///tmp/cat.png"),
    ///     Some(AttachmentRef::Device(PathBuf::from("/tmp/cat.png")))
    /// );
    /// assert_eq!(
    ///     AttachmentRef::from_picker("bmw"),
    ///     Some(AttachmentRef::Bundled("bmw".to_string()))
    /// );
    /// ```
    pub fn from_picker(raw: &str) -> Option<AttachmentRef> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }

        if raw.starts_with("http://") || raw.starts_with("https://") {
            return Some(AttachmentRef::Remote(raw.to_string()));
        }

        if let Some(path) = raw.strip_prefix("file://") {
            return Some(AttachmentRef::Device(PathBuf::from(path)));
        }

        // Content URIs name a provider, not a path; kept whole so they never
        // resolve against the working directory
        if raw.starts_with(CONTENT_URI_SCHEME) {
            return Some(AttachmentRef::Device(PathBuf::from(raw)));
        }

        if let Some(rest) = raw.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return Some(AttachmentRef::Device(home.join(rest)));
            }
        }

        if raw.contains('/') || raw.contains('\\') || Path::new(raw).extension().is_some() {
            return Some(AttachmentRef::Device(PathBuf::from(raw)));
        }

        Some(AttachmentRef::Bundled(raw.to_string()))
    }

    /// Short label for the card's attachment line
    pub fn label(&self) -> String {
        match self {
            AttachmentRef::Device(path) => path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string()),
            AttachmentRef::Remote(url) => url.clone(),
            AttachmentRef::Bundled(name) => name.clone(),
        }
    }

    pub fn kind(&self) -> &str {
        match self {
            AttachmentRef::Device(_) => "device",
            AttachmentRef::Remote(_) => "remote",
            AttachmentRef::Bundled(_) => "bundled",
        }
    }

    /// Decide what the renderer should load.
    ///
    /// Resolution never fails: anything that cannot be shown degrades to a
    /// placeholder carrying a short note.
    pub fn resolve(&self, assets_dir: Option<&Path>) -> Resolution {
        match self {
            AttachmentRef::Device(path) => {
                if path.to_string_lossy().starts_with(CONTENT_URI_SCHEME) {
                    Resolution::Placeholder("Content URIs cannot be opened here".to_string())
                } else if path.is_file() {
                    Resolution::File(path.clone())
                } else {
                    Resolution::Placeholder(format!("File not found: {}", path.display()))
                }
            }
            AttachmentRef::Remote(_) => {
                Resolution::Placeholder("Remote images are not downloaded".to_string())
            }
            AttachmentRef::Bundled(name) => {
                if name == PLACEHOLDER_ASSET {
                    return Resolution::Placeholder("Image".to_string());
                }
                let Some(dir) = assets_dir else {
                    return Resolution::Placeholder("No assets directory configured".to_string());
                };
                ASSET_EXTENSIONS
                    .iter()
                    .map(|ext| dir.join(format!("{}.{}", name, ext)))
                    .find(|candidate| candidate.is_file())
                    .map(Resolution::File)
                    .unwrap_or_else(|| {
                        Resolution::Placeholder(format!("Asset '{}' not bundled", name))
                    })
            }
        }
    }
}
