use std::path::Path;

use crate::{foundation::error::CartelloResult, interface::event::PhotoRef};

/// Symbolic keys of the transport-owned display texts. The core requests
/// text by key and never composes prose itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextKey {
    /// Welcome message.
    Start,
    /// Command summary.
    Help,
    /// Creation-flow opener, shown with the template keyboard.
    Create,
    /// Cancellation confirmation.
    Cancel,
    /// Generic failure notice for invalid or unexpected input.
    Fail,
    /// Prompt following the title (asks for the caption).
    Title,
    /// Prompt following the caption (asks for the resize mode).
    Caption,
    /// Acknowledgement of the collected background.
    Background,
    /// Prompt following the template choice (asks for the title).
    Template,
    /// Prompt following the resize-mode choice (asks for the background).
    ResizeMode,
    /// Settings-menu body text.
    Settings,
    /// Rejection notice when a session is already in progress.
    CreateFail,
}

impl TextKey {
    /// Stable lookup key understood by the text provider.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Help => "help",
            Self::Create => "create",
            Self::Cancel => "cancel",
            Self::Fail => "fail",
            Self::Title => "title",
            Self::Caption => "caption",
            Self::Background => "background",
            Self::Template => "template",
            Self::ResizeMode => "resize_mode",
            Self::Settings => "settings",
            Self::CreateFail => "create_fail",
        }
    }
}

/// Resolves a symbolic key to display text.
pub trait TextProvider: Send + Sync {
    /// The display text for `key`.
    fn text(&self, key: TextKey) -> String;
}

/// Transport-side file transfer facility.
pub trait MediaExchange: Send + Sync {
    /// Fetch the photo behind `photo` into `dest`, overwriting it.
    fn fetch_photo(&self, photo: &PhotoRef, dest: &Path) -> CartelloResult<()>;
}
