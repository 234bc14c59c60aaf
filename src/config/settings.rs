use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::Context;
use parking_lot::RwLock;

use crate::foundation::{
    core::{ChatId, ResizeMode},
    error::CartelloResult,
};

/// Numeric setting addressable from the settings pad.
///
/// The wire names are part of the button-action contract and must stay
/// stable (`alter_setting_<field>,<op>`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SettingField {
    /// Gaussian blur radius applied to user-uploaded backgrounds.
    Blur,
    /// Font size used for the title block.
    FontSizeTitle,
    /// Font size used for the caption block.
    FontSizeCaption,
}

impl SettingField {
    /// Stable wire name of the field.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Blur => "blur",
            Self::FontSizeTitle => "font_size_title",
            Self::FontSizeCaption => "font_size_caption",
        }
    }

    /// Parse a wire name back into a field.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "blur" => Some(Self::Blur),
            "font_size_title" => Some(Self::FontSizeTitle),
            "font_size_caption" => Some(Self::FontSizeCaption),
            _ => None,
        }
    }
}

/// Runtime-tunable values shared by every session.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ImageSettings {
    /// Blur radius for user-uploaded backgrounds; 0 disables the filter.
    pub blur: u32,
    /// Title font size in pixels.
    pub font_size_title: u32,
    /// Caption font size in pixels.
    pub font_size_caption: u32,
    /// Fit strategy a transport may preselect on the resize-mode keyboard.
    pub resize_default: ResizeMode,
    /// Pixels the crop window moves per tuning press.
    pub crop_step: u32,
    /// Chats allowed to start a creation flow; empty allows every chat.
    pub allowed_chats: Vec<ChatId>,
}

impl Default for ImageSettings {
    fn default() -> Self {
        Self {
            blur: 4,
            font_size_title: 33,
            font_size_caption: 33,
            resize_default: ResizeMode::Crop,
            crop_step: 50,
            allowed_chats: Vec::new(),
        }
    }
}

impl ImageSettings {
    /// Current value of a pad-addressable field.
    pub fn get(&self, field: SettingField) -> u32 {
        match field {
            SettingField::Blur => self.blur,
            SettingField::FontSizeTitle => self.font_size_title,
            SettingField::FontSizeCaption => self.font_size_caption,
        }
    }

    fn get_mut(&mut self, field: SettingField) -> &mut u32 {
        match field {
            SettingField::Blur => &mut self.blur,
            SettingField::FontSizeTitle => &mut self.font_size_title,
            SettingField::FontSizeCaption => &mut self.font_size_caption,
        }
    }

    /// Whether a chat may start the creation flow. An empty allow list
    /// permits every chat, as the original deployment convention.
    pub fn is_chat_allowed(&self, chat: ChatId) -> bool {
        self.allowed_chats.is_empty() || self.allowed_chats.contains(&chat)
    }
}

/// Process-wide settings behind an atomic read/update accessor.
///
/// Cloning is cheap and every clone observes the same values, so the
/// settings pad can mutate concurrently with active sessions.
#[derive(Clone)]
pub struct SharedSettings {
    inner: Arc<RwLock<ImageSettings>>,
    store: Option<Arc<PathBuf>>,
}

impl SharedSettings {
    /// Wrap in-memory settings with no backing store.
    pub fn new(settings: ImageSettings) -> Self {
        Self {
            inner: Arc::new(RwLock::new(settings)),
            store: None,
        }
    }

    /// Load settings from a JSON store, falling back to defaults when the
    /// file does not exist yet. The path is kept for later [`save`] calls.
    ///
    /// [`save`]: SharedSettings::save
    pub fn load(path: impl Into<PathBuf>) -> CartelloResult<Self> {
        let path = path.into();
        let settings = if path.exists() {
            let bytes = std::fs::read(&path)
                .with_context(|| format!("reading settings store {}", path.display()))?;
            serde_json::from_slice(&bytes)
                .with_context(|| format!("parsing settings store {}", path.display()))?
        } else {
            ImageSettings::default()
        };
        Ok(Self {
            inner: Arc::new(RwLock::new(settings)),
            store: Some(Arc::new(path)),
        })
    }

    /// Copy of the current values.
    pub fn snapshot(&self) -> ImageSettings {
        self.inner.read().clone()
    }

    /// Current value of a pad-addressable field.
    pub fn get(&self, field: SettingField) -> u32 {
        self.inner.read().get(field)
    }

    /// Increase a field by one and return the new value. Unbounded above.
    pub fn increment(&self, field: SettingField) -> u32 {
        let mut guard = self.inner.write();
        let slot = guard.get_mut(field);
        *slot = slot.saturating_add(1);
        *slot
    }

    /// Decrease a field by one and return the new value, or `None` when the
    /// value is already zero (the press is a no-op, never an underflow).
    pub fn decrement(&self, field: SettingField) -> Option<u32> {
        let mut guard = self.inner.write();
        let slot = guard.get_mut(field);
        if *slot == 0 {
            return None;
        }
        *slot -= 1;
        Some(*slot)
    }

    /// Apply an arbitrary update atomically.
    pub fn update(&self, f: impl FnOnce(&mut ImageSettings)) {
        f(&mut self.inner.write());
    }

    /// Persist the current values to the backing store, if one was
    /// configured. Without a store this is a no-op.
    pub fn save(&self) -> CartelloResult<()> {
        let Some(path) = self.store.as_deref() else {
            return Ok(());
        };
        let json = serde_json::to_vec_pretty(&*self.inner.read())
            .context("serializing settings store")?;
        write_atomically(path, &json)?;
        Ok(())
    }
}

fn write_atomically(path: &Path, bytes: &[u8]) -> CartelloResult<()> {
    let tmp = path.with_extension("json.tmp");
    std::fs::write(&tmp, bytes)
        .with_context(|| format!("writing settings store {}", tmp.display()))?;
    std::fs::rename(&tmp, path)
        .with_context(|| format!("replacing settings store {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/config/settings.rs"]
mod tests;
