use std::path::PathBuf;

use crate::{
    catalog::templates::TemplateId,
    foundation::core::{ChatId, CropOffset, ResizeMode, UserId},
};

/// Fit strategy chosen for a draft.
///
/// The crop offset lives inside the `Crop` variant, so it exists exactly
/// when the mode is `crop` and can never leak into the other modes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FitStrategy {
    /// Tunable window; `offset` accumulates pad presses.
    Crop {
        /// Accumulated translation of the sampling window.
        offset: CropOffset,
    },
    /// Stretch to the template's dimensions.
    Scale,
    /// Window drawn at random on every render.
    Random,
}

impl FitStrategy {
    /// Initial strategy for a freshly chosen mode; crop starts centered.
    pub fn from_mode(mode: ResizeMode) -> Self {
        match mode {
            ResizeMode::Crop => Self::Crop {
                offset: CropOffset::ZERO,
            },
            ResizeMode::Scale => Self::Scale,
            ResizeMode::Random => Self::Random,
        }
    }

    /// The mode this strategy realizes.
    pub fn mode(self) -> ResizeMode {
        match self {
            Self::Crop { .. } => ResizeMode::Crop,
            Self::Scale => ResizeMode::Scale,
            Self::Random => ResizeMode::Random,
        }
    }

    /// The accumulated offset, present only in crop mode.
    pub fn offset(self) -> Option<CropOffset> {
        match self {
            Self::Crop { offset } => Some(offset),
            _ => None,
        }
    }
}

/// Everything the compositor needs to render one composite.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Draft {
    /// Selected foreground template.
    pub template: TemplateId,
    /// Title text, stored uppercased.
    pub title: String,
    /// Caption text, stored verbatim.
    pub caption: String,
    /// How the background is fitted.
    pub fit: FitStrategy,
}

/// Conversation stage. One variant per machine state, each carrying only
/// the fields that state needs, so partially filled sessions cannot be
/// rendered and finished fields cannot be re-entered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Stage {
    /// Waiting for a template button.
    TemplateSelection,
    /// Waiting for the title text.
    TitleEntry {
        /// Chosen template.
        template: TemplateId,
    },
    /// Waiting for the caption text.
    CaptionEntry {
        /// Chosen template.
        template: TemplateId,
        /// Collected title.
        title: String,
    },
    /// Waiting for a resize-mode button.
    ResizeSelection {
        /// Chosen template.
        template: TemplateId,
        /// Collected title.
        title: String,
        /// Collected caption.
        caption: String,
    },
    /// Waiting for a background photo or the literal "none".
    BackgroundCollection {
        /// Complete draft, ready to render once the background is known.
        draft: Draft,
    },
    /// Interactive crop adjustment loop.
    CropTuning {
        /// Draft being re-rendered on every pad press.
        draft: Draft,
    },
    /// Random mode retry loop.
    RandomRetry {
        /// Draft re-rendered with a fresh window on every retry.
        draft: Draft,
    },
}

impl Stage {
    /// Short state name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::TemplateSelection => "template_selection",
            Self::TitleEntry { .. } => "title_entry",
            Self::CaptionEntry { .. } => "caption_entry",
            Self::ResizeSelection { .. } => "resize_selection",
            Self::BackgroundCollection { .. } => "background_collection",
            Self::CropTuning { .. } => "crop_tuning",
            Self::RandomRetry { .. } => "random_retry",
        }
    }
}

/// Per-user ephemeral conversation state. Created on the entry command,
/// destroyed on completion or cancellation; nothing survives a restart.
#[derive(Clone, Debug)]
pub struct Session {
    /// Owner of the session.
    pub user: UserId,
    /// Chat the session was started from.
    pub chat: ChatId,
    /// Current conversation stage.
    pub stage: Stage,
    /// Uploaded background, if any was collected.
    pub background: Option<PathBuf>,
    /// Most recently rendered composite, if any.
    pub output: Option<PathBuf>,
}

impl Session {
    /// Fresh session at the template-selection stage.
    pub fn new(user: UserId, chat: ChatId) -> Self {
        Self {
            user,
            chat,
            stage: Stage::TemplateSelection,
            background: None,
            output: None,
        }
    }
}
