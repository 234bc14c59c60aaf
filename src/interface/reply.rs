use crate::{
    config::settings::SettingField,
    foundation::core::ResizeMode,
    interface::action::{ButtonAction, RandomCommand, SettingOp},
    session::tuner::{CropCommand, PadDirection},
};

/// Semantic keyboard attached to a reply. The transport owns labels,
/// emoji and visual arrangement; only the actions carry meaning here.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Keyboard {
    /// One button per template id, in catalog order.
    Templates(Vec<String>),
    /// The three fit strategies.
    ResizeModes,
    /// Eight directions, reset and finish.
    CropPad,
    /// Retry and finish.
    RandomPad,
    /// One button per adjustable setting.
    SettingsMenu,
    /// Minus/plus pad for one setting, showing its current value.
    SettingAdjust {
        /// Field being adjusted.
        field: SettingField,
        /// Value to display between the pad buttons.
        value: u32,
    },
}

impl Keyboard {
    /// The wire ids of the actions this keyboard offers, in keyboard order.
    /// Inert filler buttons are not listed.
    pub fn actions(&self) -> Vec<String> {
        match self {
            Self::Templates(ids) => ids
                .iter()
                .map(|id| ButtonAction::Template(id.clone()).wire_id())
                .collect(),
            Self::ResizeModes => [ResizeMode::Crop, ResizeMode::Scale, ResizeMode::Random]
                .into_iter()
                .map(|m| ButtonAction::ResizeMode(m).wire_id())
                .collect(),
            Self::CropPad => {
                let mut ids: Vec<String> = PadDirection::ALL
                    .into_iter()
                    .map(|d| ButtonAction::Crop(CropCommand::Nudge(d)).wire_id())
                    .collect();
                ids.push(ButtonAction::Crop(CropCommand::Reset).wire_id());
                ids.push(ButtonAction::Crop(CropCommand::Finish).wire_id());
                ids
            }
            Self::RandomPad => [RandomCommand::Again, RandomCommand::Finish]
                .into_iter()
                .map(|c| ButtonAction::Random(c).wire_id())
                .collect(),
            Self::SettingsMenu => [
                SettingField::Blur,
                SettingField::FontSizeTitle,
                SettingField::FontSizeCaption,
            ]
            .into_iter()
            .map(|f| ButtonAction::OpenSetting(f).wire_id())
            .collect(),
            Self::SettingAdjust { field, .. } => [
                SettingOp::Decrease,
                SettingOp::Increase,
                SettingOp::Cancel,
                SettingOp::Save,
            ]
            .into_iter()
            .map(|op| ButtonAction::AlterSetting { field: *field, op }.wire_id())
            .collect(),
        }
    }
}

/// Outbound reaction to one inbound event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Reply {
    /// Nothing to send: ignored input or a no-op press.
    None,
    /// A text message, optionally with a keyboard.
    Text {
        /// Resolved display text.
        text: String,
        /// Keyboard to attach, if any.
        keyboard: Option<Keyboard>,
    },
    /// A rendered composite as encoded PNG bytes.
    Photo {
        /// Encoded image.
        image: Vec<u8>,
        /// Keyboard to attach, if any.
        keyboard: Option<Keyboard>,
        /// Whether this photo replaces the previously delivered one.
        replaces_previous: bool,
    },
}

impl Reply {
    /// Whether this reply delivers a photo.
    pub fn is_photo(&self) -> bool {
        matches!(self, Self::Photo { .. })
    }
}
