use crate::{
    config::settings::SettingField,
    foundation::core::ResizeMode,
    session::tuner::CropCommand,
};

/// Operations available on a settings pad.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SettingOp {
    /// Increase the value by one.
    Increase,
    /// Decrease the value by one; a no-op at zero.
    Decrease,
    /// Persist the current values to the settings store.
    Save,
    /// Close the pad, keeping the in-memory values until restart.
    Cancel,
}

impl SettingOp {
    /// Stable wire name, the part after the comma in `alter_setting_...`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Increase => "+",
            Self::Decrease => "-",
            Self::Save => "save",
            Self::Cancel => "cancel",
        }
    }

    /// Parse a wire name.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "+" => Some(Self::Increase),
            "-" => Some(Self::Decrease),
            "save" => Some(Self::Save),
            "cancel" => Some(Self::Cancel),
            _ => None,
        }
    }
}

/// Buttons of the random-retry pad.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RandomCommand {
    /// Draw a fresh window and re-render.
    Again,
    /// Accept the current render and end the session.
    Finish,
}

impl RandomCommand {
    /// Stable wire name, the suffix of `image_random_<name>`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Again => "again",
            Self::Finish => "finish",
        }
    }

    /// Parse a wire name.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "again" => Some(Self::Again),
            "finish" => Some(Self::Finish),
            _ => None,
        }
    }
}

/// Every button action the machine recognizes.
///
/// The wire encodings round-tripped by [`parse`](ButtonAction::parse) and
/// [`wire_id`](ButtonAction::wire_id) are a stable contract with the
/// transport layer and must be preserved verbatim across releases.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ButtonAction {
    /// `template_<id>`: pick a foreground template.
    Template(String),
    /// `image_resize_mode_<mode>`: pick the background fit strategy.
    ResizeMode(ResizeMode),
    /// `image_crop_<op>`: one press on the crop-tuning pad.
    Crop(CropCommand),
    /// `image_random_<op>`: one press on the random-retry pad.
    Random(RandomCommand),
    /// `settings_<field>`: open the pad for one setting.
    OpenSetting(SettingField),
    /// `alter_setting_<field>,<op>`: adjust or finalize one setting.
    AlterSetting {
        /// Targeted field.
        field: SettingField,
        /// Requested operation.
        op: SettingOp,
    },
    /// `_`: inert filler buttons (keyboard headers).
    Noop,
}

impl ButtonAction {
    /// Parse a callback identifier received from the transport.
    pub fn parse(data: &str) -> Option<Self> {
        if data == "_" {
            return Some(Self::Noop);
        }
        if let Some(rest) = data.strip_prefix("image_resize_mode_") {
            return ResizeMode::parse(rest).map(Self::ResizeMode);
        }
        if let Some(rest) = data.strip_prefix("image_crop_") {
            return CropCommand::parse(rest).map(Self::Crop);
        }
        if let Some(rest) = data.strip_prefix("image_random_") {
            return RandomCommand::parse(rest).map(Self::Random);
        }
        if let Some(rest) = data.strip_prefix("alter_setting_") {
            let (field, op) = rest.split_once(',')?;
            return Some(Self::AlterSetting {
                field: SettingField::parse(field)?,
                op: SettingOp::parse(op)?,
            });
        }
        if let Some(rest) = data.strip_prefix("settings_") {
            return SettingField::parse(rest).map(Self::OpenSetting);
        }
        if let Some(rest) = data.strip_prefix("template_") {
            if rest.is_empty() {
                return None;
            }
            return Some(Self::Template(rest.to_string()));
        }
        None
    }

    /// The verbatim callback identifier for this action.
    pub fn wire_id(&self) -> String {
        match self {
            Self::Template(id) => format!("template_{id}"),
            Self::ResizeMode(mode) => format!("image_resize_mode_{}", mode.as_str()),
            Self::Crop(cmd) => format!("image_crop_{}", cmd.as_str()),
            Self::Random(cmd) => format!("image_random_{}", cmd.as_str()),
            Self::OpenSetting(field) => format!("settings_{}", field.as_str()),
            Self::AlterSetting { field, op } => {
                format!("alter_setting_{},{}", field.as_str(), op.as_str())
            }
            Self::Noop => "_".to_string(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/interface/action.rs"]
mod tests;
