use crate::foundation::core::CropOffset;

/// The eight directions of the crop-tuning pad.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PadDirection {
    /// Move the window up.
    Up,
    /// Move the window down.
    Down,
    /// Move the window left.
    Left,
    /// Move the window right.
    Right,
    /// Up and left combined.
    UpLeft,
    /// Up and right combined.
    UpRight,
    /// Down and left combined.
    DownLeft,
    /// Down and right combined.
    DownRight,
}

impl PadDirection {
    /// All directions in keyboard order (top row, middle row, bottom row).
    pub const ALL: [Self; 8] = [
        Self::UpLeft,
        Self::Up,
        Self::UpRight,
        Self::Left,
        Self::Right,
        Self::DownLeft,
        Self::Down,
        Self::DownRight,
    ];

    /// Stable wire name (`up-left`, `down`, ...).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
            Self::UpLeft => "up-left",
            Self::UpRight => "up-right",
            Self::DownLeft => "down-left",
            Self::DownRight => "down-right",
        }
    }

    /// Parse a wire name.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "up" => Some(Self::Up),
            "down" => Some(Self::Down),
            "left" => Some(Self::Left),
            "right" => Some(Self::Right),
            "up-left" => Some(Self::UpLeft),
            "up-right" => Some(Self::UpRight),
            "down-left" => Some(Self::DownLeft),
            "down-right" => Some(Self::DownRight),
            _ => None,
        }
    }

    /// Unit motion of the sampling window. A direction names where the
    /// window goes: `up` decreases y, `left` decreases x, diagonals combine
    /// both axes.
    fn unit(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
            Self::UpLeft => (-1, -1),
            Self::UpRight => (1, -1),
            Self::DownLeft => (-1, 1),
            Self::DownRight => (1, 1),
        }
    }
}

/// One press on the crop-tuning pad.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CropCommand {
    /// Nudge the window by the configured step.
    Nudge(PadDirection),
    /// Recenter the window.
    Reset,
    /// Accept the current crop and end the session.
    Finish,
}

impl CropCommand {
    /// Stable wire name, the suffix of `image_crop_<name>`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Nudge(dir) => dir.as_str(),
            Self::Reset => "reset",
            Self::Finish => "finish",
        }
    }

    /// Parse a wire name.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "reset" => Some(Self::Reset),
            "finish" => Some(Self::Finish),
            _ => PadDirection::parse(s).map(Self::Nudge),
        }
    }
}

/// Apply one pad press to the accumulated offset.
///
/// Accumulation is unclamped; the fit computation clamps the resulting
/// window into the source bounds, so drifting far out simply pins the
/// window to an edge until nudged back.
pub fn apply(offset: CropOffset, command: CropCommand, step_px: u32) -> CropOffset {
    let step = step_px as i32;
    match command {
        CropCommand::Nudge(dir) => {
            let (dx, dy) = dir.unit();
            offset.translated(dx * step, dy * step)
        }
        CropCommand::Reset => CropOffset::ZERO,
        CropCommand::Finish => offset,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/tuner.rs"]
mod tests;
