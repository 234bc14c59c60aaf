use crate::foundation::error::{CartelloError, CartelloResult};

/// Opaque numeric identity of the user driving a conversation.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct UserId(pub i64);

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Identity of the chat an event originated from, checked against the allow list.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct ChatId(pub i64);

impl std::fmt::Display for ChatId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Pixel dimensions of an image surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PixelSize {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl PixelSize {
    /// Build a size, rejecting degenerate zero dimensions.
    pub fn new(width: u32, height: u32) -> CartelloResult<Self> {
        if width == 0 || height == 0 {
            return Err(CartelloError::invalid_input(
                "PixelSize dimensions must be > 0",
            ));
        }
        Ok(Self { width, height })
    }
}

/// Signed translation of the crop window, accumulated by the tuning loop.
///
/// Defined only while the session's fit strategy is `crop`. Accumulation is
/// unclamped; [`fit_background`](crate::layout::fit::fit_background) clamps
/// the resulting window into the source bounds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CropOffset {
    /// Horizontal translation in pixels, positive moves the window right.
    pub x: i32,
    /// Vertical translation in pixels, positive moves the window down.
    pub y: i32,
}

impl CropOffset {
    /// The neutral offset.
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Component-wise sum, saturating at the i32 range ends.
    pub fn translated(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }
}

/// Axis-aligned source rectangle to sample from a background image.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CropRect {
    /// Left edge in pixels.
    pub x: u32,
    /// Top edge in pixels.
    pub y: u32,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl CropRect {
    /// Exclusive right edge.
    pub fn right(self) -> u32 {
        self.x + self.width
    }

    /// Exclusive bottom edge.
    pub fn bottom(self) -> u32 {
        self.y + self.height
    }
}

/// Strategy for fitting an arbitrary background to the template's dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResizeMode {
    /// Upscale preserving aspect ratio, then sample a tunable window.
    Crop,
    /// Stretch to the target dimensions, ignoring aspect ratio.
    Scale,
    /// Like crop, with the window drawn at random on every render.
    Random,
}

impl ResizeMode {
    /// Stable lowercase name used on the wire and in configuration.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Crop => "crop",
            Self::Scale => "scale",
            Self::Random => "random",
        }
    }

    /// Parse a wire/configuration name.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "crop" => Some(Self::Crop),
            "scale" => Some(Self::Scale),
            "random" => Some(Self::Random),
            _ => None,
        }
    }
}

impl std::fmt::Display for ResizeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
