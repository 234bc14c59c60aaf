//! Cartello is a conversation-driven composite image generator.
//!
//! A remote user builds an announcement image (background photo + fixed
//! foreground template + rendered title/caption) through a multi-step,
//! stateful interaction. Transport plumbing (message delivery, webhooks,
//! display prose) lives outside this crate; what lives here is the whole
//! per-user pipeline:
//!
//! 1. **Classify**: the transport delivers one [`Event`] at a time
//!    (command, free text, photo or button press) with the caller identity.
//! 2. **Transition**: [`ConversationMachine`] validates the event against
//!    the user's [`Session`] stage and advances it, or holds it on invalid
//!    input.
//! 3. **Compose**: [`Compositor`] turns the session draft into pixels —
//!    background fitting ([`fit_background`]), blur for user uploads,
//!    template overlay, wrapped and stacked text blocks.
//! 4. **Reply**: the machine returns a [`Reply`] (text, keyboard, or
//!    encoded photo) for the transport to deliver.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Total transitions**: every `(stage, event kind)` pair is either a
//!   defined transition or the explicit invalid-input fallback.
//! - **Per-user serialization**: all work for one user runs under that
//!   user's session mutex; users never share mutable state beyond the
//!   read-only [`TemplateCatalog`] and the atomic [`SharedSettings`].
//! - **Renders never compound**: every render restarts from the original
//!   background, so tuning the crop cannot stack blur or overlays.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod catalog;
mod config;
mod foundation;
mod interface;
mod layout;
mod render;
mod session;

pub use catalog::templates::{
    STANDARD_TEMPLATE_IDS, Template, TemplateCatalog, TemplateId,
};
pub use catalog::workspace::Workspace;
pub use config::settings::{ImageSettings, SettingField, SharedSettings};
pub use foundation::core::{ChatId, CropOffset, CropRect, PixelSize, ResizeMode, UserId};
pub use foundation::error::{CartelloError, CartelloResult};
pub use interface::action::{ButtonAction, RandomCommand, SettingOp};
pub use interface::collaborators::{MediaExchange, TextKey, TextProvider};
pub use interface::event::{Command, Event, EventKind, PhotoRef};
pub use interface::reply::{Keyboard, Reply};
pub use layout::fit::{FitPlan, fit_background};
pub use layout::text::{TextAnchors, stack_blocks, wrap_text};
pub use render::blur::blur_rgba;
pub use render::compositor::Compositor;
pub use render::glyphs::{draw_line_centered, line_height, line_width};
pub use session::machine::ConversationMachine;
pub use session::model::{Draft, FitStrategy, Session, Stage};
pub use session::store::{SessionHandle, SessionStore};
pub use session::tuner::{CropCommand, PadDirection, apply as apply_crop_command};
