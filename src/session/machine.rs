use std::sync::Arc;

use crate::{
    catalog::{templates::TemplateCatalog, workspace::Workspace},
    config::settings::{SettingField, SharedSettings},
    foundation::{
        core::{CropOffset, ResizeMode, UserId},
        error::{CartelloError, CartelloResult},
    },
    interface::{
        action::{ButtonAction, RandomCommand, SettingOp},
        collaborators::{MediaExchange, TextKey, TextProvider},
        event::{Command, Event, EventKind, PhotoRef},
        reply::{Keyboard, Reply},
    },
    render::compositor::Compositor,
    session::{
        model::{Draft, FitStrategy, Session, Stage},
        store::SessionStore,
        tuner::{self, CropCommand},
    },
};

/// The finite-state conversation controller.
///
/// One machine serves every user: sessions are keyed by user id in the
/// [`SessionStore`] and all work for one user serializes on that user's
/// session mutex, so a tuning press always waits for the previous render of
/// the same session to finish while other users proceed in parallel.
///
/// The transition function is total: every `(stage, event kind)` pair either
/// advances the conversation or resolves to the generic failure notice with
/// the state held, so unexpected input can never wedge a session.
pub struct ConversationMachine {
    store: SessionStore,
    catalog: Arc<TemplateCatalog>,
    settings: SharedSettings,
    workspace: Workspace,
    compositor: Compositor,
    texts: Arc<dyn TextProvider>,
    media: Arc<dyn MediaExchange>,
}

impl ConversationMachine {
    /// Wire the machine to its collaborators and make sure the scratch
    /// workspace exists.
    pub fn new(
        catalog: Arc<TemplateCatalog>,
        settings: SharedSettings,
        workspace: Workspace,
        texts: Arc<dyn TextProvider>,
        media: Arc<dyn MediaExchange>,
    ) -> CartelloResult<Self> {
        workspace.ensure()?;
        let compositor = Compositor::new(catalog.clone(), settings.clone(), workspace.clone());
        Ok(Self {
            store: SessionStore::new(),
            catalog,
            settings,
            workspace,
            compositor,
            texts,
            media,
        })
    }

    /// The session store, for transports that need to inspect live state.
    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    /// Whether `user` currently has a live session.
    pub fn is_active(&self, user: UserId) -> bool {
        self.store.is_active(user)
    }

    /// Handle one classified inbound event.
    ///
    /// Never panics and never leaves a session in an undefined state:
    /// internal failures are logged and resolved to the generic failure
    /// notice, with the session held where it was so the user can retry.
    #[tracing::instrument(skip_all, fields(user = %event.user, chat = %event.chat))]
    pub fn handle(&self, event: &Event) -> Reply {
        match self.dispatch(event) {
            Ok(reply) => reply,
            Err(CartelloError::SessionConflict) => self.text(TextKey::CreateFail),
            Err(CartelloError::PermissionDenied) => self.text(TextKey::Fail),
            Err(err) => {
                tracing::warn!(error = %err, "event handling failed, state held");
                self.text(TextKey::Fail)
            }
        }
    }

    fn dispatch(&self, event: &Event) -> CartelloResult<Reply> {
        match &event.kind {
            EventKind::Command(cmd) => self.on_command(event, *cmd),
            EventKind::Text(text) => self.on_text(event, text),
            EventKind::Photo(photo) => self.on_photo(event, photo),
            EventKind::Button(action) => self.on_button(event, action),
            EventKind::Unsupported => Ok(self.active_fallback(event.user)),
        }
    }

    // ---- commands ----------------------------------------------------

    fn on_command(&self, event: &Event, cmd: Command) -> CartelloResult<Reply> {
        match cmd {
            Command::Start => Ok(self.text(TextKey::Start)),
            Command::Help => Ok(self.text(TextKey::Help)),
            Command::Settings => Ok(self.text_with(TextKey::Settings, Keyboard::SettingsMenu)),
            Command::Create => self.on_create(event),
            Command::Cancel => Ok(self.on_cancel(event.user)),
        }
    }

    fn on_create(&self, event: &Event) -> CartelloResult<Reply> {
        if !self.settings.snapshot().is_chat_allowed(event.chat) {
            tracing::info!("create rejected, chat not allowed");
            return Err(CartelloError::PermissionDenied);
        }
        self.store.open(event.user, event.chat)?;
        tracing::debug!("session opened");
        let ids = self
            .catalog
            .ids()
            .map(|id| id.as_str().to_string())
            .collect();
        Ok(self.text_with(TextKey::Create, Keyboard::Templates(ids)))
    }

    fn on_cancel(&self, user: UserId) -> Reply {
        if !self.store.is_active(user) {
            return Reply::None;
        }
        self.close_session(user);
        self.text(TextKey::Cancel)
    }

    // ---- free text ---------------------------------------------------

    fn on_text(&self, event: &Event, text: &str) -> CartelloResult<Reply> {
        let Some(handle) = self.store.get(event.user) else {
            // stray text outside any conversation
            return Ok(Reply::None);
        };
        let mut session = handle.lock();
        match session.stage.clone() {
            Stage::TitleEntry { template } => {
                session.stage = Stage::CaptionEntry {
                    template,
                    title: text.to_uppercase(),
                };
                Ok(self.text(TextKey::Title))
            }
            Stage::CaptionEntry { template, title } => {
                session.stage = Stage::ResizeSelection {
                    template,
                    title,
                    caption: text.to_string(),
                };
                Ok(self.text_with(TextKey::Caption, Keyboard::ResizeModes))
            }
            Stage::BackgroundCollection { .. } if matches!(text.trim(), "none" | "None") => {
                self.collect_background(&mut session, None)
            }
            _ if text.starts_with('/') => Ok(Reply::None), // unknown command
            _ => Ok(self.text(TextKey::Fail)),
        }
    }

    // ---- photos ------------------------------------------------------

    fn on_photo(&self, event: &Event, photo: &PhotoRef) -> CartelloResult<Reply> {
        let Some(handle) = self.store.get(event.user) else {
            return Ok(Reply::None);
        };
        let mut session = handle.lock();
        if matches!(session.stage, Stage::BackgroundCollection { .. }) {
            self.collect_background(&mut session, Some(photo))
        } else {
            Ok(self.text(TextKey::Fail))
        }
    }

    /// Store the background (or accept its absence), render a first
    /// composite and branch on the chosen fit strategy.
    fn collect_background(
        &self,
        session: &mut Session,
        photo: Option<&PhotoRef>,
    ) -> CartelloResult<Reply> {
        let Stage::BackgroundCollection { draft } = session.stage.clone() else {
            return Ok(self.text(TextKey::Fail));
        };
        let user = session.user;

        if let Some(photo) = photo {
            let dest = self.workspace.background_path(user);
            self.media.fetch_photo(photo, &dest)?;
            session.background = Some(dest);
        }

        let image = self
            .compositor
            .render(user, &draft, &mut rand::thread_rng())?;
        session.output = Some(self.workspace.output_path(user));

        match draft.fit.mode() {
            ResizeMode::Crop => {
                session.stage = Stage::CropTuning { draft };
                Ok(Reply::Photo {
                    image,
                    keyboard: Some(Keyboard::CropPad),
                    replaces_previous: false,
                })
            }
            ResizeMode::Random => {
                session.stage = Stage::RandomRetry { draft };
                Ok(Reply::Photo {
                    image,
                    keyboard: Some(Keyboard::RandomPad),
                    replaces_previous: false,
                })
            }
            ResizeMode::Scale => {
                self.close_session(user);
                Ok(Reply::Photo {
                    image,
                    keyboard: None,
                    replaces_previous: false,
                })
            }
        }
    }

    // ---- buttons -----------------------------------------------------

    fn on_button(&self, event: &Event, action: &ButtonAction) -> CartelloResult<Reply> {
        match action {
            ButtonAction::Noop => Ok(Reply::None),
            ButtonAction::OpenSetting(field) => Ok(self.text_with(
                TextKey::Settings,
                Keyboard::SettingAdjust {
                    field: *field,
                    value: self.settings.get(*field),
                },
            )),
            ButtonAction::AlterSetting { field, op } => self.on_alter_setting(*field, *op),
            ButtonAction::Template(id) => self.on_template(event.user, id),
            ButtonAction::ResizeMode(mode) => self.on_resize_mode(event.user, *mode),
            ButtonAction::Crop(cmd) => self.on_crop(event.user, *cmd),
            ButtonAction::Random(cmd) => self.on_random(event.user, *cmd),
        }
    }

    fn on_template(&self, user: UserId, id: &str) -> CartelloResult<Reply> {
        let Some(handle) = self.store.get(user) else {
            return Ok(Reply::None); // stale button, no session
        };
        let mut session = handle.lock();
        if !matches!(session.stage, Stage::TemplateSelection) {
            return Ok(self.text(TextKey::Fail));
        }
        let template = self.catalog.get(id)?.id.clone();
        tracing::debug!(template = %template, "template selected");
        session.stage = Stage::TitleEntry { template };
        Ok(self.text(TextKey::Template))
    }

    fn on_resize_mode(&self, user: UserId, mode: ResizeMode) -> CartelloResult<Reply> {
        let Some(handle) = self.store.get(user) else {
            return Ok(Reply::None);
        };
        let mut session = handle.lock();
        match session.stage.clone() {
            Stage::ResizeSelection {
                template,
                title,
                caption,
            } => {
                session.stage = Stage::BackgroundCollection {
                    draft: Draft {
                        template,
                        title,
                        caption,
                        fit: FitStrategy::from_mode(mode),
                    },
                };
                Ok(self.text(TextKey::ResizeMode))
            }
            _ => Ok(self.text(TextKey::Fail)),
        }
    }

    fn on_crop(&self, user: UserId, cmd: CropCommand) -> CartelloResult<Reply> {
        let Some(handle) = self.store.get(user) else {
            return Ok(Reply::None);
        };
        let mut session = handle.lock();
        let Stage::CropTuning { draft } = session.stage.clone() else {
            return Ok(self.text(TextKey::Fail));
        };

        if let CropCommand::Finish = cmd {
            self.close_session(user);
            return Ok(Reply::None);
        }

        let offset = draft.fit.offset().unwrap_or(CropOffset::ZERO);
        let nudged = tuner::apply(offset, cmd, self.settings.snapshot().crop_step);
        let mut draft = draft;
        draft.fit = FitStrategy::Crop { offset: nudged };

        // render with the nudged offset; commit it only on success so a
        // failed render leaves the session exactly where it was
        let image = self
            .compositor
            .render(user, &draft, &mut rand::thread_rng())?;
        session.stage = Stage::CropTuning { draft };
        session.output = Some(self.workspace.output_path(user));
        Ok(Reply::Photo {
            image,
            keyboard: Some(Keyboard::CropPad),
            replaces_previous: true,
        })
    }

    fn on_random(&self, user: UserId, cmd: RandomCommand) -> CartelloResult<Reply> {
        let Some(handle) = self.store.get(user) else {
            return Ok(Reply::None);
        };
        let mut session = handle.lock();
        let Stage::RandomRetry { draft } = session.stage.clone() else {
            return Ok(self.text(TextKey::Fail));
        };

        match cmd {
            RandomCommand::Finish => {
                self.close_session(user);
                Ok(Reply::None)
            }
            RandomCommand::Again => {
                // a fresh window is drawn inside the fit computation
                let image = self
                    .compositor
                    .render(user, &draft, &mut rand::thread_rng())?;
                session.output = Some(self.workspace.output_path(user));
                Ok(Reply::Photo {
                    image,
                    keyboard: Some(Keyboard::RandomPad),
                    replaces_previous: true,
                })
            }
        }
    }

    // ---- settings pad ------------------------------------------------

    fn on_alter_setting(&self, field: SettingField, op: SettingOp) -> CartelloResult<Reply> {
        match op {
            SettingOp::Increase => {
                let value = self.settings.increment(field);
                Ok(self.text_with(TextKey::Settings, Keyboard::SettingAdjust { field, value }))
            }
            SettingOp::Decrease => match self.settings.decrement(field) {
                Some(value) => {
                    Ok(self.text_with(TextKey::Settings, Keyboard::SettingAdjust { field, value }))
                }
                None => Ok(Reply::None), // already at zero
            },
            SettingOp::Save => {
                self.settings.save()?;
                Ok(self.text(TextKey::Settings))
            }
            SettingOp::Cancel => Ok(self.text(TextKey::Settings)),
        }
    }

    // ---- shared ------------------------------------------------------

    /// Unconditional terminal cleanup: scratch files first, then the
    /// session itself. Safe to call with no live session.
    fn close_session(&self, user: UserId) {
        self.workspace.cleanup(user);
        self.store.remove(user);
        tracing::debug!(user = %user, "session closed");
    }

    fn active_fallback(&self, user: UserId) -> Reply {
        if self.store.is_active(user) {
            self.text(TextKey::Fail)
        } else {
            Reply::None
        }
    }

    fn text(&self, key: TextKey) -> Reply {
        Reply::Text {
            text: self.texts.text(key),
            keyboard: None,
        }
    }

    fn text_with(&self, key: TextKey, keyboard: Keyboard) -> Reply {
        Reply::Text {
            text: self.texts.text(key),
            keyboard: Some(keyboard),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/machine.rs"]
mod tests;
