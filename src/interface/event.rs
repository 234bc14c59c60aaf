use crate::{
    foundation::core::{ChatId, UserId},
    interface::action::ButtonAction,
};

/// Slash commands the conversation understands. Anything else the transport
/// classifies as a command is ignored by the machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Welcome message.
    Start,
    /// Command summary.
    Help,
    /// Entry point of the creation flow.
    Create,
    /// Abort the creation flow.
    Cancel,
    /// Open the shared settings menu.
    Settings,
}

impl Command {
    /// Parse a command message, tolerating a `@botname` suffix.
    pub fn parse(text: &str) -> Option<Self> {
        let name = text.split('@').next().unwrap_or(text);
        match name {
            "/start" => Some(Self::Start),
            "/help" => Some(Self::Help),
            "/create" => Some(Self::Create),
            "/cancel" => Some(Self::Cancel),
            "/settings" => Some(Self::Settings),
            _ => None,
        }
    }
}

/// Opaque transport-side reference to an uploaded photo, resolvable through
/// [`MediaExchange`](crate::interface::collaborators::MediaExchange).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PhotoRef(pub String);

/// Payload of a classified inbound event.
#[derive(Clone, Debug)]
pub enum EventKind {
    /// A recognized slash command.
    Command(Command),
    /// Free text that is not a recognized command.
    Text(String),
    /// An uploaded photo.
    Photo(PhotoRef),
    /// An inline keyboard press.
    Button(ButtonAction),
    /// Anything the classifier could not type (stickers, documents, ...).
    Unsupported,
}

/// One classified inbound event, delivered by the transport collaborator.
#[derive(Clone, Debug)]
pub struct Event {
    /// Identity of the sender; keys the session.
    pub user: UserId,
    /// Chat the event originated from; checked against the allow list.
    pub chat: ChatId,
    /// Classified payload.
    pub kind: EventKind,
}

impl Event {
    /// Convenience constructor.
    pub fn new(user: UserId, chat: ChatId, kind: EventKind) -> Self {
        Self { user, chat, kind }
    }
}
