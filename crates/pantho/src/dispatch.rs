//! Routing of window events to their handlers.
//!
//! Every [`Message`] produced by the window passes through a [`Dispatcher`], which looks up the
//! handler registered for it and runs it against the application [`State`].
//! Once the state has reached [`Phase::Terminated`], nothing is dispatched anymore.

use std::collections::HashMap;

use iced::Task;

use crate::app::{Message, Phase, State};

/// A function reacting to one kind of [`Message`].
///
/// The returned [`Task`] is handed back to the iced runtime.
pub type Handler = fn(&mut State) -> Task<Message>;

/// Table of registered handlers, keyed by the message they react to.
#[derive(Debug, Default, Clone)]
pub struct Dispatcher {
    handlers: HashMap<Message, Handler>,
}

impl Dispatcher {
    /// Creates a [`Dispatcher`] without any handlers.
    ///
    /// All messages dispatched through it are dropped.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `handler` for `message`, returning the previously registered handler, if any.
    pub fn register(&mut self, message: Message, handler: Handler) -> Option<Handler> {
        self.handlers.insert(message, handler)
    }

    #[must_use]
    pub fn is_registered(&self, message: Message) -> bool {
        self.handlers.contains_key(&message)
    }

    /// Runs the handler registered for `message`.
    ///
    /// Messages arriving after termination, and messages without a handler, are dropped and
    /// produce [`Task::none`].
    pub fn dispatch(&self, state: &mut State, message: Message) -> Task<Message> {
        if state.phase() == Phase::Terminated {
            tracing::debug!(?message, "dropping message received after termination");
            return Task::none();
        }

        match self.handlers.get(&message) {
            Some(handler) => handler(state),
            None => {
                tracing::debug!(?message, "no handler registered");
                Task::none()
            }
        }
    }
}
