use iced::widget::{button, column, text};
use iced::{window, Alignment, Element, Length, Subscription, Task};

use crate::counter::Counter;
use crate::dispatch::Dispatcher;
use crate::style;

/// Events produced by the counter window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Message {
    /// The button was pressed.
    Click,
    /// The user asked to close the window.
    CloseRequested,
}

/// Lifecycle of the application window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// The window is open and accepts events.
    #[default]
    Running,
    /// The window was closed. This is final.
    Terminated,
}

/// State mutated by the registered handlers.
#[derive(Debug, Default)]
pub struct State {
    counter: Counter,
    phase: Phase,
}

impl State {
    #[must_use]
    pub const fn counter(&self) -> Counter {
        self.counter
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }
}

/// Increments the counter. The label picks up the new value on the next `view`.
fn on_click(state: &mut State) -> Task<Message> {
    let value = state.counter.increment();
    tracing::debug!(value, "button clicked");
    Task::none()
}

fn on_close(state: &mut State) -> Task<Message> {
    state.phase = Phase::Terminated;
    tracing::info!(clicks = state.counter.value(), "window closed");
    iced::exit()
}

/// The counter application: a button and a label showing how often it was pressed.
#[derive(Debug)]
pub struct App {
    state: State,
    dispatcher: Dispatcher,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Creates the application with the counter at zero and the click and close handlers
    /// registered.
    #[must_use]
    pub fn new() -> Self {
        let mut dispatcher = Dispatcher::new();
        dispatcher.register(Message::Click, on_click);
        dispatcher.register(Message::CloseRequested, on_close);
        Self {
            state: State::default(),
            dispatcher,
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        self.dispatcher.dispatch(&mut self.state, message)
    }

    #[must_use]
    pub fn view(&self) -> Element<'_, Message> {
        let click = button(
            text(style::BUTTON_TEXT)
                .font(style::BUTTON_FONT)
                .size(style::BUTTON_TEXT_SIZE),
        )
        .on_press(Message::Click)
        .style(style::click_button);

        let label = text(self.label())
            .font(style::LABEL_FONT)
            .size(style::LABEL_TEXT_SIZE);

        column![click, label]
            .width(Length::Fill)
            .align_x(Alignment::Center)
            .into()
    }

    #[must_use]
    #[expect(clippy::unused_self)] // required by `iced::application`
    pub(crate) fn subscription(&self) -> Subscription<Message> {
        window::close_requests().map(|_| Message::CloseRequested)
    }

    #[must_use]
    pub const fn counter(&self) -> Counter {
        self.state.counter()
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// Text currently shown by the label.
    #[must_use]
    pub fn label(&self) -> String {
        self.state.counter().label()
    }

    #[must_use]
    pub const fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }
}
