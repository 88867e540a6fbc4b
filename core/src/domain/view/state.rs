use crate::domain::guide::entities::{ChatContext, GuideResult};
use crate::domain::view::render;

/// Which screen drives the page at any moment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewState {
    /// Upload card visible, inputs empty, submit disabled.
    #[default]
    Idle,
    /// An image is selected or the location text is non-empty.
    Ready,
    /// Analyze request in flight, spinner shown, submit disabled.
    Loading,
    /// Result card visible, upload card hidden, chat seeded.
    Result,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    MapPicker,
    About,
    Destinations,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub sender: Sender,
    pub text: String,
}

/// Everything the page reacts to.
#[derive(Debug, Clone)]
pub enum ViewEvent {
    ImageSelected,
    LocationChanged(String),
    AnalyzeRequested,
    AnalyzeCompleted(GuideResult),
    AnalyzeFailed(String),
    ChatQuestionSent(String),
    ChatAnswerReceived(String),
    ChatFailed,
    OverlayOpened(Overlay),
    OverlayClosed,
    /// Gallery shortcut: sets the location and reuses the analyze path.
    DestinationPicked(String),
    ResultClosed,
    HomePressed,
}

/// Explicit view model; every screen transition goes through [`ViewModel::apply`].
#[derive(Debug, Clone, Default)]
pub struct ViewModel {
    state: ViewState,
    location_input: String,
    image_selected: bool,
    overlay: Option<Overlay>,
    result: Option<GuideResult>,
    context: Option<ChatContext>,
    chat_transcript: Vec<ChatMessage>,
    alert: Option<String>,
}

impl ViewModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ViewState {
        self.state
    }

    /// The analyze button is enabled only while inputs are present and no
    /// request is in flight.
    pub fn submit_enabled(&self) -> bool {
        self.state == ViewState::Ready
    }

    pub fn location_input(&self) -> &str {
        &self.location_input
    }

    pub fn image_selected(&self) -> bool {
        self.image_selected
    }

    pub fn overlay(&self) -> Option<Overlay> {
        self.overlay
    }

    pub fn result(&self) -> Option<&GuideResult> {
        self.result.as_ref()
    }

    pub fn context(&self) -> Option<&ChatContext> {
        self.context.as_ref()
    }

    pub fn chat_transcript(&self) -> &[ChatMessage] {
        &self.chat_transcript
    }

    /// Pending blocking alert, if any. Taking it clears it.
    pub fn take_alert(&mut self) -> Option<String> {
        self.alert.take()
    }

    pub fn apply(&mut self, event: ViewEvent) {
        match event {
            ViewEvent::ImageSelected => {
                if matches!(self.state, ViewState::Idle | ViewState::Ready) {
                    self.image_selected = true;
                    // Selecting an image clears any typed location.
                    self.location_input.clear();
                    self.state = ViewState::Ready;
                }
            }
            ViewEvent::LocationChanged(text) => {
                if matches!(self.state, ViewState::Idle | ViewState::Ready) {
                    self.location_input = text;
                    self.state = if self.has_input() {
                        ViewState::Ready
                    } else {
                        ViewState::Idle
                    };
                }
            }
            ViewEvent::AnalyzeRequested => {
                // The button is disabled outside Ready; ignore stray clicks.
                if self.state == ViewState::Ready {
                    self.state = ViewState::Loading;
                }
            }
            ViewEvent::AnalyzeCompleted(result) => {
                if self.state == ViewState::Loading {
                    self.context = Some(result.context());
                    self.chat_transcript = vec![ChatMessage {
                        sender: Sender::Bot,
                        text: render::greeting(&result),
                    }];
                    self.result = Some(result);
                    self.state = ViewState::Result;
                }
            }
            ViewEvent::AnalyzeFailed(message) => {
                if self.state == ViewState::Loading {
                    self.alert = Some(message);
                    self.state = if self.has_input() {
                        ViewState::Ready
                    } else {
                        ViewState::Idle
                    };
                }
            }
            ViewEvent::ChatQuestionSent(question) => {
                if self.state == ViewState::Result && !question.trim().is_empty() {
                    self.chat_transcript.push(ChatMessage {
                        sender: Sender::User,
                        text: question,
                    });
                }
            }
            ViewEvent::ChatAnswerReceived(answer) => {
                if self.state == ViewState::Result {
                    self.chat_transcript.push(ChatMessage {
                        sender: Sender::Bot,
                        text: answer,
                    });
                }
            }
            ViewEvent::ChatFailed => {
                if self.state == ViewState::Result {
                    self.chat_transcript.push(ChatMessage {
                        sender: Sender::Bot,
                        text: "Sorry, I couldn't fetch an answer.".to_string(),
                    });
                }
            }
            ViewEvent::OverlayOpened(overlay) => {
                self.overlay = Some(overlay);
            }
            ViewEvent::OverlayClosed => {
                self.overlay = None;
            }
            ViewEvent::DestinationPicked(name) => {
                if matches!(self.state, ViewState::Idle | ViewState::Ready) {
                    self.overlay = None;
                    self.image_selected = false;
                    self.location_input = name;
                    self.state = ViewState::Ready;
                    // Same analyze transition as a manual submit.
                    self.apply(ViewEvent::AnalyzeRequested);
                }
            }
            ViewEvent::ResultClosed | ViewEvent::HomePressed => {
                self.reset();
            }
        }
    }

    fn has_input(&self) -> bool {
        self.image_selected || !self.location_input.trim().is_empty()
    }

    /// Back to a pristine upload screen: inputs cleared, overlays closed,
    /// result and chat context discarded.
    fn reset(&mut self) {
        *self = Self::default();
    }
}
