//! Widget lifecycle: initialization sequence, request dispatch, and the
//! event channel that completions and external appends arrive on.
//!
//! The widget is single-task: it is driven by whoever owns it, and every
//! request runs on a spawned task that reports back exactly once through the
//! widget's channel.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::config::{resolve_effective_config, EffectiveConfig, TerminalOptions};
use crate::transcript::{InputLine, Transcript, TranscriptRenderer};
use crate::transport::{CommandRequest, CommandTransport};
use crate::ui::render::RenderSink;
use crate::ui::theme::UNIX_THEME;

use super::controller::{SessionController, SubmitTrigger};
use super::outcome::{FailureKind, RequestOutcome};

/// Capabilities the hosting surface provides to the widget.
pub trait HostSurface {
    /// Current inner height of the container, in pixels.
    fn container_inner_height(&self) -> u32;
    /// Whether the user currently has text selected inside the widget.
    fn has_text_selection(&self) -> bool {
        false
    }
}

/// Messages delivered to the widget's event loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetEvent {
    /// A dispatched request finished.
    Completed { seq: u64, outcome: RequestOutcome },
    /// Text injected through a [`WidgetHandle`].
    Append(String),
}

/// Cloneable handle for appending output from outside the request cycle.
#[derive(Debug, Clone)]
pub struct WidgetHandle {
    tx: mpsc::UnboundedSender<WidgetEvent>,
}

impl WidgetHandle {
    /// Queue `text` for the transcript. Returns `false` once the widget is gone.
    pub fn append(&self, text: impl Into<String>) -> bool {
        self.tx.send(WidgetEvent::Append(text.into())).is_ok()
    }
}

/// One terminal widget instance.
pub struct TerminalWidget {
    session: SessionController,
    transport: Arc<dyn CommandTransport>,
    tx: mpsc::UnboundedSender<WidgetEvent>,
    rx: mpsc::UnboundedReceiver<WidgetEvent>,
    click_to_focus: bool,
    in_flight: usize,
    next_seq: u64,
}

impl TerminalWidget {
    /// Build the widget and run its initialization sequence.
    ///
    /// With `submit_on_load` the first request is spawned onto the current
    /// tokio runtime.
    pub fn init(
        url: impl Into<String>,
        options: &TerminalOptions,
        host: &dyn HostSurface,
        transport: Arc<dyn CommandTransport>,
        sink: Option<Box<dyn RenderSink>>,
    ) -> Self {
        let config = resolve_effective_config(options, || host.container_inner_height());
        let renderer = match sink {
            Some(sink) => TranscriptRenderer::with_sink(sink),
            None => TranscriptRenderer::new(),
        };
        let (tx, rx) = mpsc::unbounded_channel();
        let mut widget = Self {
            session: SessionController::new(url, config, renderer),
            transport,
            tx,
            rx,
            click_to_focus: false,
            in_flight: 0,
            next_seq: 0,
        };
        tracing::info!(url = %widget.session.url(), "initializing terminal widget");

        let config = widget.session.config().clone();
        if config.theme_enabled {
            widget.session.renderer_mut().apply_theme(&UNIX_THEME);
        }
        widget.click_to_focus = config.grab_focus_on_click;
        if let Some(message) = &config.hello_message {
            widget.session.renderer_mut().greet(message);
        }
        if config.submit_on_load {
            widget.submit_with(SubmitTrigger::ForcedFirst);
        }
        if config.focus_on_load {
            widget.session.renderer_mut().focus_input();
        }
        if config.input_disabled {
            widget.session.renderer_mut().disable_input();
        }
        if let Some(hook) = &config.on_load {
            hook.call();
        }
        widget
    }

    pub fn handle(&self) -> WidgetHandle {
        WidgetHandle {
            tx: self.tx.clone(),
        }
    }

    pub fn config(&self) -> &EffectiveConfig {
        self.session.config()
    }

    pub fn url(&self) -> &str {
        self.session.url()
    }

    pub fn transcript(&self) -> &Transcript {
        self.session.transcript()
    }

    pub fn input(&self) -> &InputLine {
        self.session.input()
    }

    /// Requests dispatched and not yet resolved.
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Replace the text in the input line, as if typed.
    pub fn type_input(&mut self, text: &str) -> bool {
        self.session.set_input(text)
    }

    /// Submit the current input. Returns whether a request was dispatched.
    pub fn submit(&mut self) -> bool {
        self.submit_with(SubmitTrigger::User)
    }

    /// A click inside the widget refocuses the input unless text is selected.
    pub fn click(&mut self, host: &dyn HostSurface) {
        if self.click_to_focus && !host.has_text_selection() {
            self.session.renderer_mut().focus_input();
        }
    }

    /// Append text directly, outside the request cycle.
    pub fn append(&mut self, text: &str) {
        self.session.append(text);
    }

    /// Wait for the next completion or external append.
    pub async fn next_event(&mut self) -> Option<WidgetEvent> {
        self.rx.recv().await
    }

    /// Apply one event to the session.
    pub fn handle_event(&mut self, event: WidgetEvent) {
        match event {
            WidgetEvent::Completed { seq, outcome } => {
                self.in_flight = self.in_flight.saturating_sub(1);
                tracing::debug!(seq, ?outcome, "request completed");
                self.session.resolve(outcome);
            }
            WidgetEvent::Append(text) => self.session.append(&text),
        }
    }

    /// Apply every event already queued without waiting.
    pub fn drain_events(&mut self) {
        while let Ok(event) = self.rx.try_recv() {
            self.handle_event(event);
        }
    }

    /// Process events until no request is in flight.
    pub async fn settle(&mut self) {
        while self.in_flight > 0 {
            // The widget holds a sender, so the channel never closes here.
            let Some(event) = self.rx.recv().await else {
                break;
            };
            self.handle_event(event);
        }
        self.drain_events();
    }

    fn submit_with(&mut self, trigger: SubmitTrigger) -> bool {
        let Some(request) = self.session.begin_submission(trigger) else {
            return false;
        };
        self.dispatch(request);
        true
    }

    fn dispatch(&mut self, request: CommandRequest) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.in_flight += 1;

        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            tracing::error!("no tokio runtime available; cannot dispatch command");
            let _ = self.tx.send(WidgetEvent::Completed {
                seq,
                outcome: RequestOutcome::Failure(FailureKind::GenericError),
            });
            return;
        };

        let transport = Arc::clone(&self.transport);
        let tx = self.tx.clone();
        runtime.spawn(async move {
            // The inner task isolates transport panics so completion still fires.
            let result = tokio::spawn(async move { transport.send(&request).await }).await;
            let outcome = match result {
                Ok(result) => RequestOutcome::from_result(result),
                Err(err) => {
                    tracing::error!(error = %err, "command transport task failed");
                    RequestOutcome::Failure(FailureKind::GenericError)
                }
            };
            let _ = tx.send(WidgetEvent::Completed { seq, outcome });
        });
    }
}
