//! The session controller: one submit cycle at a time.
//!
//! Submission is split in two halves so the network round trip can run
//! elsewhere: [`SessionController::begin_submission`] guards, echoes and
//! builds the request; [`SessionController::resolve`] renders its outcome.

use std::collections::BTreeMap;

use crate::config::EffectiveConfig;
use crate::transcript::{InputLine, Transcript, TranscriptRenderer};
use crate::transport::CommandRequest;

use super::outcome::RequestOutcome;

/// Why a submission was dispatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitTrigger {
    /// The user pressed Enter.
    User,
    /// The automatic submission fired during initialization.
    ForcedFirst,
}

pub struct SessionController {
    url: String,
    config: EffectiveConfig,
    post_fields: BTreeMap<String, String>,
    renderer: TranscriptRenderer,
}

impl SessionController {
    pub fn new(url: impl Into<String>, config: EffectiveConfig, renderer: TranscriptRenderer) -> Self {
        let post_fields = config.extra_post_fields.clone();
        Self {
            url: url.into(),
            config,
            post_fields,
            renderer,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn config(&self) -> &EffectiveConfig {
        &self.config
    }

    pub fn transcript(&self) -> &Transcript {
        self.renderer.transcript()
    }

    pub fn input(&self) -> &InputLine {
        self.renderer.input()
    }

    pub(crate) fn renderer_mut(&mut self) -> &mut TranscriptRenderer {
        &mut self.renderer
    }

    /// Replace the typed input value.
    pub fn set_input(&mut self, value: &str) -> bool {
        self.renderer.set_input_value(value)
    }

    /// Run the synchronous half of a submit cycle.
    ///
    /// Returns `None` when blank input is rejected; nothing is rendered and
    /// no request is built in that case.
    pub fn begin_submission(&mut self, trigger: SubmitTrigger) -> Option<CommandRequest> {
        let value = self.renderer.input().value().trim().to_string();

        if value.is_empty()
            && trigger != SubmitTrigger::ForcedFirst
            && !self.config.allow_empty_input
        {
            tracing::trace!("blank input ignored");
            return None;
        }

        self.renderer.hide_input();
        if !value.is_empty() || self.config.allow_empty_input {
            self.renderer.echo_command(&self.config, &value);
        }

        self.post_fields
            .insert(self.config.input_field_name.clone(), value);

        Some(CommandRequest {
            url: self.url.clone(),
            method: self.config.form_method.clone(),
            fields: self.post_fields.clone(),
        })
    }

    /// Render the outcome of a dispatched request.
    pub fn resolve(&mut self, outcome: RequestOutcome) {
        self.append(&outcome.into_transcript_text());
    }

    /// Append text to the transcript outside the request cycle.
    pub fn append(&mut self, text: &str) {
        self.renderer.append(&self.config, text);
    }
}
