//! The contact sub-dialogue: a three-field form that owns all input while
//! it is active.
//!
//! ```text
//! idle -> awaiting-name -> awaiting-email -> awaiting-message -> idle
//!              \________________\_________________\__ abort __/
//! ```

use std::sync::LazyLock;

use regex::Regex;

use crate::output::CommandOutput;

/// History label used when the message step receives empty input.
pub const EMPTY_MESSAGE_LABEL: &str = "<empty message>";

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\S+@\S+\.\S+$").expect("email pattern compiles"));

/// Whether `input` has the `nonspace@nonspace.nonspace` shape.
pub fn is_valid_email(input: &str) -> bool {
    EMAIL_RE.is_match(input)
}

/// Position in the dialogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContactStep {
    #[default]
    Idle,
    AwaitingName,
    AwaitingEmail,
    AwaitingMessage,
}

impl ContactStep {
    /// Short field name, used for `contact:<step>` log tags.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::AwaitingName => "name",
            Self::AwaitingEmail => "email",
            Self::AwaitingMessage => "message",
        }
    }

    /// Label replacing the shell prompt while this step is active.
    pub fn prompt_label(self) -> Option<&'static str> {
        match self {
            Self::Idle => None,
            Self::AwaitingName => Some("Name:"),
            Self::AwaitingEmail => Some("Email:"),
            Self::AwaitingMessage => Some("Message:"),
        }
    }
}

/// A completed form, handed to the host for delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// What one dialogue step produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepReply {
    /// Text recorded as the history entry's input.
    pub label: String,
    pub output: CommandOutput,
    /// `contact:<step>` tag for the command log, on accepted steps only.
    pub log_tag: Option<String>,
    /// Set when the final step completes the form.
    pub submission: Option<ContactSubmission>,
}

/// Contact form state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    step: ContactStep,
    name: String,
    email: String,
    message: String,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> ContactStep {
        self.step
    }

    pub fn is_active(&self) -> bool {
        self.step != ContactStep::Idle
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Start a fresh dialogue at the name step.
    pub fn begin(&mut self) {
        *self = Self {
            step: ContactStep::AwaitingName,
            ..Self::default()
        };
    }

    /// Return to idle, discarding collected fields.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Feed one line of input. Returns `None` when the dialogue is idle.
    pub fn handle(&mut self, input: &str) -> Option<StepReply> {
        let input = input.trim();
        let step = self.step;
        if step == ContactStep::Idle {
            return None;
        }

        if input.eq_ignore_ascii_case("abort") {
            self.reset();
            return Some(reply(
                input,
                CommandOutput::Text("Contact process aborted.".to_string()),
                None,
            ));
        }

        if input.is_empty() && step != ContactStep::AwaitingMessage {
            return Some(reply(
                input,
                CommandOutput::Error(
                    "Input cannot be empty. Please try again, or type 'abort' to cancel."
                        .to_string(),
                ),
                None,
            ));
        }

        let tag = Some(format!("contact:{}", step.tag()));
        let reply = match step {
            ContactStep::AwaitingName => {
                self.name = input.to_string();
                self.step = ContactStep::AwaitingEmail;
                reply(
                    input,
                    CommandOutput::Text(format!("Thanks, {input}. What is your email address?")),
                    tag,
                )
            },
            ContactStep::AwaitingEmail => {
                if !is_valid_email(input) {
                    return Some(reply(
                        input,
                        CommandOutput::Error(
                            "Please enter a valid email address, or type 'abort' to cancel."
                                .to_string(),
                        ),
                        None,
                    ));
                }
                self.email = input.to_string();
                self.step = ContactStep::AwaitingMessage;
                reply(
                    input,
                    CommandOutput::Text("Got it. Finally, what is your message?".to_string()),
                    tag,
                )
            },
            ContactStep::AwaitingMessage => {
                self.message = input.to_string();
                let submission = ContactSubmission {
                    name: std::mem::take(&mut self.name),
                    email: std::mem::take(&mut self.email),
                    message: std::mem::take(&mut self.message),
                };
                self.reset();
                let label = if input.is_empty() {
                    EMPTY_MESSAGE_LABEL
                } else {
                    input
                };
                StepReply {
                    label: label.to_string(),
                    output: CommandOutput::Success {
                        title: "Success!".to_string(),
                        message: format!(
                            "Your message has been sent. Thank you for reaching out, {}!",
                            submission.name
                        ),
                    },
                    log_tag: tag,
                    submission: Some(submission),
                }
            },
            ContactStep::Idle => return None,
        };
        Some(reply)
    }
}

fn reply(label: &str, output: CommandOutput, log_tag: Option<String>) -> StepReply {
    StepReply {
        label: label.to_string(),
        output,
        log_tag,
        submission: None,
    }
}
