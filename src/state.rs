use std::rc::Rc;

use serde::Serialize;
use yew::prelude::*;

/// The closed set of answers a guest can give.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RsvpStatus {
    #[serde(rename = "Happily attending")]
    Attending,
    #[serde(rename = "Regretfully declines")]
    Declining,
}

impl RsvpStatus {
    pub const ALL: [RsvpStatus; 2] = [RsvpStatus::Attending, RsvpStatus::Declining];

    pub fn label(self) -> &'static str {
        match self {
            RsvpStatus::Attending => "Happily attending",
            RsvpStatus::Declining => "Regretfully declines",
        }
    }

    pub fn from_label(s: &str) -> Option<RsvpStatus> {
        Self::ALL.into_iter().find(|st| st.label() == s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestState {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuestSession {
    pub code: String,
    pub name: String,
}

/// What the server echoed back after a successful RSVP.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RsvpEcho {
    pub name: Option<String>,
    pub status: Option<RsvpStatus>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RsvpAction {
    EditCode(String),
    LookupStarted,
    LookupSucceeded { epoch: u32, code: String, name: String },
    LookupFailed { epoch: u32, message: String },
    SelectStatus(Option<RsvpStatus>),
    SubmitStarted,
    SubmitSucceeded { epoch: u32, echo: RsvpEcho },
    SubmitFailed { epoch: u32, message: String },
    Reset,
}

/// Everything the RSVP card shows.
///
/// `epoch` moves on every reset; completions tagged with an older epoch are
/// dropped so a slow reply cannot resurrect a session the guest walked away from.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RsvpState {
    pub code_input: String,
    pub lookup: RequestState,
    pub lookup_error: Option<String>,
    pub session: Option<GuestSession>,
    pub selected: Option<RsvpStatus>,
    pub submit: RequestState,
    pub submit_error: Option<String>,
    pub epoch: u32,
}

impl RsvpState {
    /// The code to send, or `None` when nothing should go over the wire.
    pub fn lookup_code(&self) -> Option<String> {
        if self.lookup == RequestState::Loading {
            return None;
        }
        let code = self.code_input.trim();
        if code.is_empty() {
            None
        } else {
            Some(code.to_string())
        }
    }

    /// Code and answer to submit, once a guest is verified and has picked one.
    pub fn submission(&self) -> Option<(String, RsvpStatus)> {
        if self.submit == RequestState::Loading {
            return None;
        }
        let session = self.session.as_ref()?;
        let status = self.selected?;
        Some((session.code.clone(), status))
    }

    pub fn can_submit(&self) -> bool {
        self.submission().is_some()
    }

    pub fn shows_status_selector(&self) -> bool {
        self.session.is_some()
    }

    pub fn greeting(&self) -> Option<String> {
        self.session.as_ref().map(|s| format!("Hi! {}", s.name))
    }

    pub fn subtitle(&self) -> &'static str {
        if self.session.is_some() {
            "Update your RSVP below."
        } else {
            "Enter your RSVP code to continue."
        }
    }

    pub fn lookup_button_label(&self) -> &'static str {
        if self.lookup == RequestState::Loading {
            "Checking…"
        } else {
            "Enter code"
        }
    }

    pub fn submit_button_label(&self) -> &'static str {
        if self.submit == RequestState::Loading {
            "Submitting…"
        } else {
            "Submit RSVP"
        }
    }

    pub fn apply(&self, action: RsvpAction) -> RsvpState {
        let mut next = self.clone();
        match action {
            RsvpAction::EditCode(v) => next.code_input = v,
            RsvpAction::LookupStarted => {
                next.lookup = RequestState::Loading;
                next.lookup_error = None;
                next.submit = RequestState::Idle;
                next.submit_error = None;
            }
            RsvpAction::LookupSucceeded { epoch, code, name } => {
                if epoch != self.epoch {
                    return next;
                }
                next.session = Some(GuestSession { code, name });
                next.selected = None;
                next.code_input.clear();
                next.lookup = RequestState::Success;
            }
            RsvpAction::LookupFailed { epoch, message } => {
                if epoch != self.epoch {
                    return next;
                }
                next.lookup = RequestState::Error;
                next.lookup_error = Some(message);
            }
            RsvpAction::SelectStatus(status) => next.selected = status,
            RsvpAction::SubmitStarted => {
                next.submit = RequestState::Loading;
                next.submit_error = None;
            }
            RsvpAction::SubmitSucceeded { epoch, echo } => {
                if epoch != self.epoch {
                    return next;
                }
                if let (Some(name), Some(session)) = (echo.name, next.session.as_mut()) {
                    if !name.is_empty() {
                        session.name = name;
                    }
                }
                if let Some(status) = echo.status {
                    next.selected = Some(status);
                }
                next.submit = RequestState::Success;
                next.submit_error = None;
            }
            RsvpAction::SubmitFailed { epoch, message } => {
                if epoch != self.epoch {
                    return next;
                }
                next.submit = RequestState::Error;
                next.submit_error = Some(message);
            }
            RsvpAction::Reset => {
                next = RsvpState {
                    epoch: self.epoch.wrapping_add(1),
                    ..RsvpState::default()
                };
            }
        }
        next
    }
}

impl Reducible for RsvpState {
    type Action = RsvpAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(self.apply(action))
    }
}
