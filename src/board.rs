//! View-model for the activity board.
//!
//! Everything the page decides to show lives here, out of the
//! wasm-only rendering code, so it can be unit-tested on the host:
//! card contents, the load lifecycle, notice text, and what happens
//! after a signup or unregister resolves.

use crate::api::ApiError;
use crate::model::{Activity, ActivityCollection};

/// How long a signup notice stays on screen before it is auto-hidden.
pub const NOTICE_HIDE_MS: u32 = 5_000;

/// Load lifecycle of the activity list. A reload keeps showing the
/// previous snapshot until its response arrives; only the very first
/// render starts in `Loading`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RosterState {
    #[default]
    Loading,
    Loaded(ActivityCollection),
    Failed,
}

impl RosterState {
    pub fn after_fetch(result: Result<ActivityCollection, ApiError>) -> Self {
        match result {
            Ok(activities) => RosterState::Loaded(activities),
            Err(_) => RosterState::Failed,
        }
    }
}

/// One rendered activity card, precomputed from the wire snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityCard {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub spots_left: i64,
    pub participants: Vec<String>,
}

/// Remaining capacity as displayed: max minus roster size, signed so an
/// overbooked roster shows its real (negative) value.
pub fn spots_left(activity: &Activity) -> i64 {
    i64::from(activity.max_participants) - activity.participants.len() as i64
}

pub fn cards(activities: &ActivityCollection) -> Vec<ActivityCard> {
    activities
        .iter()
        .map(|(name, activity)| ActivityCard {
            name: name.clone(),
            description: activity.description.clone(),
            schedule: activity.schedule.clone(),
            spots_left: spots_left(activity),
            participants: activity.participants.clone(),
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    pub fn css_class(self) -> &'static str {
        match self {
            NoticeKind::Success => "success",
            NoticeKind::Error => "error",
        }
    }
}

/// Transient banner shown under the signup form.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub text: String,
    pub kind: NoticeKind,
}

impl Notice {
    pub fn success(text: String) -> Self {
        Notice {
            text,
            kind: NoticeKind::Success,
        }
    }

    pub fn error(text: String) -> Self {
        Notice {
            text,
            kind: NoticeKind::Error,
        }
    }
}

/// Notice state once the auto-hide timer fires. Hidden stays hidden,
/// so a timer firing after the notice is already gone changes nothing.
pub fn hide_notice(_current: Option<Notice>) -> Option<Notice> {
    None
}

/// What the page does once a signup request resolves.
#[derive(Debug, Clone, PartialEq)]
pub struct SignupEffects {
    pub notice: Notice,
    pub clear_form: bool,
    pub reload: bool,
}

pub fn after_signup(result: Result<String, ApiError>) -> SignupEffects {
    match result {
        Ok(message) => SignupEffects {
            notice: Notice::success(message),
            clear_form: true,
            reload: true,
        },
        Err(ApiError::Status { detail, .. }) => SignupEffects {
            notice: Notice::error(detail.unwrap_or_else(|| "An error occurred".to_string())),
            clear_form: false,
            reload: false,
        },
        Err(_) => SignupEffects {
            notice: Notice::error("Failed to sign up. Please try again.".to_string()),
            clear_form: false,
            reload: false,
        },
    }
}

/// What the page does once an unregister request resolves. `alert` is a
/// blocking dialog, not a notice.
#[derive(Debug, Clone, PartialEq)]
pub struct UnregisterEffects {
    pub alert: Option<String>,
    pub reload: bool,
}

pub fn after_unregister(result: Result<(), ApiError>) -> UnregisterEffects {
    match result {
        Ok(()) => UnregisterEffects {
            alert: None,
            reload: true,
        },
        Err(ApiError::Status { detail, .. }) => UnregisterEffects {
            alert: Some(detail.unwrap_or_else(|| "Failed to unregister participant".to_string())),
            reload: false,
        },
        Err(_) => UnregisterEffects {
            alert: Some("Failed to unregister. Please try again.".to_string()),
            reload: false,
        },
    }
}
