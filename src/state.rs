use std::rc::Rc;

use yew::functional::Reducible;

use crate::config::AppConfig;
use crate::render::{Notice, NoticeKind};

#[derive(Debug, Clone, PartialEq, Default)]
pub enum UiState {
    #[default]
    Idle,
    Loading,
    Success(Notice),
    Error(Notice),
}

pub enum UiAction {
    /// Form submitted with a valid request.
    Submit,
    /// The in-flight request finished, either way.
    Finish(Notice),
    /// Local validation failed; nothing was sent.
    Reject(Notice),
    /// Probe advisory. Only shown over an empty message region.
    Advise(Notice),
    /// The user started typing.
    DismissError,
    AutoHide(u64),
}

/// Message region state. `generation` changes whenever a notice is shown so a
/// hide timer scheduled for an older notice cannot clear a newer one.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UiModel {
    pub state: UiState,
    pub generation: u64,
}

impl UiModel {
    pub fn is_loading(&self) -> bool {
        matches!(self.state, UiState::Loading)
    }

    pub fn notice(&self) -> Option<&Notice> {
        match &self.state {
            UiState::Success(n) | UiState::Error(n) => Some(n),
            _ => None,
        }
    }

    /// Delay before the current notice hides itself, if any.
    pub fn hide_delay(&self, config: &AppConfig) -> Option<u32> {
        match self.state {
            UiState::Success(_) => config.success_hide_ms,
            UiState::Error(_) => config.error_hide_ms,
            _ => None,
        }
    }

    fn show(&self, notice: Notice) -> Self {
        let state = match notice.kind {
            NoticeKind::Success => UiState::Success(notice),
            NoticeKind::Error | NoticeKind::Warning => UiState::Error(notice),
        };
        Self { state, generation: self.generation + 1 }
    }

    fn with_state(&self, state: UiState) -> Self {
        Self { state, generation: self.generation + 1 }
    }

    pub fn apply(&self, action: UiAction) -> Option<Self> {
        match action {
            UiAction::Submit if self.is_loading() => None,
            UiAction::Submit => Some(self.with_state(UiState::Loading)),
            UiAction::Finish(n) if self.is_loading() => Some(self.show(n)),
            UiAction::Finish(_) => None,
            UiAction::Reject(_) if self.is_loading() => None,
            UiAction::Reject(n) => Some(self.show(n)),
            UiAction::Advise(n) if self.state == UiState::Idle => Some(self.show(n)),
            UiAction::Advise(_) => None,
            UiAction::DismissError => match self.state {
                UiState::Error(_) => Some(self.with_state(UiState::Idle)),
                _ => None,
            },
            UiAction::AutoHide(g) if g == self.generation && self.notice().is_some() => {
                Some(Self { state: UiState::Idle, generation: self.generation })
            }
            UiAction::AutoHide(_) => None,
        }
    }
}

impl Reducible for UiModel {
    type Action = UiAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match self.apply(action) {
            Some(next) => Rc::new(next),
            None => self,
        }
    }
}
