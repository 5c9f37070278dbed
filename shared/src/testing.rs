//! Test doubles: a scripted transport, a recording ui and a fake trigger,
//! all writing to one ordered event log.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use crate::client::{ApiRequest, Transport};
use crate::config::ClientConfig;
use crate::dispatcher::{Control, Dispatcher, Ui};
use crate::endpoints::Route;
use crate::error::ClientError;
use crate::notice::Notice;

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Sent(ApiRequest),
    Notified(Notice),
    Confirmed(String),
    Navigated(Route),
    Disabled(bool),
}

#[derive(Clone, Default)]
pub struct Log(Rc<RefCell<Vec<Event>>>);

impl Log {
    fn push(&self, event: Event) {
        self.0.borrow_mut().push(event);
    }

    pub fn events(&self) -> Vec<Event> {
        self.0.borrow().clone()
    }

    pub fn sent(&self) -> Vec<ApiRequest> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::Sent(r) => Some(r),
                _ => None,
            })
            .collect()
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::Notified(n) => Some(n),
                _ => None,
            })
            .collect()
    }

    pub fn navigations(&self) -> Vec<Route> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::Navigated(r) => Some(r),
                _ => None,
            })
            .collect()
    }

    pub fn disabled_changes(&self) -> Vec<bool> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::Disabled(d) => Some(d),
                _ => None,
            })
            .collect()
    }
}

/// Answers requests from a queue; an empty queue answers `Ok`.
pub struct ScriptedTransport {
    log: Log,
    replies: RefCell<VecDeque<Result<(), ClientError>>>,
}

impl Transport for ScriptedTransport {
    async fn send(&self, request: ApiRequest) -> Result<(), ClientError> {
        self.log.push(Event::Sent(request));
        self.replies.borrow_mut().pop_front().unwrap_or(Ok(()))
    }
}

pub struct RecordingUi {
    log: Log,
    confirm_answer: bool,
}

impl Ui for RecordingUi {
    async fn notify(&self, notice: Notice) {
        self.log.push(Event::Notified(notice));
    }

    fn confirm(&self, prompt: &str) -> bool {
        self.log.push(Event::Confirmed(prompt.to_string()));
        self.confirm_answer
    }

    fn navigate(&self, route: &Route) {
        self.log.push(Event::Navigated(route.clone()));
    }
}

pub struct FakeControl {
    log: Log,
    disabled: Cell<bool>,
}

impl FakeControl {
    pub fn new(log: &Log) -> Self {
        Self {
            log: log.clone(),
            disabled: Cell::new(false),
        }
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled.get()
    }
}

impl Control for FakeControl {
    fn set_disabled(&self, disabled: bool) {
        self.disabled.set(disabled);
        self.log.push(Event::Disabled(disabled));
    }
}

pub fn failure(status: u16) -> Result<(), ClientError> {
    Err(ClientError::Status { status, detail: None })
}

pub fn harness(
    replies: Vec<Result<(), ClientError>>,
    confirm_answer: bool,
) -> (Dispatcher<ScriptedTransport, RecordingUi>, Log) {
    harness_with(replies, confirm_answer, ClientConfig::default())
}

pub fn harness_with(
    replies: Vec<Result<(), ClientError>>,
    confirm_answer: bool,
    config: ClientConfig,
) -> (Dispatcher<ScriptedTransport, RecordingUi>, Log) {
    let log = Log::default();
    let transport = ScriptedTransport {
        log: log.clone(),
        replies: RefCell::new(replies.into()),
    };
    let ui = RecordingUi {
        log: log.clone(),
        confirm_answer,
    };
    (Dispatcher::new(transport, ui, config), log)
}
