use crate::client::SupportClient;
use crate::config::Config;
use crate::history::HistoryStore;
use crate::selector::MoodSelector;
use crate::support::Support;
use std::sync::Arc;
use tokio::sync::Mutex;

pub const CHOOSE_MOOD_MESSAGE: &str = "Choose a mood.";
pub const CONTACTING_MESSAGE: &str = "Contacting backend...";
pub const UNREACHABLE_MESSAGE: &str = "Backend not reachable. Try running the proxy.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    MoodMissing,
    Contacting,
    Success,
    Failed,
}

impl Phase {
    pub fn message(self) -> &'static str {
        match self {
            Phase::Idle | Phase::Success => "",
            Phase::MoodMissing => CHOOSE_MOOD_MESSAGE,
            Phase::Contacting => CONTACTING_MESSAGE,
            Phase::Failed => UNREACHABLE_MESSAGE,
        }
    }

    pub fn kind(self) -> &'static str {
        match self {
            Phase::Idle => "",
            Phase::MoodMissing => "prompt",
            Phase::Contacting => "info",
            Phase::Success => "ok",
            Phase::Failed => "error",
        }
    }
}

#[derive(Debug)]
pub struct Session {
    pub selector: MoodSelector,
    pub phase: Phase,
    pub last_support: Option<Support>,
    pub history: HistoryStore,
}

impl Session {
    pub fn new(history: HistoryStore) -> Self {
        Self {
            selector: MoodSelector::default(),
            phase: Phase::Idle,
            last_support: None,
            history,
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub client: SupportClient,
    pub session: Arc<Mutex<Session>>,
}

impl AppState {
    pub fn new(config: Config, client: SupportClient, history: HistoryStore) -> Self {
        Self {
            config: Arc::new(config),
            client,
            session: Arc::new(Mutex::new(Session::new(history))),
        }
    }
}
