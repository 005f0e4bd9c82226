//! In-memory fakes for every client boundary

use async_trait::async_trait;
use serde_json::Value;
use std::cell::{Cell, RefCell};
use std::collections::{HashMap, VecDeque};
use std::io;
use std::rc::Rc;
use std::sync::{Arc, Mutex};
use supper_common::{ClientState, Identity};
use supper_core::auth::{AuthError, AuthProvider, MemorySessionStore, OAuthProvider, StoredSession};
use supper_core::export::{ExportError, FileSaver};
use supper_core::generation::{GenerationBackend, GenerationError};
use supper_core::share::{ShareError, ShareTarget};
use supper_core::{Boundaries, ClientConfig, SupperClient};
use tokio::sync::oneshot;

/// Initialize tracing for tests with proper test output handling
#[allow(dead_code)]
pub fn tracing_init() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_line_number(true)
        .with_target(false)
        .with_file(true)
        .try_init();
}

/// Formatted log output collected for assertions
#[derive(Clone, Default)]
#[allow(dead_code)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

#[allow(dead_code)]
impl CapturedLogs {
    /// Route this thread's events here until the guard drops
    pub fn install(&self) -> tracing::subscriber::DefaultGuard {
        let logs = self.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || logs.clone())
            .with_ansi(false)
            .with_target(false)
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    pub fn contents(&self) -> String {
        let bytes = self.0.lock().map(|b| b.clone()).unwrap_or_default();
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if let Ok(mut bytes) = self.0.lock() {
            bytes.extend_from_slice(buf);
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

pub fn test_config() -> ClientConfig {
    ClientConfig::from_lookup(|key| match key {
        "SUPPER_AUTH_URL" => Some("https://auth.test".to_string()),
        "SUPPER_ANON_KEY" => Some("anon".to_string()),
        "SUPPER_APP_ID" => Some("app-test".to_string()),
        _ => None,
    })
    .unwrap()
}

pub fn alice() -> Identity {
    Identity {
        id: "alice-id".into(),
        email: Some("alice@example.com".into()),
    }
}

/// Accepts `alice@example.com` / `hunter2` and the token it hands out
#[derive(Default)]
pub struct FakeAuth {
    pub sign_out_calls: Cell<usize>,
    pub fail_sign_out: Cell<bool>,
}

pub const ALICE_TOKEN: &str = "alice-token";

#[async_trait(?Send)]
impl AuthProvider for FakeAuth {
    async fn current_user(&self, access_token: &str) -> Result<Identity, AuthError> {
        if access_token == ALICE_TOKEN {
            Ok(alice())
        } else {
            Err(AuthError::Rejected {
                status: 401,
                message: "invalid JWT".into(),
            })
        }
    }

    async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<(StoredSession, Identity), AuthError> {
        if email == "alice@example.com" && password == "hunter2" {
            let session = StoredSession {
                access_token: ALICE_TOKEN.into(),
                refresh_token: Some("refresh".into()),
            };
            Ok((session, alice()))
        } else {
            Err(AuthError::Rejected {
                status: 400,
                message: "Invalid login credentials".into(),
            })
        }
    }

    async fn sign_out(&self, _access_token: &str) -> Result<(), AuthError> {
        self.sign_out_calls.set(self.sign_out_calls.get() + 1);
        if self.fail_sign_out.get() {
            return Err(AuthError::Rejected {
                status: 500,
                message: "down".into(),
            });
        }
        Ok(())
    }

    fn authorize_url(&self, provider: OAuthProvider, redirect_to: &str) -> Result<String, AuthError> {
        Ok(format!("https://auth.test/authorize?provider={}&redirect_to={}", provider.id(), redirect_to))
    }
}

/// Scripted event responses. A gate holds back the first call of its event
/// until released.
#[derive(Default)]
pub struct FakeGeneration {
    responses: RefCell<HashMap<String, VecDeque<Result<Value, String>>>>,
    gates: RefCell<HashMap<String, oneshot::Receiver<()>>>,
    pub calls: RefCell<Vec<(String, Value, Option<String>)>>,
}

impl FakeGeneration {
    pub fn respond(&self, event: &str, response: Result<Value, String>) {
        self.responses
            .borrow_mut()
            .entry(event.to_string())
            .or_default()
            .push_back(response);
    }

    /// Hold the next call of `event` until the returned sender fires
    pub fn gate(&self, event: &str) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.gates.borrow_mut().insert(event.to_string(), rx);
        tx
    }

    pub fn calls_for(&self, event: &str) -> Vec<Value> {
        self.calls
            .borrow()
            .iter()
            .filter(|(e, _, _)| e == event)
            .map(|(_, data, _)| data.clone())
            .collect()
    }
}

#[async_trait(?Send)]
impl GenerationBackend for FakeGeneration {
    async fn create_event(
        &self,
        event: &str,
        data: Value,
        access_token: Option<&str>,
    ) -> Result<Value, GenerationError> {
        self.calls
            .borrow_mut()
            .push((event.to_string(), data, access_token.map(str::to_string)));
        let response = self
            .responses
            .borrow_mut()
            .get_mut(event)
            .and_then(VecDeque::pop_front)
            .unwrap_or_else(|| Err(format!("no response scripted for {event}")));
        let gate = self.gates.borrow_mut().remove(event);
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        response.map_err(|body| GenerationError::Server { status: 500, body })
    }
}

#[derive(Default)]
pub struct FakeSaver {
    pub saved: RefCell<Vec<(String, String, Vec<u8>)>>,
}

impl FileSaver for FakeSaver {
    fn save(&self, file_name: &str, mime: &str, bytes: Vec<u8>) -> Result<(), ExportError> {
        self.saved
            .borrow_mut()
            .push((file_name.to_string(), mime.to_string(), bytes));
        Ok(())
    }
}

pub struct FakeShare {
    pub supported: bool,
    pub result: RefCell<Result<(), ShareError>>,
    pub calls: RefCell<Vec<(String, String)>>,
}

impl FakeShare {
    pub fn new(supported: bool) -> Self {
        Self {
            supported,
            result: RefCell::new(Ok(())),
            calls: RefCell::new(Vec::new()),
        }
    }
}

#[async_trait(?Send)]
impl ShareTarget for FakeShare {
    fn is_supported(&self) -> bool {
        self.supported
    }

    async fn share(&self, title: &str, text: &str) -> Result<(), ShareError> {
        self.calls
            .borrow_mut()
            .push((title.to_string(), text.to_string()));
        self.result.borrow().clone()
    }
}

/// A client wired to fakes, plus handles to inspect them
pub struct Harness {
    pub client: SupperClient,
    pub auth: Rc<FakeAuth>,
    pub sessions: Rc<MemorySessionStore>,
    pub generation: Rc<FakeGeneration>,
    pub saver: Rc<FakeSaver>,
    pub share: Rc<FakeShare>,
    /// Stands in for the page's reactive state cell
    pub state: Rc<RefCell<ClientState>>,
}

impl Harness {
    pub fn new(config: ClientConfig, share_supported: bool) -> Self {
        let auth = Rc::new(FakeAuth::default());
        let sessions = Rc::new(MemorySessionStore::new());
        let generation = Rc::new(FakeGeneration::default());
        let saver = Rc::new(FakeSaver::default());
        let share = Rc::new(FakeShare::new(share_supported));
        let client = SupperClient::new(
            config,
            Boundaries {
                auth: auth.clone(),
                sessions: sessions.clone(),
                generation: generation.clone(),
                saver: saver.clone(),
                share: share.clone(),
            },
        );
        Self {
            client,
            auth,
            sessions,
            generation,
            saver,
            share,
            state: Rc::new(RefCell::new(ClientState::new())),
        }
    }

    pub fn current(&self) -> impl Fn() -> ClientState {
        let state = self.state.clone();
        move || state.borrow().clone()
    }

    pub fn publish(&self) -> impl Fn(ClientState) {
        let state = self.state.clone();
        move |next| *state.borrow_mut() = next
    }

    pub fn snapshot(&self) -> ClientState {
        self.state.borrow().clone()
    }
}
