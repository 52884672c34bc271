//! Mock implementations of the pipeline seams.
//!
//! Each mock records the calls it receives so tests can assert exactly what
//! was fetched, sealed, and uploaded.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use reposeal::core::cipher::{Cipher, SealedBox};
use reposeal::core::domain::{Actor, PublicKey, RepositoryTarget, SealedSecret};
use reposeal::core::github::{KeyClient, UploadClient, UploadResult};
use reposeal::error::{CryptoError, PublishError};
use tokio::sync::Notify;

/// How a mock endpoint should respond.
#[derive(Clone)]
pub enum Behavior {
    Unauthorized,
    NotFound,
    Protocol,
    Transport,
}

impl Behavior {
    fn error(&self, scope: &str) -> PublishError {
        match self {
            Self::Unauthorized => PublishError::Auth { status: 401 },
            Self::NotFound => PublishError::NotFound(scope.to_string()),
            Self::Protocol => PublishError::protocol("malformed response"),
            Self::Transport => PublishError::transport("connection reset"),
        }
    }
}

/// Key client serving a fixed key per repository.
#[derive(Default)]
pub struct MockKeys {
    keys: HashMap<String, PublicKey>,
    failures: HashMap<String, Behavior>,
    delays: HashMap<String, Duration>,
    gates: HashMap<String, Arc<Notify>>,
    calls: Mutex<Vec<String>>,
}

impl MockKeys {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_key(mut self, repository: &str, key: PublicKey) -> Self {
        self.keys.insert(repository.to_string(), key);
        self
    }

    pub fn with_failure(mut self, repository: &str, behavior: Behavior) -> Self {
        self.failures.insert(repository.to_string(), behavior);
        self
    }

    pub fn with_delay(mut self, repository: &str, delay: Duration) -> Self {
        self.delays.insert(repository.to_string(), delay);
        self
    }

    /// Hold the key fetch for `repository` until `gate` is notified.
    pub fn with_gate(mut self, repository: &str, gate: Arc<Notify>) -> Self {
        self.gates.insert(repository.to_string(), gate);
        self
    }

    /// Repositories whose key was requested, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl KeyClient for MockKeys {
    async fn fetch_public_key(
        &self,
        _actor: &Actor,
        target: &RepositoryTarget,
    ) -> Result<PublicKey, PublishError> {
        let repository = target.to_string();
        self.calls.lock().unwrap().push(repository.clone());

        if let Some(gate) = self.gates.get(&repository) {
            gate.notified().await;
        }
        if let Some(delay) = self.delays.get(&repository) {
            tokio::time::sleep(*delay).await;
        }
        if let Some(behavior) = self.failures.get(&repository) {
            return Err(behavior.error(&repository));
        }
        self.keys
            .get(&repository)
            .cloned()
            .ok_or_else(|| PublishError::NotFound(repository))
    }
}

/// One recorded upload.
#[derive(Debug, Clone)]
pub struct UploadCall {
    pub repository: String,
    pub name: String,
    pub key_id: String,
    pub ciphertext: Vec<u8>,
}

/// Upload client that records every call.
#[derive(Default)]
pub struct MockUploads {
    failures: HashMap<String, Behavior>,
    calls: Mutex<Vec<UploadCall>>,
}

impl MockUploads {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail uploads of `secret` to every repository.
    pub fn with_failure(mut self, secret: &str, behavior: Behavior) -> Self {
        self.failures.insert(secret.to_string(), behavior);
        self
    }

    pub fn calls(&self) -> Vec<UploadCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn calls_for(&self, repository: &str) -> Vec<UploadCall> {
        self.calls()
            .into_iter()
            .filter(|c| c.repository == repository)
            .collect()
    }
}

#[async_trait]
impl UploadClient for MockUploads {
    async fn upload(
        &self,
        _actor: &Actor,
        target: &RepositoryTarget,
        sealed: &SealedSecret,
    ) -> Result<UploadResult, PublishError> {
        self.calls.lock().unwrap().push(UploadCall {
            repository: target.to_string(),
            name: sealed.name().to_string(),
            key_id: sealed.key_id().to_string(),
            ciphertext: sealed.ciphertext().to_vec(),
        });

        if let Some(behavior) = self.failures.get(sealed.name()) {
            return Err(behavior.error(sealed.name()));
        }
        Ok(UploadResult { status: 201 })
    }
}

/// Sealed-box cipher that counts calls and can reject chosen plaintexts.
#[derive(Default)]
pub struct CountingCipher {
    reject: HashSet<String>,
    calls: AtomicUsize,
    plaintexts: Mutex<Vec<String>>,
}

impl CountingCipher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail sealing whenever the plaintext equals `value`.
    pub fn rejecting(mut self, value: &str) -> Self {
        self.reject.insert(value.to_string());
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn plaintexts(&self) -> Vec<String> {
        self.plaintexts.lock().unwrap().clone()
    }
}

impl Cipher for CountingCipher {
    fn seal(&self, plaintext: &[u8], public_key: &[u8]) -> Result<Vec<u8>, CryptoError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let text = String::from_utf8_lossy(plaintext).to_string();
        self.plaintexts.lock().unwrap().push(text.clone());

        if self.reject.contains(&text) {
            return Err(CryptoError::SealFailed("rejected by test".into()));
        }
        SealedBox.seal(plaintext, public_key)
    }

    fn name(&self) -> &'static str {
        "counting"
    }
}
