//! Fakes shared by the unit tests.

use async_trait::async_trait;
use chrono::Utc;
use gumzo_core::{ChatMessage, LLMProvider, LLMResponse, ThreadId, ThreadRecord, ThreadStore};
use std::collections::BTreeMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Default)]
pub struct InMemoryStore {
    records: Mutex<BTreeMap<String, ThreadRecord>>,
    writes: AtomicUsize,
}

impl InMemoryStore {
    pub fn with_record(user_id: &str, thread_id: &str) -> Self {
        let store = Self::default();
        store.records.lock().unwrap().insert(
            user_id.to_string(),
            ThreadRecord {
                user_id: user_id.to_string(),
                thread_id: ThreadId::from(thread_id),
                created_at: Utc::now(),
            },
        );
        store
    }

    pub fn len(&self) -> usize {
        self.records.lock().unwrap().len()
    }

    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ThreadStore for InMemoryStore {
    async fn lookup(&self, user_id: &str) -> anyhow::Result<Option<ThreadId>> {
        Ok(self
            .records
            .lock()
            .unwrap()
            .get(user_id)
            .map(|r| r.thread_id.clone()))
    }

    async fn store(&self, user_id: &str, thread_id: &ThreadId) -> anyhow::Result<()> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.records.lock().unwrap().insert(
            user_id.to_string(),
            ThreadRecord {
                user_id: user_id.to_string(),
                thread_id: thread_id.clone(),
                created_at: Utc::now(),
            },
        );
        Ok(())
    }

    async fn store_if_absent(
        &self,
        user_id: &str,
        thread_id: &ThreadId,
    ) -> anyhow::Result<ThreadId> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        let mut records = self.records.lock().unwrap();
        let record = records
            .entry(user_id.to_string())
            .or_insert_with(|| ThreadRecord {
                user_id: user_id.to_string(),
                thread_id: thread_id.clone(),
                created_at: Utc::now(),
            });
        Ok(record.thread_id.clone())
    }

    async fn list(&self) -> anyhow::Result<Vec<ThreadRecord>> {
        Ok(self.records.lock().unwrap().values().cloned().collect())
    }
}

/// Store whose backing file is gone.
pub struct BrokenStore;

#[async_trait]
impl ThreadStore for BrokenStore {
    async fn lookup(&self, _user_id: &str) -> anyhow::Result<Option<ThreadId>> {
        anyhow::bail!("unable to open database file")
    }

    async fn store(&self, _user_id: &str, _thread_id: &ThreadId) -> anyhow::Result<()> {
        anyhow::bail!("unable to open database file")
    }

    async fn store_if_absent(
        &self,
        _user_id: &str,
        _thread_id: &ThreadId,
    ) -> anyhow::Result<ThreadId> {
        anyhow::bail!("unable to open database file")
    }

    async fn list(&self) -> anyhow::Result<Vec<ThreadRecord>> {
        anyhow::bail!("unable to open database file")
    }
}

pub enum Reply {
    Text(&'static str),
    Fail(&'static str),
}

/// Provider that answers with a fixed reply and records what it was sent.
pub struct ScriptedProvider {
    reply: Reply,
    calls: Mutex<Vec<(Vec<ChatMessage>, String)>>,
}

impl ScriptedProvider {
    pub fn new(reply: Reply) -> Self {
        Self {
            reply,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn last_call(&self) -> (Vec<ChatMessage>, String) {
        self.calls.lock().unwrap().last().cloned().unwrap()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl LLMProvider for ScriptedProvider {
    async fn chat(&self, messages: &[ChatMessage], model: &str) -> anyhow::Result<LLMResponse> {
        self.calls
            .lock()
            .unwrap()
            .push((messages.to_vec(), model.to_string()));

        match self.reply {
            Reply::Text(text) => Ok(LLMResponse {
                content: text.to_string(),
                usage: None,
            }),
            Reply::Fail(reason) => Err(anyhow::anyhow!(reason)),
        }
    }
}
