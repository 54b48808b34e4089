//! In-memory chat sessions, one per open chat widget. Nothing is persisted;
//! a restart or the idle TTL ends every conversation.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tokio::sync::Mutex;
use tokio::time::Instant;
use tracing::{debug, error, info};
use uuid::Uuid;

use crate::assistant::chat::ChatSession;
use crate::assistant::lifecycle::RequestState;
use crate::errors::AppError;
use crate::llm_client::{AssistantClient, AssistantError};
use crate::models::chat::ChatTurn;

#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot {
    pub session_id: Uuid,
    pub state: RequestState,
    pub turns: Vec<ChatTurn>,
}

/// Shared session map. The lock is held only for bookkeeping, never across
/// the outbound call.
#[derive(Clone)]
pub struct SessionStore {
    sessions: Arc<Mutex<HashMap<Uuid, ChatSession>>>,
    ttl: Duration,
}

impl SessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            sessions: Arc::new(Mutex::new(HashMap::new())),
            ttl,
        }
    }

    /// Opens a session seeded with the greeting. Idle sessions past the TTL
    /// are dropped first.
    pub async fn create(&self) -> SessionSnapshot {
        let mut sessions = self.sessions.lock().await;
        prune_idle(&mut sessions, self.ttl);

        let session_id = Uuid::new_v4();
        let session = ChatSession::new();
        let snapshot = snapshot_of(session_id, &session);
        sessions.insert(session_id, session);

        info!("Chat session {session_id} opened ({} active)", sessions.len());
        snapshot
    }

    pub async fn snapshot(&self, session_id: Uuid) -> Result<SessionSnapshot, AppError> {
        let sessions = self.sessions.lock().await;
        sessions
            .get(&session_id)
            .map(|session| snapshot_of(session_id, session))
            .ok_or_else(|| not_found(session_id))
    }

    /// Submits one message: marks the session pending under the lock, then
    /// hands the call to a spawned task that records the outcome. If the
    /// caller goes away mid-call the task still settles the session.
    pub async fn submit(
        &self,
        client: Arc<dyn AssistantClient>,
        session_id: Uuid,
        message: &str,
    ) -> Result<Submission, AppError> {
        let request = {
            let mut sessions = self.sessions.lock().await;
            let session = sessions
                .get_mut(&session_id)
                .ok_or_else(|| not_found(session_id))?;
            session.begin_submit(message)?
        };

        let sessions = Arc::clone(&self.sessions);
        let call = tokio::spawn(async move {
            let result = client.generate(&request).await;
            complete(&sessions, session_id, result).await
        });

        match call.await {
            Ok(submission) => submission,
            Err(e) => {
                error!("Chat call for session {session_id} aborted: {e}");
                let aborted = Err(AssistantError::Unavailable("chat call aborted".to_string()));
                complete(&self.sessions, session_id, aborted).await
            }
        }
    }
}

/// What one submission produced: the assistant turn and where the session
/// ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub reply: ChatTurn,
    pub state: RequestState,
}

async fn complete(
    sessions: &Mutex<HashMap<Uuid, ChatSession>>,
    session_id: Uuid,
    result: Result<String, AssistantError>,
) -> Result<Submission, AppError> {
    let mut sessions = sessions.lock().await;
    let session = sessions
        .get_mut(&session_id)
        .ok_or_else(|| not_found(session_id))?;
    let reply = session.complete(result);
    Ok(Submission {
        reply,
        state: session.state(),
    })
}

fn snapshot_of(session_id: Uuid, session: &ChatSession) -> SessionSnapshot {
    SessionSnapshot {
        session_id,
        state: session.state(),
        turns: session.turns().to_vec(),
    }
}

fn not_found(session_id: Uuid) -> AppError {
    AppError::NotFound(format!("Chat session {session_id} not found"))
}

/// Pending sessions are kept regardless of age.
fn prune_idle(sessions: &mut HashMap<Uuid, ChatSession>, ttl: Duration) {
    let now = Instant::now();
    let before = sessions.len();
    sessions.retain(|_, session| {
        session.is_pending() || now.duration_since(session.last_active()) < ttl
    });
    let dropped = before - sessions.len();
    if dropped > 0 {
        debug!("Pruned {dropped} idle chat sessions");
    }
}
