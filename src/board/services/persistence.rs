//! Snapshot codec and load-with-fallback.
//!
//! Snapshots are stored as a versioned JSON envelope:
//!
//! ```json
//! { "version": 1, "state": { "boards": {}, "columns": {}, "tasks": {}, "ui": {} } }
//! ```
//!
//! A bare snapshot without the envelope is read as version 0 and upgraded in
//! place; the two layouts share the same entity shapes.

use crate::board::domain::{AppState, InvariantViolation};
use crate::board::ports::{SnapshotStore, StorageKey};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::{info, warn};

/// Envelope version written by this build.
pub const CURRENT_SNAPSHOT_VERSION: u32 = 1;

/// Errors raised while decoding a stored snapshot.
#[derive(Debug, Error)]
pub enum SnapshotDecodeError {
    /// The payload is not valid JSON or does not match the snapshot shape.
    #[error("malformed snapshot: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The envelope carries a version this build cannot read.
    #[error("unsupported snapshot version {0}")]
    UnsupportedVersion(u64),

    /// The snapshot parsed but breaks a structural invariant.
    #[error("inconsistent snapshot: {0}")]
    Inconsistent(#[from] InvariantViolation),
}

#[derive(Serialize)]
struct EnvelopeRef<'a> {
    version: u32,
    state: &'a AppState,
}

#[derive(Deserialize)]
struct Envelope {
    state: AppState,
}

/// Serializes a snapshot inside the current envelope.
///
/// # Errors
///
/// Returns [`serde_json::Error`] when serialization fails.
pub fn encode_snapshot(state: &AppState) -> Result<String, serde_json::Error> {
    serde_json::to_string(&EnvelopeRef {
        version: CURRENT_SNAPSHOT_VERSION,
        state,
    })
}

/// Parses a stored snapshot, accepting the current envelope or a bare
/// (version 0) snapshot, and checks its invariants.
///
/// # Errors
///
/// Returns [`SnapshotDecodeError`] when the payload cannot be parsed, has an
/// unknown version, or describes an inconsistent board.
pub fn decode_snapshot(raw: &str) -> Result<AppState, SnapshotDecodeError> {
    let value: Value = serde_json::from_str(raw)?;
    let version = value.get("version").map(Value::as_u64);
    let state: AppState = match version {
        None => serde_json::from_value(value)?,
        Some(Some(1)) => serde_json::from_value::<Envelope>(value)?.state,
        Some(Some(other)) => return Err(SnapshotDecodeError::UnsupportedVersion(other)),
        Some(None) => return Err(SnapshotDecodeError::UnsupportedVersion(u64::MAX)),
    };
    state.check_invariants()?;
    Ok(state)
}

/// Reads the snapshot stored under `key`, or the default snapshot when the
/// slot is empty, unreadable, or holds something that fails to decode.
pub async fn load_or_default<S>(store: &S, key: &StorageKey) -> AppState
where
    S: SnapshotStore + ?Sized,
{
    let raw = match store.read(key).await {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            info!(%key, "no stored snapshot, starting from the default board");
            return AppState::initial();
        }
        Err(err) => {
            warn!(%key, error = %err, "failed to read stored snapshot, using the default board");
            return AppState::initial();
        }
    };

    match decode_snapshot(&raw) {
        Ok(state) => {
            info!(%key, tasks = state.tasks().len(), "restored stored snapshot");
            state
        }
        Err(err) => {
            warn!(%key, error = %err, "discarding unreadable snapshot, using the default board");
            AppState::initial()
        }
    }
}
