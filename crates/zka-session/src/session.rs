//! # Session
//!
//! The mutable state of one wallet session, with persistence delegated
//! to the injected [`SessionStore`]. Mutations are sequential `&mut`
//! calls — there is no interior mutability and no locking to need.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use zka_proof::{evaluate, ProofKind, ProofParams};

use crate::credential::{Credential, IssueParams, Proof};
use crate::history::{push_bounded, TxRecord};
use crate::store::{SessionStore, StoreError};

/// The persisted portion of a session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    /// Offline-issued credentials, newest first.
    #[serde(default)]
    pub credentials: Vec<Credential>,
    /// Offline-generated proofs, newest first, bounded.
    #[serde(default)]
    pub proofs: Vec<Proof>,
    /// Submitted transactions, newest first, bounded.
    #[serde(default)]
    pub transactions: Vec<TxRecord>,
}

/// Errors from session operations.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The referenced credential is not in this session.
    #[error("no credential with id {0} in this session")]
    UnknownCredential(Uuid),

    /// Persisting the mutated state failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// One wallet session's state, loaded at construction and saved after
/// every mutation.
pub struct Session {
    state: SessionState,
    store: Box<dyn SessionStore>,
}

impl Session {
    /// Load a session from its store. A store that fails to load starts
    /// the session empty — state on disk is a convenience, not a
    /// requirement.
    pub fn load(store: Box<dyn SessionStore>) -> Self {
        let state = match store.load() {
            Ok(state) => state,
            Err(e) => {
                tracing::warn!(error = %e, "session store unreadable; starting empty");
                SessionState::default()
            }
        };
        Self { state, store }
    }

    /// Offline-issued credentials, newest first.
    pub fn credentials(&self) -> &[Credential] {
        &self.state.credentials
    }

    /// Offline-generated proofs, newest first.
    pub fn proofs(&self) -> &[Proof] {
        &self.state.proofs
    }

    /// Submitted transactions, newest first.
    pub fn transactions(&self) -> &[TxRecord] {
        &self.state.transactions
    }

    /// Record a submitted execution in the bounded history.
    pub fn record_transaction(&mut self, tx: TxRecord) -> Result<(), SessionError> {
        push_bounded(&mut self.state.transactions, tx);
        self.persist()
    }

    /// Issue an offline credential. The new credential is first in the
    /// list and is returned by id.
    ///
    /// Credentials are NOT bounded — only the proof and transaction
    /// histories truncate. A credential lives until [`Session::reset`].
    pub fn issue_credential(
        &mut self,
        params: IssueParams,
        issuer: impl Into<String>,
    ) -> Result<Uuid, SessionError> {
        let credential = Credential::issue(params, issuer, Utc::now());
        let id = credential.id;
        self.state.credentials.insert(0, credential);
        self.persist()?;
        Ok(id)
    }

    /// Look up a credential by id.
    pub fn find_credential(&self, id: Uuid) -> Option<&Credential> {
        self.state.credentials.iter().find(|c| c.id == id)
    }

    /// Generate an offline proof from a credential in this session.
    ///
    /// The predicate runs locally; the resulting proof is appended to
    /// the bounded history and returned by id.
    pub fn generate_proof(
        &mut self,
        credential_id: Uuid,
        kind: ProofKind,
        params: ProofParams,
    ) -> Result<Uuid, SessionError> {
        let credential = self
            .find_credential(credential_id)
            .ok_or(SessionError::UnknownCredential(credential_id))?;

        let result = evaluate(&credential.claims(), kind, &params);
        let proof = Proof {
            id: Uuid::new_v4(),
            credential_id,
            kind,
            result,
            params,
            generated_at: Utc::now(),
            nonce: Uuid::new_v4().simple().to_string(),
            owner: credential.owner.clone(),
        };
        let id = proof.id;
        tracing::debug!(proof = %id, %kind, result, "offline proof generated");
        push_bounded(&mut self.state.proofs, proof);
        self.persist()?;
        Ok(id)
    }

    /// Look up a proof by id — the third-party verification path of the
    /// offline mode. A verifier learns the boolean result and nothing
    /// about the underlying credential.
    pub fn find_proof(&self, id: Uuid) -> Option<&Proof> {
        self.state.proofs.iter().find(|p| p.id == id)
    }

    /// Wallet disconnect: drop all offline credentials and proofs. The
    /// transaction history survives — it describes on-chain facts, not
    /// session state.
    pub fn reset(&mut self) -> Result<(), SessionError> {
        self.state.credentials.clear();
        self.state.proofs.clear();
        self.persist()
    }

    fn persist(&self) -> Result<(), SessionError> {
        self.store.save(&self.state)?;
        Ok(())
    }
}
