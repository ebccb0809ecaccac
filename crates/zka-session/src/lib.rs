//! # zka-session — Session State
//!
//! The mutable state one wallet session accumulates: the transaction
//! history every submitted execution lands in, and the offline demo
//! mode's credential and proof stores.
//!
//! ## Ownership Model
//!
//! [`Session`] is an explicit object passed by reference to whatever
//! needs it — there is no ambient singleton. Persistence is an injected
//! collaborator ([`SessionStore`]): state loads once at construction and
//! saves after every mutation. All histories are single-writer through
//! sequential `&mut` calls and bounded to the 50 most recent entries,
//! newest first, with silent truncation at the tail.

pub mod credential;
pub mod history;
pub mod session;
pub mod store;

pub use credential::{Credential, IssueParams, Proof};
pub use history::{TxRecord, TxStatus, HISTORY_LIMIT};
pub use session::{Session, SessionError, SessionState};
pub use store::{InMemoryStore, JsonFileStore, SessionStore, StoreError};
