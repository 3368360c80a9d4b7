//! # Marquee Session
//!
//! Auth session management: restore-on-startup, sign-in, sign-up, and
//! sign-out, built as a reducer over [`SessionState`].
//!
//! The session store is created once at app startup and handed to
//! feature stores that need the signed-in user. Nothing in this crate
//! reads ambient globals; the token lives in [`SessionState`] and is
//! persisted through the [`TokenStore`] in the environment.
//!
//! ## Example
//!
//! ```ignore
//! let env = SessionEnvironment::new(api, Arc::new(FileTokenStore::new(path)));
//! let store = Store::new(SessionState::new(), SessionReducer::new(), env);
//!
//! store.send(SessionAction::Initialize).await?;
//! ```

pub mod reducer;
pub mod storage;
pub mod types;

pub use reducer::{SessionEnvironment, SessionReducer};
pub use storage::{FileTokenStore, MemoryTokenStore, TokenStore};
pub use types::{SessionAction, SessionState};
