//! BB84 protocol stages.
//!
//! The stages run in a fixed order: sender preparation, receiver measurement,
//! sifting, cipher application. [`session`] sequences them and is the single
//! entry point a presentation shell needs.

pub mod receiver;
pub mod sender;
pub mod session;
pub mod sift;

pub use session::{run_decrypt, run_encrypt, SessionResult};
