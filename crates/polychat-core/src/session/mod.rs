//! Transcript session — the in-memory conversation for one REPL run.
//!
//! Nothing here touches the network or the disk. A transcript lives exactly
//! as long as the process that created it.

pub mod transcript;

pub use transcript::Transcript;
