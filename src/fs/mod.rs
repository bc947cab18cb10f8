//! Filesystem utilities for docketpost.
//!
//! State files (subscriptions, config) are replaced atomically so a crash
//! never leaves a half-written document behind.

pub mod atomic;

pub use atomic::atomic_write;
pub use atomic::atomic_write_file;
