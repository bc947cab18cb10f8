//! Docketpost: post new court filings to social media.
//!
//! The heart of the crate is the [`template`] module, which fills message
//! templates under a character budget, charging links at a fixed cost and
//! truncating one field so the post always fits. Around it sit docket
//! records, case subscriptions, publishers, and the `docketpost` CLI.

pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod docket;
pub mod error;
pub mod events;
pub mod exit_codes;
pub mod fs;
pub mod notify;
pub mod publish;
pub mod subscription;
pub mod template;

#[cfg(test)]
mod test_support;
