//! Social publishers.
//!
//! A publisher takes a finished post body (and optionally an image) and
//! returns the platform's id for the new post. Link shortening and any
//! platform-side limits are the publisher's business.

mod command;

pub use command::{CommandPublisher, DEFAULT_PUBLISH_TIMEOUT_SECONDS};

use crate::error::Result;
use std::fmt;

/// Identifier of a created post.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PostId(pub String);

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Something that can publish a post.
pub trait Publisher {
    fn publish(&mut self, message: &str, image: Option<&[u8]>) -> Result<PostId>;
}

/// Publisher that records posts instead of sending them.
#[derive(Debug, Default)]
pub struct DryRunPublisher {
    posts: Vec<String>,
}

impl DryRunPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages "published" so far.
    pub fn posts(&self) -> &[String] {
        &self.posts
    }
}

impl Publisher for DryRunPublisher {
    fn publish(&mut self, message: &str, _image: Option<&[u8]>) -> Result<PostId> {
        self.posts.push(message.to_string());
        Ok(PostId(format!("dry-run-{}", self.posts.len())))
    }
}
