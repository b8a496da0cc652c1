//! Cursor pagination arguments and placeholder page metadata
//!
//! Connections follow the Relay cursor convention. Until connections are
//! backed by real data, every connection reports the same page info.

use super::error::{ResolverError, ResolverResult};

/// Start cursor reported by every connection
pub const PLACEHOLDER_START_CURSOR: &str = "start cursor";

/// End cursor reported by every connection
pub const PLACEHOLDER_END_CURSOR: &str = "End cursor";

/// Relay connection arguments (`after`, `first`, `before`, `last`)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectionArgs {
    pub after: Option<String>,
    pub first: Option<i32>,
    pub before: Option<String>,
    pub last: Option<i32>,
}

impl ConnectionArgs {
    pub fn new(
        after: Option<String>,
        first: Option<i32>,
        before: Option<String>,
        last: Option<i32>,
    ) -> Self {
        Self {
            after,
            first,
            before,
            last,
        }
    }

    /// Reject negative page sizes
    pub fn validate(&self) -> ResolverResult<()> {
        check_page_size("first", self.first)?;
        check_page_size("last", self.last)
    }
}

#[inline]
fn check_page_size(argument: &'static str, value: Option<i32>) -> ResolverResult<()> {
    match value {
        Some(size) if size < 0 => Err(ResolverError::invalid(
            argument,
            format!("must not be negative (got {})", size),
        )),
        _ => Ok(()),
    }
}
