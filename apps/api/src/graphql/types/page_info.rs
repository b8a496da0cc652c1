//! Relay page metadata

use async_graphql::SimpleObject;

use crate::graphql::creator::ResolverCreator;
use crate::graphql::pagination::{PLACEHOLDER_END_CURSOR, PLACEHOLDER_START_CURSOR};

/// Information about the current page of a connection
#[derive(Debug, Clone, PartialEq, Eq, SimpleObject)]
pub struct PageInfo {
    /// Cursor of the first edge in the page
    pub start_cursor: Option<String>,
    /// Cursor of the last edge in the page
    pub end_cursor: Option<String>,
    /// Whether more edges exist after `endCursor`
    pub has_next_page: bool,
    /// Whether more edges exist before `startCursor`
    pub has_previous_page: bool,
}

impl PageInfo {
    pub fn new(
        start_cursor: Option<String>,
        end_cursor: Option<String>,
        has_next_page: bool,
        has_previous_page: bool,
    ) -> Self {
        Self {
            start_cursor,
            end_cursor,
            has_next_page,
            has_previous_page,
        }
    }
}

/// Page info reported by connections that are not backed by data yet
pub(crate) fn placeholder_page_info(creator: &dyn ResolverCreator) -> PageInfo {
    creator.new_page_info(
        Some(PLACEHOLDER_START_CURSOR.to_string()),
        Some(PLACEHOLDER_END_CURSOR.to_string()),
        true,
        false,
    )
}
