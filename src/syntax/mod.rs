//! Parsed documents and tree navigation.
//!
//! - [`Tree`] - an owned, immutable parse of one document
//! - [`locate`], [`ancestor_of_kind`], [`text`], [`walk`] - the queries every
//!   analysis runs against the tree

mod navigation;
mod tree;

pub use navigation::{
    ancestor_of_kind, has_error, locate, parent_is, previous_sibling_token, text,
    token_at, walk,
};
pub use tree::{ParseFailure, Tree};
