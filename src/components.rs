//! Reusable HTML components for page generation
//!
//! This module provides Maud component functions shared by the index and
//! chapter pages: layout, sidebar chapter list, chapter header, floating
//! table of contents and previous/next navigation.

pub mod chapter_header;
pub mod footer;
pub mod layout;
pub mod nav;
pub mod sidebar;
pub mod toc;
