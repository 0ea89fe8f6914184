//! Client-side list paging and bulk selection.
//!
//! Both types are pure state over row indices or ids supplied by the caller.
//! They never inspect rendered output; the renderer reads
//! [`ListPager::visibility`] and [`SelectionTracker::is_all_selected`] back.

mod pager;
mod selection;

pub use pager::ListPager;
pub use selection::SelectionTracker;
