// State management module.
// List loading/selection state and user notices.

pub mod list;
pub mod notice;

pub use list::{LoadingState, SelectableList};
pub use notice::{Notice, NoticeLevel, Notices};
