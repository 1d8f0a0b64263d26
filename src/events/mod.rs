pub mod pointer;
pub mod scroll;

pub use pointer::wire_ripple_pointer;
pub use scroll::{wire_drag_scroll, wire_scroll_links};
