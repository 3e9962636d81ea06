pub mod layout;
pub mod pointer;

pub use layout::{wire_layout, LayoutListeners};
pub use pointer::{wire_pointer, PointerListeners};
