pub mod listener;
pub mod pointer;
pub mod resize;

pub use listener::{detach_all, Listener};
pub use pointer::{wire_pointer_handlers, PointerWiring};
pub use resize::ResizeWatcher;
