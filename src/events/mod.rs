pub mod listener;
pub mod pointer;
pub mod scroll;

pub use listener::{listen, listen_window};
