pub mod pointer;
pub mod scroll;

pub use pointer::{wire_input_handlers, InputWiring};
