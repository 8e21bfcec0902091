pub mod consistency;
pub mod crossword;
pub mod fill;
pub mod order;
pub mod parse;

pub use crate::crossword::{Crossword, Direction};
pub use crate::fill::{solve, Assignment};
pub use crate::parse::Slot;
