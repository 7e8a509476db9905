//! Linear containers used as traversal frontiers.
//!
//! Collections are organized by discipline:
//! - `stack`: last-in-first-out [`Stack`]
//! - `queue`: first-in-first-out [`Queue`]
//! - `frontier`: the [`Frontier`] trait both implement, so one traversal routine
//!   can run breadth-first or depth-first depending on the container it is given

pub mod frontier;
pub mod queue;
pub mod stack;

pub use frontier::Frontier;
pub use queue::Queue;
pub use stack::Stack;
