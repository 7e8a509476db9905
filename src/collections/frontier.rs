//! The frontier abstraction shared by every traversal and search.
//!
//! A frontier holds the "to be processed" candidates of a walk. The container
//! decides the order in which they come back out:
//!
//! - [`Queue`](crate::collections::Queue) -> FIFO -> breadth-first
//! - [`Stack`](crate::collections::Stack) -> LIFO -> depth-first

/// A container of pending work items for a graph walk.
pub trait Frontier<T> {
    /// Adds an item to the frontier.
    fn put(&mut self, item: T);

    /// Removes the next item according to the container's discipline.
    ///
    /// Returns `None` once the frontier is exhausted.
    fn take(&mut self) -> Option<T>;

    /// Returns the number of pending items.
    fn size(&self) -> usize;

    /// Returns `true` if no items are pending.
    #[inline]
    fn is_exhausted(&self) -> bool {
        self.size() == 0
    }
}
