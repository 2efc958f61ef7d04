//! A FIFO queue on a singly linked list with an in-place, allocation-free
//! `reverse`.

#[macro_use]
mod trace;

mod error;
mod queue;
mod raw;

pub use crate::error::QueueError;
pub use crate::queue::{Iter, IterOwned, LinkedListQueue};
