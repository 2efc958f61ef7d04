mod linked_list_queue;

pub use self::linked_list_queue::{Iter, IterOwned, LinkedListQueue};
