mod node_arena;

pub use self::node_arena::{NodeArena, NodeId};
