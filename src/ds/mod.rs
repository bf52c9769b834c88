pub mod positional_list;
pub mod slot_arena;

pub use positional_list::{Entries, Iter, ListId, Position, PositionalList, Positions};
pub use slot_arena::{SlotArena, SlotId};
