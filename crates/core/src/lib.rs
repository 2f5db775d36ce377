pub mod pipeline;
pub mod removal;
pub mod selection;
pub mod shared;
