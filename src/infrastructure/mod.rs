pub mod handlers;
pub mod in_memory;
