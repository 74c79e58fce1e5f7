//! Concrete adapters behind the content ports.

mod memory;

pub use memory::MemoryContent;
