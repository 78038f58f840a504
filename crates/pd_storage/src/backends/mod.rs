pub mod http;
pub mod memory;

pub use http::HttpContentStore;
pub use memory::MemoryStore;
