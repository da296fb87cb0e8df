pub mod database;
pub mod memory;
pub mod store;

pub use memory::InMemoryMessageStore;
pub use store::MessageStore;
