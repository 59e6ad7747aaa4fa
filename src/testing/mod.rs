mod memory_config_store;

pub use memory_config_store::MemoryConfigStore;
