pub mod inject;

pub use inject::ConfigInjector;
