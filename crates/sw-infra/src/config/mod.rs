mod loader;

pub use loader::load_config_or_default;
