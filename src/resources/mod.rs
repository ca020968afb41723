mod config;

pub use config::AgentConfig;
