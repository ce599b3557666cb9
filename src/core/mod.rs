pub mod channel;
pub mod color;
pub mod layout;
pub mod level;
pub mod logger;
pub mod settings;
pub mod sink;
