pub mod config;
pub mod constants;
pub mod content;
pub mod engine;
pub mod layout;
pub mod lifecycle;
pub mod projection;
pub mod rotation;
pub mod schedule;

pub use config::*;
pub use constants::*;
pub use content::*;
pub use engine::*;
pub use layout::*;
pub use lifecycle::*;
pub use projection::*;
pub use rotation::*;
pub use schedule::*;
