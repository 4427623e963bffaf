mod actor;
mod handle;
pub mod loader;
pub mod models;

pub use handle::EventsHandle;
pub use loader::EventLoader;
pub use models::Event;
