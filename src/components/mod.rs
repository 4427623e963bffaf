// Export components
pub mod events;
pub mod session;

// Re-export the events handle and the session service
pub use events::EventsHandle;
pub use session::SessionService;
