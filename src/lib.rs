// Resume builder library - exposes all core modules for testing

pub mod app;
pub mod ids;
pub mod logging;
pub mod projects;
pub mod view;

// Re-export commonly used types
pub use projects::Project;
