pub mod error;
pub mod golf_course;
pub mod tournament;

// Re-export the core types to provide a clean public API.
pub use error::CoreError;
pub use golf_course::GolfCourse;
pub use tournament::Tournament;
