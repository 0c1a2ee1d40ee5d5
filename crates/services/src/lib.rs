//! Stateless façades between the HTTP controllers and the repositories.
//!
//! Services own no data. They reject absent (`null`) inputs, optionally apply
//! the entity business rules, and otherwise pass results straight through.

pub mod error;
pub mod golf_course_service;
pub mod tournament_service;

#[cfg(test)]
mod test_support;

pub use error::ServiceError;
pub use golf_course_service::GolfCourseService;
pub use tournament_service::TournamentService;
