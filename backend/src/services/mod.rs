//! Business logic services
//!
//! Services encapsulate business logic and coordinate between
//! the HTTP layer and the store.

pub mod exercise;
pub mod user;

pub use exercise::{ExerciseLog, ExerciseService, LogExerciseInput, LogQuery};
pub use user::UserService;
