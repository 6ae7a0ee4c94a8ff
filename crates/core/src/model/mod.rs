pub mod code;
mod weightage;

pub use code::{ChapterCode, CodeParseError};
pub use mock_test::{Difficulty, MockTestDraft, MockTestValidationError, ValidatedMockTest};
pub use weightage::{Chapter, PlanError, WeightagePlan};
