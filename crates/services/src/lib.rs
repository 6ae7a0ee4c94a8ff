#![forbid(unsafe_code)]

pub mod error;
pub mod mock_test_service;
pub mod session;

pub use error::{MockTestServiceError, SessionError};
pub use mock_test_service::{
    AddMockTestRequest, CreateReceipt, MockTestDetail, MockTestQuestion, MockTestService,
    MockTestSummary,
};
pub use session::ApiSession;
