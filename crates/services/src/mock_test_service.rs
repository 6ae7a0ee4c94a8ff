use std::collections::BTreeMap;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use prep_core::model::{ChapterCode, ValidatedMockTest};

use crate::error::MockTestServiceError;
use crate::session::ApiSession;

//
// ─── SERVICE ───────────────────────────────────────────────────────────────────
//

/// Client for the backend's mock-test API.
///
/// Mutating calls carry the session's bearer token; reads are
/// unauthenticated, matching the backend contract. The service never retries
/// and never consumes the caller's draft, so a failed submission can be
/// retried without re-entering anything.
#[derive(Clone)]
pub struct MockTestService {
    client: Client,
    session: ApiSession,
}

impl MockTestService {
    #[must_use]
    pub fn new(session: ApiSession) -> Self {
        Self {
            client: Client::new(),
            session,
        }
    }

    /// Submits a validated mock test for creation.
    ///
    /// # Errors
    ///
    /// Returns `MockTestServiceError` on transport failure, a non-2xx
    /// status, or a `success: false` envelope.
    pub async fn create(
        &self,
        test: &ValidatedMockTest,
    ) -> Result<CreateReceipt, MockTestServiceError> {
        let payload = AddMockTestRequest::from_validated(test);
        debug!(
            name = %payload.name,
            questions = payload.question_count,
            chapters = payload.weightage.len(),
            "submitting mock test"
        );

        let response = self
            .client
            .post(self.endpoint("addMockTest"))
            .bearer_auth(self.session.token())
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(MockTestServiceError::HttpStatus(response.status()));
        }

        let body: ApiEnvelope<serde_json::Value> = response.json().await?;
        let (message, data) = body.into_parts()?;
        Ok(CreateReceipt { message, data })
    }

    /// Lists every mock test known to the backend.
    ///
    /// # Errors
    ///
    /// Returns `MockTestServiceError` on transport failure, a non-2xx
    /// status, a failure envelope, or a success envelope without data.
    pub async fn list_all(&self) -> Result<Vec<MockTestSummary>, MockTestServiceError> {
        let response = self
            .client
            .get(self.endpoint("getAllMockTest"))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(MockTestServiceError::HttpStatus(response.status()));
        }

        let body: ApiEnvelope<Vec<MockTestSummary>> = response.json().await?;
        let (_, data) = body.into_parts()?;
        data.ok_or(MockTestServiceError::MissingData)
    }

    /// Fetches one mock test, including its drawn questions, by name.
    ///
    /// # Errors
    ///
    /// Returns `MockTestServiceError` on transport failure, a non-2xx
    /// status, a failure envelope, or a success envelope without data.
    pub async fn fetch(&self, name: &str) -> Result<MockTestDetail, MockTestServiceError> {
        let response = self
            .client
            .get(self.endpoint("getMockTest"))
            .query(&[("name", name)])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(MockTestServiceError::HttpStatus(response.status()));
        }

        let body: ApiEnvelope<MockTestDetail> = response.json().await?;
        let (_, data) = body.into_parts()?;
        data.ok_or(MockTestServiceError::MissingData)
    }

    /// Deletes a mock test by name.
    ///
    /// # Errors
    ///
    /// Returns `MockTestServiceError` on transport failure, a non-2xx
    /// status, or a failure envelope.
    pub async fn delete(&self, name: &str) -> Result<(), MockTestServiceError> {
        debug!(%name, "deleting mock test");

        let response = self
            .client
            .post(self.endpoint("deleteMockTest"))
            .bearer_auth(self.session.token())
            .json(&DeleteMockTestRequest { name })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(MockTestServiceError::HttpStatus(response.status()));
        }

        let body: ApiEnvelope<serde_json::Value> = response.json().await?;
        body.into_parts()?;
        Ok(())
    }

    fn endpoint(&self, operation: &str) -> String {
        format!(
            "{}/api/test/{operation}",
            self.session.base_url().as_str().trim_end_matches('/')
        )
    }
}

//
// ─── WIRE TYPES ────────────────────────────────────────────────────────────────
//

/// Body of `POST /api/test/addMockTest`, in the backend's field names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddMockTestRequest {
    pub name: String,
    #[serde(rename = "noofquestions")]
    pub question_count: u32,
    #[serde(rename = "timelimit")]
    pub time_limit_minutes: u32,
    #[serde(rename = "passingscore")]
    pub passing_score: u32,
    pub description: String,
    /// Chapter code → integer percentage, enabled chapters only.
    pub weightage: BTreeMap<ChapterCode, u32>,
}

impl AddMockTestRequest {
    #[must_use]
    pub fn from_validated(test: &ValidatedMockTest) -> Self {
        Self {
            name: test.title().to_owned(),
            question_count: test.total_questions(),
            time_limit_minutes: test.time_limit_minutes(),
            passing_score: test.passing_score(),
            description: test.description().to_owned(),
            weightage: test.enabled_weightage().collect(),
        }
    }
}

#[derive(Debug, Serialize)]
struct DeleteMockTestRequest<'a> {
    name: &'a str,
}

/// Backend acknowledgement for a created mock test.
#[derive(Debug, Clone)]
pub struct CreateReceipt {
    pub message: Option<String>,
    pub data: Option<serde_json::Value>,
}

/// One row of `GET /api/test/getAllMockTest`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MockTestSummary {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "noofquestions")]
    pub question_count: u32,
    #[serde(rename = "timelimit")]
    pub time_limit_minutes: u32,
    #[serde(rename = "passingscore")]
    pub passing_score: u32,
}

/// Full mock test as returned by `GET /api/test/getMockTest`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MockTestDetail {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "timelimit")]
    pub time_limit_minutes: u32,
    #[serde(rename = "passingscore")]
    pub passing_score: u32,
    #[serde(default)]
    pub questions: Vec<MockTestQuestion>,
}

/// A question drawn into a mock test.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MockTestQuestion {
    #[serde(rename = "_id")]
    pub id: String,
    pub question: String,
    pub options: Vec<String>,
    /// Index of the correct option.
    pub answer: u32,
}

/// Every backend response wraps its payload in this envelope.
#[derive(Debug, Deserialize)]
struct ApiEnvelope<T> {
    success: bool,
    message: Option<String>,
    data: Option<T>,
}

impl<T> ApiEnvelope<T> {
    fn into_parts(self) -> Result<(Option<String>, Option<T>), MockTestServiceError> {
        if self.success {
            return Ok((self.message, self.data));
        }
        let message = self.message.unwrap_or_else(|| "unknown error".to_owned());
        warn!(%message, "backend reported failure");
        Err(MockTestServiceError::Backend { message })
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
