use prep_core::Catalog;
use prep_core::model::{MockTestDraft, MockTestValidationError};
use serde_json::json;
use services::{AddMockTestRequest, ApiSession, MockTestService, MockTestServiceError};

fn quant_draft(catalog: &Catalog) -> MockTestDraft {
    let mut draft =
        MockTestDraft::for_subject(catalog, "Level I", "Quantitative Methods").unwrap();
    draft.title = "Quant Sprint".to_owned();
    draft.description = "Short quantitative methods mock".to_owned();
    draft.total_questions = 40;
    draft
}

#[test]
fn configure_and_package_mock_test() {
    let catalog = Catalog::cfa();
    let mut draft = quant_draft(&catalog);

    // 11 chapters: ten at 9%, the last takes the remainder.
    assert_eq!(draft.plan.len(), 11);
    assert_eq!(draft.plan.total_weight(), 100);
    assert_eq!(draft.plan.chapter(10).unwrap().weight(), 10);

    // Drop the last two chapters. The first toggle spreads 10 over 10
    // chapters cleanly; the second spreads 10 over 9 and loses the
    // remainder, so the user has to nudge a weight to get back to 100.
    draft.plan.toggle(10).unwrap();
    assert_eq!(draft.plan.total_weight(), 100);
    draft.plan.toggle(9).unwrap();
    assert_eq!(draft.plan.total_weight(), 99);
    draft.plan.set_weight(0, 12).unwrap();
    assert_eq!(draft.plan.total_weight(), 100);

    let request = AddMockTestRequest::from_validated(&draft.validate().unwrap());
    let value = serde_json::to_value(&request).unwrap();

    assert_eq!(value["name"], json!("Quant Sprint"));
    assert_eq!(value["noofquestions"], json!(40));
    let weightage = value["weightage"].as_object().unwrap();
    assert_eq!(weightage.len(), 9);
    assert!(weightage.keys().all(|key| key.starts_with("1-5-")));
    assert!(!weightage.contains_key("1-5-10"));
    assert!(!weightage.contains_key("1-5-11"));
    assert_eq!(
        weightage.values().map(|w| w.as_u64().unwrap()).sum::<u64>(),
        100
    );
}

#[test]
fn unbalanced_draft_never_reaches_the_wire() {
    let catalog = Catalog::cfa();
    let mut draft = quant_draft(&catalog);
    draft.plan.set_weight(0, 50).unwrap();

    let total = draft.plan.total_weight();
    let err = draft.validate().unwrap_err();
    assert_eq!(err, MockTestValidationError::UnbalancedWeightage { total });
}

#[tokio::test]
async fn transport_failure_surfaces_as_http_error() {
    // Nothing listens on this port, so the request fails before any backend
    // interpretation; the caller keeps its draft and can retry.
    let session = ApiSession::new("http://127.0.0.1:9", "test-token").unwrap();
    let service = MockTestService::new(session);

    let catalog = Catalog::cfa();
    let test = quant_draft(&catalog).validate().unwrap();

    let err = service.create(&test).await.unwrap_err();
    assert!(matches!(err, MockTestServiceError::Http(_)));
}
