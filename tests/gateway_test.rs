mod common;

use std::sync::Arc;

use common::{ApiCall, InMemoryApi, Op};
use shopdesk::types::{CustomerDraft, Draft, ProductDraft};
use shopdesk::{CollectionApi, Customer, MutationGateway, Product};

fn product_gateway(api: Arc<InMemoryApi<Product>>) -> MutationGateway<Product> {
    let api: Arc<dyn CollectionApi<Product>> = api;
    MutationGateway::new(api)
}

#[tokio::test]
async fn test_create_transmits_stamped_copy_and_leaves_input_alone() {
    let api = Arc::new(InMemoryApi::products());
    let gateway = product_gateway(api.clone());

    let mut draft = ProductDraft::default();
    draft.set_field("name", "Pen").unwrap();
    draft.set_field("category", "STATIONARY").unwrap();
    let before = draft.clone();

    gateway.create(&draft).await.unwrap();

    // The caller's draft is untouched; stamping happened on the wire copy.
    assert_eq!(draft, before);

    let body = match &api.calls()[0] {
        ApiCall::Create(body) => body.clone(),
        other => panic!("expected create, got {:?}", other),
    };
    assert_eq!(body["createdBy"], "system");
    assert_eq!(body["updatedBy"], "system");
    assert_eq!(body["createdAt"], body["updatedAt"]);
    assert!(body["createdAt"]
        .as_str()
        .unwrap()
        .parse::<jiff::Timestamp>()
        .is_ok());
}

#[tokio::test]
async fn test_update_transmits_draft_verbatim() {
    let api = Arc::new(InMemoryApi::customers());
    api.seed(vec![Customer {
        id: "c-1".to_string(),
        name: "Asha".to_string(),
        email: "asha@example.com".to_string(),
        phone: "555-0100".to_string(),
        address: None,
    }]);
    let api_dyn: Arc<dyn CollectionApi<Customer>> = api.clone();
    let gateway = MutationGateway::new(api_dyn);

    let mut draft = CustomerDraft::default();
    draft.set_field("name", "Asha").unwrap();
    draft.set_field("email", "asha@example.com").unwrap();
    draft.set_field("phone", "555-0199").unwrap();

    gateway.update("c-1", &draft).await.unwrap();

    let (id, body) = match &api.calls()[0] {
        ApiCall::Update(id, body) => (id.clone(), body.clone()),
        other => panic!("expected update, got {:?}", other),
    };
    assert_eq!(id, "c-1");
    // No create-time stamping on update; the draft goes out as-is.
    assert_eq!(body["name"], "Asha");
    assert_eq!(body["phone"], "555-0199");
    assert!(body.get("createdBy").is_none());
}

#[tokio::test]
async fn test_failure_carries_body_message() {
    let api = Arc::new(InMemoryApi::products());
    api.fail_on(Op::Delete, 409, "product is referenced by open orders");
    let gateway = product_gateway(api.clone());

    let err = gateway.delete("p-1").await.unwrap_err();
    assert_eq!(err.status(), Some(409));
    assert_eq!(err.to_string(), "product is referenced by open orders");
}
