//! In-memory collection API fake.
//!
//! Behaves like the remote server: assigns ids on create, replaces whole
//! records on update, and can be told to fail a given operation with an
//! HTTP status and body message. Every request is recorded so tests can
//! assert on transmitted bodies and call counts.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use shopdesk::types::{Customer, CustomerDraft, Product, ProductDraft};
use shopdesk::{Category, CollectionApi, Resource, Result, ShopdeskError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    List,
    Create,
    Update,
    Delete,
}

/// A recorded request, with the transmitted body where one exists.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiCall {
    List,
    Create(Value),
    Update(String, Value),
    Delete(String),
}

pub struct InMemoryApi<R: Resource> {
    items: Mutex<Vec<R>>,
    calls: Mutex<Vec<ApiCall>>,
    next_id: AtomicU64,
    materialize: fn(String, &R::Draft) -> R,
    failures: Mutex<HashMap<Op, (u16, String)>>,
}

impl<R: Resource> InMemoryApi<R> {
    fn new(materialize: fn(String, &R::Draft) -> R) -> Self {
        Self {
            items: Mutex::new(Vec::new()),
            calls: Mutex::new(Vec::new()),
            next_id: AtomicU64::new(1),
            materialize,
            failures: Mutex::new(HashMap::new()),
        }
    }

    /// Replace the server-side collection.
    pub fn seed(&self, items: Vec<R>) {
        *self.items.lock().unwrap() = items;
    }

    /// Fail every subsequent `op` request with the given status and body
    /// message, until cleared.
    pub fn fail_on(&self, op: Op, status: u16, message: &str) {
        self.failures
            .lock()
            .unwrap()
            .insert(op, (status, message.to_string()));
    }

    pub fn clear_failure(&self, op: Op) {
        self.failures.lock().unwrap().remove(&op);
    }

    /// Everything received so far, in request order.
    pub fn calls(&self) -> Vec<ApiCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Current server-side collection.
    pub fn items(&self) -> Vec<R> {
        self.items.lock().unwrap().clone()
    }

    fn record(&self, call: ApiCall) {
        self.calls.lock().unwrap().push(call);
    }

    fn check(&self, op: Op) -> Result<()> {
        if let Some((status, message)) = self.failures.lock().unwrap().get(&op) {
            return Err(ShopdeskError::Http {
                status: *status,
                message: message.clone(),
            });
        }
        Ok(())
    }
}

impl InMemoryApi<Product> {
    pub fn products() -> Self {
        Self::new(product_from_draft)
    }
}

impl InMemoryApi<Customer> {
    pub fn customers() -> Self {
        Self::new(customer_from_draft)
    }
}

#[async_trait]
impl<R: Resource> CollectionApi<R> for InMemoryApi<R> {
    async fn list(&self) -> Result<Vec<R>> {
        self.record(ApiCall::List);
        self.check(Op::List)?;
        Ok(self.items.lock().unwrap().clone())
    }

    async fn create(&self, draft: &R::Draft) -> Result<()> {
        self.record(ApiCall::Create(serde_json::to_value(draft)?));
        self.check(Op::Create)?;

        let id = format!(
            "{}-{}",
            &R::KIND[..1],
            self.next_id.fetch_add(1, Ordering::SeqCst)
        );
        let item = (self.materialize)(id, draft);
        self.items.lock().unwrap().push(item);
        Ok(())
    }

    async fn update(&self, id: &str, draft: &R::Draft) -> Result<()> {
        self.record(ApiCall::Update(id.to_string(), serde_json::to_value(draft)?));
        self.check(Op::Update)?;

        let mut items = self.items.lock().unwrap();
        match items.iter_mut().find(|item| item.id() == id) {
            Some(slot) => {
                *slot = (self.materialize)(id.to_string(), draft);
                Ok(())
            }
            None => Err(ShopdeskError::Http {
                status: 404,
                message: format!("{} not found", R::KIND),
            }),
        }
    }

    async fn delete(&self, id: &str) -> Result<()> {
        self.record(ApiCall::Delete(id.to_string()));
        self.check(Op::Delete)?;

        let mut items = self.items.lock().unwrap();
        match items.iter().position(|item| item.id() == id) {
            Some(index) => {
                items.remove(index);
                Ok(())
            }
            None => Err(ShopdeskError::Http {
                status: 404,
                message: format!("{} not found", R::KIND),
            }),
        }
    }
}

fn optional(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

fn product_from_draft(id: String, draft: &ProductDraft) -> Product {
    Product {
        id,
        name: draft.name.clone(),
        category: draft.category.unwrap_or(Category::GeneralStore),
        description: optional(&draft.description),
        status: draft.status,
        size_or_weight: optional(&draft.size_or_weight),
        unit_of_measure: draft.unit_of_measure,
        total_quantity: draft.total_quantity,
        image_url: optional(&draft.image_url),
        created_at: draft.created_at.clone(),
        updated_at: draft.updated_at.clone(),
        created_by: draft.created_by.clone(),
        updated_by: draft.updated_by.clone(),
    }
}

fn customer_from_draft(id: String, draft: &CustomerDraft) -> Customer {
    Customer {
        id,
        name: draft.name.clone(),
        email: draft.email.clone(),
        phone: draft.phone.clone(),
        address: optional(&draft.address),
    }
}
