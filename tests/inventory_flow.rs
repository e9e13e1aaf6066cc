//! Integration tests for the inventory and analysis flow
//!
//! Exercises the store, projector and orchestrator together without any
//! live endpoint: the analyst transport is scripted.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use serde_json::{json, Value};

use pantrywatch::analyst::client::{GenerateRequest, RawResponse};
use pantrywatch::analyst::{AnalysisOrchestrator, AnalystClient, GenerateTransport, ALL_STOCKED_MESSAGE};
use pantrywatch::inventory::{classify, project, ItemPatch, ItemStatus, NewItem, Unit};
use pantrywatch::store::{DocumentStore, FileStore};
use pantrywatch::Result;

fn draft(name: &str, stock: f64, reorder_level: f64, cost: f64, vendor: &str) -> NewItem {
    NewItem {
        name: name.to_string(),
        current_stock: stock,
        reorder_level,
        unit: Unit::Kg,
        unit_cost: cost,
        primary_vendor: vendor.to_string(),
        vendor_contact: format!("{}@example.com", vendor.to_lowercase().replace(' ', ".")),
    }
}

/// Scripted transport shared by the orchestrator tests: records every
/// request body and plays back a fixed outcome sequence
struct RecordingTransport {
    outcomes: Mutex<Vec<RawResponse>>,
    requests: Arc<Mutex<Vec<Value>>>,
    sends: Arc<AtomicUsize>,
}

impl RecordingTransport {
    fn new(mut outcomes: Vec<RawResponse>, sends: Arc<AtomicUsize>) -> Self {
        outcomes.reverse();
        Self {
            outcomes: Mutex::new(outcomes),
            requests: Arc::new(Mutex::new(Vec::new())),
            sends,
        }
    }

    fn requests(&self) -> Arc<Mutex<Vec<Value>>> {
        self.requests.clone()
    }
}

#[async_trait]
impl GenerateTransport for RecordingTransport {
    async fn send(&self, request: &GenerateRequest) -> Result<RawResponse> {
        self.sends.fetch_add(1, Ordering::SeqCst);
        self.requests
            .lock()
            .unwrap()
            .push(serde_json::to_value(request).unwrap());
        Ok(self.outcomes.lock().unwrap().pop().expect("script exhausted"))
    }
}

fn plan_response(text: &str) -> RawResponse {
    RawResponse {
        status: 200,
        body: json!({
            "candidates": [{ "content": { "parts": [{ "text": text }] } }]
        }),
    }
}

fn rate_limited() -> RawResponse {
    RawResponse {
        status: 429,
        body: Value::Null,
    }
}

#[tokio::test]
async fn test_store_to_projection_flow() {
    let store = FileStore::in_memory();

    store.create(draft("All-Purpose Flour", 2.0, 10.0, 40.0, "Addis Mills")).await.unwrap();
    store.create(draft("Olive Oil", 30.0, 10.0, 12.0, "Coastal Imports")).await.unwrap();
    let rice_id = store.create(draft("Rice", 1.0, 20.0, 3.0, "Addis Mills")).await.unwrap();

    // Outstanding order suppresses urgency for rice.
    let date = "2026-09-01".parse().unwrap();
    store.update(&rice_id, ItemPatch::mark_ordered(date)).await.unwrap();

    let items = store.snapshot().await;
    let view = project(&items, "", false);
    let names: Vec<_> = view.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, ["All-Purpose Flour", "Rice", "Olive Oil"]);

    assert_eq!(classify(&view[0]), ItemStatus::UrgentReorder);
    assert_eq!(classify(&view[1]), ItemStatus::OrderPlaced);
    assert_eq!(classify(&view[2]), ItemStatus::WellStocked);

    // Vendor search catches both Addis Mills items.
    let searched = project(&items, "addis", false);
    assert_eq!(searched.len(), 2);

    let urgent = project(&items, "", true);
    assert_eq!(urgent.len(), 1);
    assert_eq!(urgent[0].name, "All-Purpose Flour");
}

#[tokio::test]
async fn test_analysis_over_live_store_snapshot() {
    let store = FileStore::in_memory();
    store.create(draft("All-Purpose Flour", 2.0, 10.0, 40.0, "Addis Mills")).await.unwrap();
    store.create(draft("Olive Oil", 30.0, 10.0, 12.0, "Coastal Imports")).await.unwrap();

    let sends = Arc::new(AtomicUsize::new(0));
    let transport = RecordingTransport::new(
        vec![plan_response("Order 15 kg of flour from Addis Mills today.")],
        sends.clone(),
    );
    let client = AnalystClient::with_retry(transport, 5, Duration::from_millis(1));
    let mut orchestrator = AnalysisOrchestrator::new(client);

    let items = store.snapshot().await;
    let report = orchestrator.run(&items).await.unwrap().to_string();

    assert_eq!(report, "Order 15 kg of flour from Addis Mills today.");
    assert_eq!(sends.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_analysis_request_embeds_only_urgent_items() {
    let store = FileStore::in_memory();
    store.create(draft("All-Purpose Flour", 2.0, 10.0, 40.0, "Addis Mills")).await.unwrap();
    store.create(draft("Olive Oil", 30.0, 10.0, 12.0, "Coastal Imports")).await.unwrap();

    let sends = Arc::new(AtomicUsize::new(0));
    let transport = RecordingTransport::new(vec![plan_response("plan")], sends);
    let requests = transport.requests();
    let client = AnalystClient::with_retry(transport, 5, Duration::from_millis(1));
    let mut orchestrator = AnalysisOrchestrator::new(client);

    let items = store.snapshot().await;
    orchestrator.run(&items).await.unwrap();

    let recorded = requests.lock().unwrap();
    assert_eq!(recorded.len(), 1);

    let query = recorded[0]["contents"][0]["parts"][0]["text"]
        .as_str()
        .unwrap()
        .to_string();
    assert!(query.contains("All-Purpose Flour"));
    assert!(!query.contains("Olive Oil"));

    let instruction = recorded[0]["systemInstruction"]["parts"][0]["text"]
        .as_str()
        .unwrap();
    assert!(instruction.contains("1.5 times its reorder level"));
}

#[tokio::test]
async fn test_ordered_inventory_short_circuits_without_network() {
    let store = FileStore::in_memory();
    let id = store.create(draft("Rice", 1.0, 20.0, 3.0, "Addis Mills")).await.unwrap();
    let date = "2026-09-01".parse().unwrap();
    store.update(&id, ItemPatch::mark_ordered(date)).await.unwrap();

    let sends = Arc::new(AtomicUsize::new(0));
    let transport = RecordingTransport::new(vec![], sends.clone());
    let client = AnalystClient::with_retry(transport, 5, Duration::from_millis(1));
    let mut orchestrator = AnalysisOrchestrator::new(client);

    let items = store.snapshot().await;
    let report = orchestrator.run(&items).await.unwrap().to_string();

    assert_eq!(report, ALL_STOCKED_MESSAGE);
    assert_eq!(sends.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_rate_limited_analysis_recovers() {
    let store = FileStore::in_memory();
    store.create(draft("Basil", 0.2, 1.0, 8.0, "Green Farm")).await.unwrap();

    let sends = Arc::new(AtomicUsize::new(0));
    let transport = RecordingTransport::new(
        vec![rate_limited(), rate_limited(), plan_response("Restock basil first.")],
        sends.clone(),
    );
    let client = AnalystClient::with_retry(transport, 5, Duration::from_millis(1));
    let mut orchestrator = AnalysisOrchestrator::new(client);

    let items = store.snapshot().await;
    let report = orchestrator.run(&items).await.unwrap().to_string();

    assert_eq!(report, "Restock basil first.");
    assert_eq!(sends.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn test_file_persistence_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("inventory.json");

    {
        let store = FileStore::open(&path).unwrap();
        store.create(draft("Salt", 0.5, 2.0, 1.0, "Addis Mills")).await.unwrap();
    }

    let store = FileStore::open(&path).unwrap();
    let items = store.snapshot().await;
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].name, "Salt");
    assert_eq!(classify(&items[0]), ItemStatus::UrgentReorder);
}
