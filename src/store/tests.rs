use std::sync::Arc;

use parking_lot::Mutex;

use crate::data::{Document, FieldKind, FilterValue};
use crate::error::{Result, TrellisError};
use crate::filter::expression::{and, eq, gte};
use crate::filter::graphql::{ComparisonWhere, LogicalWhere, WhereFilter, WhereOperator, WhereValue};
use crate::store::VectorStore;
use crate::store::config::{ConsistencyLevel, StoreConfig};
use crate::store::executor::{DataObject, SearchExecutor, SearchHit, SearchQuery};
use crate::store::request::SearchRequestBuilder;

/// Executor double that records every call it receives.
#[derive(Default)]
struct RecordingExecutor {
    queries: Mutex<Vec<SearchQuery>>,
    upserts: Mutex<Vec<(Vec<DataObject>, ConsistencyLevel)>>,
    deletes: Mutex<Vec<(Vec<String>, ConsistencyLevel)>>,
}

#[async_trait::async_trait]
impl SearchExecutor for RecordingExecutor {
    async fn search(&self, query: SearchQuery) -> Result<Vec<SearchHit>> {
        self.queries.lock().push(query);
        Ok(vec![SearchHit {
            id: "doc1".to_string(),
            score: 0.92,
            document: None,
        }])
    }

    async fn upsert(
        &self,
        objects: Vec<DataObject>,
        consistency_level: ConsistencyLevel,
    ) -> Result<()> {
        self.upserts.lock().push((objects, consistency_level));
        Ok(())
    }

    async fn delete(&self, ids: &[String], consistency_level: ConsistencyLevel) -> Result<bool> {
        self.deletes.lock().push((ids.to_vec(), consistency_level));
        Ok(true)
    }
}

fn store_with(executor: Arc<RecordingExecutor>) -> VectorStore {
    let config = StoreConfig::builder("Articles")
        .consistency_level(ConsistencyLevel::All)
        .add_field("country", FieldKind::Text)
        .unwrap()
        .add_field("year", FieldKind::Number)
        .unwrap()
        .build()
        .unwrap();
    VectorStore::new(config, executor).unwrap()
}

#[tokio::test(flavor = "multi_thread")]
async fn test_search_passes_scalars_through() {
    let executor = Arc::new(RecordingExecutor::default());
    let store = store_with(executor.clone());

    let request = SearchRequestBuilder::new()
        .query("The World")
        .limit(5)
        .min_score(0.7)
        .build();

    let hits = store.search(request).await.unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, "doc1");

    let queries = executor.queries.lock();
    assert_eq!(queries.len(), 1);
    let query = &queries[0];
    assert_eq!(query.class_name, "Articles");
    assert_eq!(query.query, "The World");
    assert_eq!(query.limit, 5);
    assert_eq!(query.min_score, 0.7);
    assert_eq!(query.consistency_level, ConsistencyLevel::All);
    assert!(query.where_filter.is_none());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_search_translates_filter() {
    let executor = Arc::new(RecordingExecutor::default());
    let store = store_with(executor.clone());

    let request = SearchRequestBuilder::new()
        .query("The World")
        .filter(and(vec![eq("country", "UK"), gte("year", 2020)]).unwrap())
        .build();

    store.search(request).await.unwrap();

    let queries = executor.queries.lock();
    let expected = WhereFilter::Logical(LogicalWhere {
        operator: WhereOperator::And,
        operands: vec![
            WhereFilter::Comparison(ComparisonWhere {
                path: vec!["meta_country".to_string()],
                operator: WhereOperator::Equal,
                value: WhereValue::Text("UK".to_string()),
            }),
            WhereFilter::Comparison(ComparisonWhere {
                path: vec!["meta_year".to_string()],
                operator: WhereOperator::GreaterThanEqual,
                value: WhereValue::Number(2020.0),
            }),
        ],
    });
    assert_eq!(queries[0].where_filter.as_ref(), Some(&expected));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_translation_failure_skips_executor() {
    let executor = Arc::new(RecordingExecutor::default());
    let store = store_with(executor.clone());

    let request = SearchRequestBuilder::new()
        .query("The World")
        .filter(eq("missing", "UK"))
        .build();

    let result = store.search(request).await;
    assert!(matches!(result, Err(TrellisError::UnknownField(_))));
    assert!(
        executor.queries.lock().is_empty(),
        "Executor must not be invoked when translation fails"
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_add_documents_maps_properties() {
    let executor = Arc::new(RecordingExecutor::default());
    let store = store_with(executor.clone());

    let doc = Document::new_with_id("doc1", "a page about the UK")
        .add_metadata("country", "UK")
        .add_metadata("year", 2020)
        .add_metadata("note", "unregistered");

    let ids = store.add_documents(vec![doc]).await.unwrap();
    assert_eq!(ids, vec!["doc1".to_string()]);

    let upserts = executor.upserts.lock();
    assert_eq!(upserts.len(), 1);
    let (objects, consistency_level) = &upserts[0];
    assert_eq!(*consistency_level, ConsistencyLevel::All);
    assert_eq!(objects.len(), 1);

    let object = &objects[0];
    assert_eq!(object.id, "doc1");
    assert_eq!(object.class_name, "Articles");
    assert_eq!(
        object.properties.get("content"),
        Some(&serde_json::json!("a page about the UK"))
    );
    assert_eq!(
        object.properties.get("meta_country"),
        Some(&serde_json::json!("UK"))
    );
    assert_eq!(
        object.properties.get("meta_year"),
        Some(&serde_json::json!(2020.0))
    );
    assert!(
        !object.properties.contains_key("meta_note"),
        "Unregistered metadata must not become a typed property"
    );

    // Full metadata roundtrips through the JSON blob, registered or not.
    let blob = object.properties.get("metadata").unwrap().as_str().unwrap();
    let metadata: std::collections::HashMap<String, FilterValue> =
        serde_json::from_str(blob).unwrap();
    assert_eq!(metadata.get("note"), Some(&FilterValue::Text("unregistered".to_string())));
    assert_eq!(metadata.get("country"), Some(&FilterValue::Text("UK".to_string())));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_add_documents_assigns_uuid() {
    let executor = Arc::new(RecordingExecutor::default());
    let store = store_with(executor.clone());

    let ids = store
        .add_documents(vec![Document::new("no id here")])
        .await
        .unwrap();

    assert_eq!(ids.len(), 1);
    assert!(
        uuid::Uuid::parse_str(&ids[0]).is_ok(),
        "Assigned id should be a UUID, got '{}'",
        ids[0]
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_add_documents_type_mismatch() {
    let executor = Arc::new(RecordingExecutor::default());
    let store = store_with(executor.clone());

    let doc = Document::new("bad year").add_metadata("year", "twenty-twenty");
    let result = store.add_documents(vec![doc]).await;

    assert!(matches!(
        result,
        Err(TrellisError::TypeMismatch {
            ref field,
            expected: FieldKind::Number,
            actual: FieldKind::Text,
        }) if field == "year"
    ));
    assert!(
        executor.upserts.lock().is_empty(),
        "Executor must not be invoked when mapping fails"
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_delete_documents_passthrough() {
    let executor = Arc::new(RecordingExecutor::default());
    let store = store_with(executor.clone());

    let ids = vec!["doc1".to_string(), "doc2".to_string()];
    let deleted = store.delete_documents(&ids).await.unwrap();
    assert!(deleted);

    let deletes = executor.deletes.lock();
    assert_eq!(deletes.len(), 1);
    assert_eq!(deletes[0].0, ids);
    assert_eq!(deletes[0].1, ConsistencyLevel::All);
}
