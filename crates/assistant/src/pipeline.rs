//! The orchestrator: scope filter, augmentation, assembly, dispatch.

use std::sync::Arc;

use tracing::{debug, info, warn};

use cityguide_config::Lexicon;
use cityguide_core::{ChatBackend, Message, ProviderError, StationGateway};
use cityguide_providers::ProviderRegistry;
use cityguide_stations::format_stations;

use crate::detect::AugmentationDetector;
use crate::prompt::{self, OUT_OF_SCOPE_MESSAGE};
use crate::scope::ScopeFilter;

/// Result cap when a lookup key narrows the query.
const KEYED_LIMIT: usize = 5;
/// Result cap for an unkeyed "query all" lookup.
const UNKEYED_LIMIT: usize = 10;

/// Yields the backend to dispatch against.
///
/// The pipeline resolves the backend once per invocation, immediately before
/// the call, so a reconfiguration between invocations takes effect on the
/// next message.
pub trait BackendResolver: Send + Sync {
    fn resolve(&self) -> Arc<dyn ChatBackend>;
}

impl BackendResolver for ProviderRegistry {
    fn resolve(&self) -> Arc<dyn ChatBackend> {
        self.backend()
    }
}

/// The conversational front door. One `send_message` call runs the whole
/// pipeline exactly once.
pub struct Assistant {
    scope: ScopeFilter,
    detector: AugmentationDetector,
    gateway: Arc<dyn StationGateway>,
    resolver: Arc<dyn BackendResolver>,
}

impl Assistant {
    pub fn new(
        lexicon: &Lexicon,
        gateway: Arc<dyn StationGateway>,
        resolver: Arc<dyn BackendResolver>,
    ) -> Self {
        Self {
            scope: ScopeFilter::from_lexicon(lexicon),
            detector: AugmentationDetector::from_lexicon(lexicon),
            gateway,
            resolver,
        }
    }

    /// Handle one user message against the given history.
    ///
    /// Off-topic messages return the fixed refusal without touching any
    /// backend. A failed station lookup degrades to an inline notice in the
    /// payload rather than failing the call; only the backend dispatch
    /// itself can error.
    pub async fn send_message(
        &self,
        message: &str,
        history: &[Message],
    ) -> Result<String, ProviderError> {
        if !self.scope.is_in_scope(message) {
            debug!("Message out of scope, returning fixed refusal");
            return Ok(OUT_OF_SCOPE_MESSAGE.to_string());
        }

        let station_context = if self.detector.needs_augmentation(message) {
            self.fetch_station_context(message).await
        } else {
            String::new()
        };

        let payload = prompt::build_payload(message, &station_context);

        let backend = self.resolver.resolve();
        debug!(backend = backend.name(), "Dispatching message");
        backend.chat(&payload, history).await
    }

    async fn fetch_station_context(&self, message: &str) -> String {
        let key = self.detector.extract_key(message);
        let (key, limit) = match key.as_deref() {
            Some(key) => (Some(key), KEYED_LIMIT),
            None => (None, UNKEYED_LIMIT),
        };
        info!(?key, limit, "Augmentation triggered, querying stations");

        match self.gateway.query_stations(key, limit).await {
            Ok(stations) => prompt::wrap_station_data(&format_stations(&stations)),
            Err(err) => {
                warn!(error = %err, "Station lookup failed, degrading to notice");
                prompt::LOOKUP_FAILED_NOTICE.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use async_trait::async_trait;
    use cityguide_core::{GatewayError, StationRecord};

    /// Backend that records every payload it receives and counts calls.
    struct RecordingBackend {
        calls: AtomicUsize,
        payloads: Mutex<Vec<String>>,
    }

    impl RecordingBackend {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                payloads: Mutex::new(Vec::new()),
            })
        }

        fn last_payload(&self) -> String {
            self.payloads.lock().unwrap().last().cloned().unwrap_or_default()
        }
    }

    #[async_trait]
    impl ChatBackend for RecordingBackend {
        fn name(&self) -> &str {
            "recording"
        }

        async fn chat(
            &self,
            payload: &str,
            _history: &[Message],
        ) -> Result<String, ProviderError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.payloads.lock().unwrap().push(payload.to_string());
            Ok("好的".to_string())
        }
    }

    struct FixedResolver(Arc<RecordingBackend>);

    impl BackendResolver for FixedResolver {
        fn resolve(&self) -> Arc<dyn ChatBackend> {
            self.0.clone()
        }
    }

    struct FailingGateway;

    #[async_trait]
    impl StationGateway for FailingGateway {
        async fn query_stations(
            &self,
            _key: Option<&str>,
            _limit: usize,
        ) -> Result<Vec<StationRecord>, GatewayError> {
            Err(GatewayError::Unavailable("connection refused".into()))
        }
    }

    /// Gateway that records the key/limit it was queried with.
    struct RecordingGateway {
        queries: Mutex<Vec<(Option<String>, usize)>>,
    }

    impl RecordingGateway {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                queries: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl StationGateway for RecordingGateway {
        async fn query_stations(
            &self,
            key: Option<&str>,
            limit: usize,
        ) -> Result<Vec<StationRecord>, GatewayError> {
            self.queries
                .lock()
                .unwrap()
                .push((key.map(str::to_string), limit));
            Ok(Vec::new())
        }
    }

    fn assistant(
        gateway: Arc<dyn StationGateway>,
        backend: Arc<RecordingBackend>,
    ) -> Assistant {
        Assistant::new(
            &Lexicon::default(),
            gateway,
            Arc::new(FixedResolver(backend)),
        )
    }

    #[tokio::test]
    async fn out_of_scope_skips_backend_entirely() {
        let backend = RecordingBackend::new();
        let assistant = assistant(RecordingGateway::new(), backend.clone());

        let reply = assistant
            .send_message("請幫我寫一段 Python 程式", &[])
            .await
            .unwrap();

        assert_eq!(reply, OUT_OF_SCOPE_MESSAGE);
        assert_eq!(backend.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn non_bike_question_skips_station_lookup() {
        let backend = RecordingBackend::new();
        let gateway = RecordingGateway::new();
        let assistant = assistant(gateway.clone(), backend.clone());

        assistant
            .send_message("台中有什麼好吃的？", &[])
            .await
            .unwrap();

        assert!(gateway.queries.lock().unwrap().is_empty());
        assert!(!backend.last_payload().contains("資料庫"));
    }

    #[tokio::test]
    async fn keyed_lookup_uses_extracted_name_and_tight_limit() {
        let backend = RecordingBackend::new();
        let gateway = RecordingGateway::new();
        let assistant = assistant(gateway.clone(), backend.clone());

        assistant
            .send_message("逢甲附近的 YouBike 還有車嗎？", &[])
            .await
            .unwrap();

        let queries = gateway.queries.lock().unwrap();
        assert_eq!(*queries, vec![(Some("逢甲".to_string()), KEYED_LIMIT)]);
    }

    #[tokio::test]
    async fn unkeyed_lookup_queries_all_with_wider_limit() {
        let backend = RecordingBackend::new();
        let gateway = RecordingGateway::new();
        let assistant = assistant(gateway.clone(), backend.clone());

        assistant
            .send_message("哪裡可以借 YouBike？", &[])
            .await
            .unwrap();

        let queries = gateway.queries.lock().unwrap();
        assert_eq!(*queries, vec![(None, UNKEYED_LIMIT)]);
    }

    #[tokio::test]
    async fn gateway_failure_degrades_to_notice_and_still_dispatches() {
        let backend = RecordingBackend::new();
        let assistant = assistant(Arc::new(FailingGateway), backend.clone());

        let reply = assistant
            .send_message("台中火車站的 YouBike 還有車嗎？", &[])
            .await
            .unwrap();

        assert_eq!(reply, "好的");
        assert_eq!(backend.calls.load(Ordering::SeqCst), 1);
        assert!(backend.last_payload().contains("【資料庫查詢失敗】"));
    }
}
