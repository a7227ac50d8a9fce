//! Dependent dropdown — keeps the services selector consistent with the
//! currently selected master.
//!
//! Every master change takes a ticket from a monotonically increasing
//! counter. A fetched list is only rendered if its ticket is still the
//! latest when the response arrives, so a slow response for an earlier
//! selection never overwrites a later one. The list is cached either way.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use barbershop_domain::dropdown::{DropdownState, Placeholders};
use barbershop_domain::id::MasterId;
use barbershop_domain::service::Service;

use crate::ports::{Clock, ServicesFetcher, ServicesView, SystemClock};
use crate::services_cache::ServicesCache;

/// What a master change ended up doing to the view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// The state was rendered and is what the control now shows.
    Rendered(DropdownState),
    /// A later selection happened while fetching; nothing was rendered.
    Superseded,
}

/// Controller for the master → services dependent dropdown.
pub struct DependentDropdownController<F, V, C = SystemClock> {
    fetcher: F,
    view: V,
    clock: C,
    placeholders: Placeholders,
    cache: Mutex<ServicesCache>,
    latest_ticket: AtomicU64,
}

impl<F, V> DependentDropdownController<F, V, SystemClock>
where
    F: ServicesFetcher,
    V: ServicesView,
{
    /// Create a controller using the wall clock and the default TTL.
    pub fn new(fetcher: F, view: V) -> Self {
        Self::with_clock(fetcher, view, SystemClock)
    }
}

impl<F, V, C> DependentDropdownController<F, V, C>
where
    F: ServicesFetcher,
    V: ServicesView,
    C: Clock,
{
    /// Create a controller with an explicit clock.
    pub fn with_clock(fetcher: F, view: V, clock: C) -> Self {
        Self {
            fetcher,
            view,
            clock,
            placeholders: Placeholders::default(),
            cache: Mutex::new(ServicesCache::default()),
            latest_ticket: AtomicU64::new(0),
        }
    }

    #[must_use]
    pub fn with_placeholders(mut self, placeholders: Placeholders) -> Self {
        self.placeholders = placeholders;
        self
    }

    /// Replace the cache with an empty one using `ttl`.
    #[must_use]
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.cache = Mutex::new(ServicesCache::new(ttl));
        self
    }

    /// React to a new value of the master selector.
    ///
    /// A blank value renders [`DropdownState::Disabled`] without any fetch.
    /// A fresh cache entry is rendered immediately. Otherwise the control
    /// shows [`DropdownState::Loading`] until the fetch completes, and the
    /// result is rendered only if no other selection happened meanwhile.
    #[tracing::instrument(skip(self))]
    pub async fn on_master_changed(&self, selection: &str) -> SelectionOutcome {
        let ticket = self.latest_ticket.fetch_add(1, Ordering::SeqCst) + 1;

        let Some(master) = MasterId::from_selection(selection) else {
            return self.render_outcome(DropdownState::Disabled);
        };

        let cached = self.cache().get(&master, self.clock.now());
        if let Some(services) = cached {
            tracing::debug!(%master, count = services.len(), "services cache hit");
            return self.render_outcome(DropdownState::from_services(services));
        }

        self.render(&DropdownState::Loading);
        let services = self.fetch_services(&master).await;
        self.cache()
            .insert(master.clone(), services.clone(), self.clock.now());

        if !self.is_latest(ticket) {
            tracing::debug!(%master, "discarding services of a superseded selection");
            return SelectionOutcome::Superseded;
        }
        self.render_outcome(DropdownState::from_services(services))
    }

    /// Fetch the services of `master`.
    ///
    /// Failures are logged and reported as an empty list, which renders the
    /// same as a master without services. Entries violating domain
    /// invariants are dropped.
    pub async fn fetch_services(&self, master: &MasterId) -> Vec<Service> {
        match self.fetcher.fetch_services(master).await {
            Ok(services) => services
                .into_iter()
                .filter(|service| match service.validate() {
                    Ok(()) => true,
                    Err(err) => {
                        tracing::debug!(%err, id = %service.id, "skipping invalid service");
                        false
                    }
                })
                .collect(),
            Err(err) => {
                tracing::error!(error = %err, %master, "failed to fetch services");
                Vec::new()
            }
        }
    }

    /// Write `state` into the view.
    pub fn render(&self, state: &DropdownState) {
        tracing::trace!(state = state.kind(), "rendering services selector");
        self.view.show(&state.render(&self.placeholders));
    }

    fn render_outcome(&self, state: DropdownState) -> SelectionOutcome {
        self.render(&state);
        SelectionOutcome::Rendered(state)
    }

    fn is_latest(&self, ticket: u64) -> bool {
        self.latest_ticket.load(Ordering::SeqCst) == ticket
    }

    fn cache(&self) -> MutexGuard<'_, ServicesCache> {
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use barbershop_domain::dropdown::{RenderedSelect, SelectOption};
    use barbershop_domain::id::ServiceId;
    use barbershop_domain::service::Price;
    use barbershop_domain::time::Timestamp;
    use chrono::{TimeDelta, TimeZone, Utc};
    use std::collections::HashMap;
    use std::future::Future;
    use std::sync::Arc;
    use std::sync::atomic::AtomicUsize;
    use tokio::sync::oneshot;

    use crate::ports::FetchError;

    type Reply = Result<Vec<Service>, FetchError>;

    #[derive(Default)]
    struct RecordingView {
        renders: Mutex<Vec<RenderedSelect>>,
    }

    impl RecordingView {
        fn renders(&self) -> Vec<RenderedSelect> {
            self.renders.lock().unwrap().clone()
        }

        fn last(&self) -> RenderedSelect {
            self.renders().last().cloned().unwrap()
        }
    }

    impl ServicesView for Arc<RecordingView> {
        fn show(&self, select: &RenderedSelect) {
            self.renders.lock().unwrap().push(select.clone());
        }
    }

    /// Answers from a fixed table, or fails for every master.
    #[derive(Default)]
    struct StubFetcher {
        table: HashMap<String, Vec<Service>>,
        fail: bool,
        calls: AtomicUsize,
    }

    impl StubFetcher {
        fn with(master: &str, services: Vec<Service>) -> Self {
            let mut table = HashMap::new();
            table.insert(master.to_string(), services);
            Self {
                table,
                ..Self::default()
            }
        }

        fn failing() -> Self {
            Self {
                fail: true,
                ..Self::default()
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl ServicesFetcher for StubFetcher {
        fn fetch_services(&self, master: &MasterId) -> impl Future<Output = Reply> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let reply = if self.fail {
                Err(FetchError::Transport("connection refused".into()))
            } else {
                Ok(self.table.get(master.as_str()).cloned().unwrap_or_default())
            };
            async move { reply }
        }
    }

    /// Each master's response is released by the test through a oneshot.
    #[derive(Default)]
    struct GatedFetcher {
        gates: Mutex<HashMap<String, oneshot::Receiver<Reply>>>,
    }

    impl GatedFetcher {
        fn gate(&self, master: &str) -> oneshot::Sender<Reply> {
            let (tx, rx) = oneshot::channel();
            self.gates.lock().unwrap().insert(master.to_string(), rx);
            tx
        }
    }

    impl ServicesFetcher for GatedFetcher {
        fn fetch_services(&self, master: &MasterId) -> impl Future<Output = Reply> {
            let gate = self.gates.lock().unwrap().remove(master.as_str());
            async move {
                match gate {
                    Some(rx) => rx.await.unwrap_or_else(|_| Ok(Vec::new())),
                    None => Ok(Vec::new()),
                }
            }
        }
    }

    #[derive(Clone)]
    struct ManualClock(Arc<Mutex<Timestamp>>);

    impl ManualClock {
        fn new() -> Self {
            Self(Arc::new(Mutex::new(
                Utc.with_ymd_and_hms(2026, 1, 1, 9, 0, 0).unwrap(),
            )))
        }

        fn advance(&self, delta: TimeDelta) {
            *self.0.lock().unwrap() += delta;
        }
    }

    impl Clock for ManualClock {
        fn now(&self) -> Timestamp {
            *self.0.lock().unwrap()
        }
    }

    fn haircut() -> Service {
        Service::new(ServiceId::new("1").unwrap(), "Haircut")
            .unwrap()
            .with_price(Price::new("500"))
    }

    fn shave() -> Service {
        Service::new(ServiceId::new("2").unwrap(), "Shave").unwrap()
    }

    fn loading() -> RenderedSelect {
        DropdownState::Loading.render(&Placeholders::default())
    }

    #[tokio::test]
    async fn should_render_loading_then_success_when_cache_empty() {
        let fetcher = Arc::new(StubFetcher::with("5", vec![haircut()]));
        let view = Arc::new(RecordingView::default());
        let controller = DependentDropdownController::new(fetcher.clone(), view.clone());

        let outcome = controller.on_master_changed("5").await;

        assert_eq!(
            outcome,
            SelectionOutcome::Rendered(DropdownState::Success(vec![haircut()]))
        );
        let renders = view.renders();
        assert_eq!(renders.len(), 2);
        assert_eq!(renders[0], loading());
        let success = &renders[1];
        assert!(success.enabled);
        assert_eq!(success.options.len(), 1);
        assert_eq!(success.options[0].value, "1");
        assert!(success.options[0].label.contains("Haircut"));
        assert!(success.options[0].label.contains("500"));
        assert_eq!(fetcher.calls(), 1);
    }

    #[tokio::test]
    async fn should_render_disabled_without_fetch_when_selection_empty() {
        let fetcher = Arc::new(StubFetcher::default());
        let view = Arc::new(RecordingView::default());
        let controller = DependentDropdownController::new(fetcher.clone(), view.clone());

        let outcome = controller.on_master_changed("").await;

        assert_eq!(outcome, SelectionOutcome::Rendered(DropdownState::Disabled));
        assert_eq!(fetcher.calls(), 0);
        assert_eq!(
            view.renders(),
            vec![RenderedSelect {
                options: vec![SelectOption::placeholder("Select a master first")],
                enabled: false,
            }]
        );
    }

    #[tokio::test]
    async fn should_render_error_when_fetch_fails() {
        let view = Arc::new(RecordingView::default());
        let controller =
            DependentDropdownController::new(Arc::new(StubFetcher::failing()), view.clone());

        let outcome = controller.on_master_changed("5").await;

        assert_eq!(outcome, SelectionOutcome::Rendered(DropdownState::Error));
        assert!(!view.last().enabled);
    }

    #[tokio::test]
    async fn should_render_fetch_failure_like_master_without_services() {
        let failing_view = Arc::new(RecordingView::default());
        DependentDropdownController::new(Arc::new(StubFetcher::failing()), failing_view.clone())
            .on_master_changed("5")
            .await;

        let empty_view = Arc::new(RecordingView::default());
        DependentDropdownController::new(
            Arc::new(StubFetcher::with("5", Vec::new())),
            empty_view.clone(),
        )
        .on_master_changed("5")
        .await;

        assert_eq!(failing_view.renders(), empty_view.renders());
    }

    #[tokio::test]
    async fn should_not_refetch_within_ttl() {
        let fetcher = Arc::new(StubFetcher::with("5", vec![haircut(), shave()]));
        let view = Arc::new(RecordingView::default());
        let clock = ManualClock::new();
        let controller =
            DependentDropdownController::with_clock(fetcher.clone(), view.clone(), clock.clone());

        controller.on_master_changed("5").await;
        clock.advance(TimeDelta::minutes(4));
        let outcome = controller.on_master_changed("5").await;

        assert_eq!(fetcher.calls(), 1);
        assert_eq!(
            outcome,
            SelectionOutcome::Rendered(DropdownState::Success(vec![haircut(), shave()]))
        );
        // cache hits render directly, without a loading placeholder
        assert_eq!(view.renders().len(), 3);
        assert_ne!(view.last(), loading());
    }

    #[tokio::test]
    async fn should_serve_cached_empty_list_as_error() {
        let fetcher = Arc::new(StubFetcher::with("5", Vec::new()));
        let view = Arc::new(RecordingView::default());
        let controller = DependentDropdownController::new(fetcher.clone(), view.clone());

        controller.on_master_changed("5").await;
        let outcome = controller.on_master_changed("5").await;

        assert_eq!(outcome, SelectionOutcome::Rendered(DropdownState::Error));
        assert_eq!(fetcher.calls(), 1);
    }

    #[tokio::test]
    async fn should_refetch_once_after_ttl_expired() {
        let fetcher = Arc::new(StubFetcher::with("5", vec![haircut()]));
        let view = Arc::new(RecordingView::default());
        let clock = ManualClock::new();
        let controller =
            DependentDropdownController::with_clock(fetcher.clone(), view.clone(), clock.clone());

        controller.on_master_changed("5").await;
        clock.advance(TimeDelta::minutes(5) + TimeDelta::seconds(1));
        controller.on_master_changed("5").await;
        assert_eq!(fetcher.calls(), 2);

        // the refreshed entry is fresh again
        controller.on_master_changed("5").await;
        assert_eq!(fetcher.calls(), 2);
    }

    #[tokio::test]
    async fn should_honour_custom_ttl() {
        let fetcher = Arc::new(StubFetcher::with("5", vec![haircut()]));
        let clock = ManualClock::new();
        let controller = DependentDropdownController::with_clock(
            fetcher.clone(),
            Arc::new(RecordingView::default()),
            clock.clone(),
        )
        .with_ttl(Duration::from_secs(10));

        controller.on_master_changed("5").await;
        clock.advance(TimeDelta::seconds(11));
        controller.on_master_changed("5").await;

        assert_eq!(fetcher.calls(), 2);
    }

    #[tokio::test]
    async fn should_render_only_latest_selection_when_earlier_response_arrives_late() {
        let fetcher = Arc::new(GatedFetcher::default());
        let release_a = fetcher.gate("A");
        let release_b = fetcher.gate("B");
        let view = Arc::new(RecordingView::default());
        let controller = DependentDropdownController::new(fetcher.clone(), view.clone());

        let (outcome_a, outcome_b, ()) = tokio::join!(
            controller.on_master_changed("A"),
            controller.on_master_changed("B"),
            async {
                release_b.send(Ok(vec![shave()])).unwrap();
                tokio::task::yield_now().await;
                release_a.send(Ok(vec![haircut()])).unwrap();
            }
        );

        assert_eq!(outcome_a, SelectionOutcome::Superseded);
        assert_eq!(
            outcome_b,
            SelectionOutcome::Rendered(DropdownState::Success(vec![shave()]))
        );
        let last = view.last();
        assert_eq!(last.options.len(), 1);
        assert_eq!(last.options[0].label, "Shave");
        assert!(
            view.renders()
                .iter()
                .all(|render| render.options.iter().all(|o| o.label != "Haircut (500)"))
        );
    }

    #[tokio::test]
    async fn should_cache_superseded_response_for_later_selection() {
        let fetcher = Arc::new(GatedFetcher::default());
        let release_a = fetcher.gate("A");
        let view = Arc::new(RecordingView::default());
        let controller = DependentDropdownController::new(fetcher.clone(), view.clone());

        let (outcome_a, outcome_empty, ()) = tokio::join!(
            controller.on_master_changed("A"),
            controller.on_master_changed(""),
            async {
                release_a.send(Ok(vec![haircut()])).unwrap();
            }
        );
        assert_eq!(outcome_a, SelectionOutcome::Superseded);
        assert_eq!(
            outcome_empty,
            SelectionOutcome::Rendered(DropdownState::Disabled)
        );

        // no gate left for "A": a second fetch would return an empty list
        let outcome = controller.on_master_changed("A").await;
        assert_eq!(
            outcome,
            SelectionOutcome::Rendered(DropdownState::Success(vec![haircut()]))
        );
    }

    #[tokio::test]
    async fn should_not_let_late_fetch_override_cache_hit_of_later_selection() {
        let fetcher = Arc::new(GatedFetcher::default());
        let view = Arc::new(RecordingView::default());
        let controller = DependentDropdownController::new(fetcher.clone(), view.clone());

        // warm the cache for "B" (no gate: resolves to an empty list)
        controller.on_master_changed("B").await;

        let release_a = fetcher.gate("A");
        let (outcome_a, outcome_b, ()) = tokio::join!(
            controller.on_master_changed("A"),
            controller.on_master_changed("B"),
            async {
                release_a.send(Ok(vec![haircut()])).unwrap();
            }
        );

        assert_eq!(outcome_a, SelectionOutcome::Superseded);
        assert_eq!(outcome_b, SelectionOutcome::Rendered(DropdownState::Error));
        assert_eq!(
            view.last(),
            DropdownState::Error.render(&Placeholders::default())
        );
    }

    #[tokio::test]
    async fn should_drop_services_with_blank_names() {
        let blank = Service {
            id: ServiceId::new("3").unwrap(),
            name: "  ".to_string(),
            price: None,
        };
        let fetcher = Arc::new(StubFetcher::with("5", vec![blank, haircut()]));
        let controller =
            DependentDropdownController::new(fetcher, Arc::new(RecordingView::default()));

        let services = controller
            .fetch_services(&MasterId::new("5").unwrap())
            .await;
        assert_eq!(services, vec![haircut()]);
    }

    #[tokio::test]
    async fn should_use_configured_placeholders() {
        let view = Arc::new(RecordingView::default());
        let controller =
            DependentDropdownController::new(Arc::new(StubFetcher::default()), view.clone())
                .with_placeholders(Placeholders {
                    disabled: "Сначала выберите мастера".to_string(),
                    ..Placeholders::default()
                });

        controller.on_master_changed("   ").await;
        assert_eq!(view.last().options[0].label, "Сначала выберите мастера");
    }
}
