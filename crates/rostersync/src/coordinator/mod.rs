//! Per-session coordination of roster data.
//!
//! A [`RosterCoordinator`] owns the local mirror of shift state, the range
//! cache and the in-flight markers. It is constructed per session or view
//! and dropped with it; nothing here lives in module scope. Reads go through
//! the range cache, mutations go remote-first and invalidate whatever the
//! mutation could have made stale.

mod error;
mod range_cache;

pub use error::{CoordinatorError, Result};

use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock};
use std::time::Duration;

use chrono::NaiveDate;
use uuid::Uuid;

use rostersync_core::api::{CreateShiftRequest, ReferenceApi, ShiftApi, UpdateShiftRequest};
use rostersync_core::cache::{reference_key, shift_range_key, Cache};
use rostersync_core::roster::{
    merge_shifts, sort_shifts, Client, DateRange, Location, Shift, StaffMember, Team,
};

use crate::config::Config;
use crate::debounce::{DebounceHandle, Debouncer};
use crate::service::CacheService;

use range_cache::RangeCache;

const REFERENCE_KINDS: [&str; 4] = ["clients", "locations", "teams", "staff"];

/// Snapshot of the reference data a roster view needs alongside shifts.
#[derive(Debug, Clone, Default)]
pub struct ReferenceData {
    pub clients: Vec<Client>,
    pub locations: Vec<Location>,
    pub teams: Vec<Team>,
    pub staff: Vec<StaffMember>,
}

/// The last range a view asked for, replayed on full reloads.
#[derive(Debug, Clone, Copy)]
struct Viewport {
    start: NaiveDate,
    end: NaiveDate,
    exact: bool,
}

/// Orchestrates reference-data loading and range-scoped shift loading for
/// one session, and applies mutations remote-first.
pub struct RosterCoordinator<A, C> {
    api: Arc<A>,
    kv: CacheService<C>,
    ranges: RangeCache,
    shifts: RwLock<HashMap<Uuid, Shift>>,
    reference: RwLock<ReferenceData>,
    viewport: Mutex<Option<Viewport>>,
    last_error: Mutex<Option<CoordinatorError>>,
    debouncer: Debouncer,
    buffer_days: i64,
}

impl<A, C> RosterCoordinator<A, C>
where
    A: ShiftApi + ReferenceApi,
    C: Cache,
{
    /// Creates a coordinator from configuration.
    pub fn new(api: Arc<A>, kv: CacheService<C>, config: &Config) -> Self {
        Self::with_settings(
            api,
            kv,
            config.cache_ttl(),
            config.range_buffer_days,
            config.debounce_window(),
        )
    }

    /// Creates a coordinator with explicit cache and debounce settings.
    pub fn with_settings(
        api: Arc<A>,
        kv: CacheService<C>,
        cache_ttl: Duration,
        buffer_days: i64,
        debounce_window: Duration,
    ) -> Self {
        Self {
            api,
            kv,
            ranges: RangeCache::new(cache_ttl),
            shifts: RwLock::new(HashMap::new()),
            reference: RwLock::new(ReferenceData::default()),
            viewport: Mutex::new(None),
            last_error: Mutex::new(None),
            debouncer: Debouncer::new(debounce_window),
            buffer_days,
        }
    }

    /// Loads clients, locations, teams and staff through the KV cache.
    pub async fn load_reference_data(&self) -> Result<()> {
        let clients = self
            .kv
            .get_or_set(&reference_key("clients"), None, || self.api.list_clients())
            .await?;
        let locations = self
            .kv
            .get_or_set(&reference_key("locations"), None, || {
                self.api.list_locations()
            })
            .await?;
        let teams = self
            .kv
            .get_or_set(&reference_key("teams"), None, || self.api.list_teams())
            .await?;
        let staff = self
            .kv
            .get_or_set(&reference_key("staff"), None, || self.api.list_staff())
            .await?;

        let mut reference = self.reference.write().unwrap();
        *reference = ReferenceData {
            clients,
            locations,
            teams,
            staff,
        };
        Ok(())
    }

    /// Loads shifts for the given window into local state.
    ///
    /// Unless `exact`, the window is padded by the configured buffer before
    /// querying so small scrolls stay within an already-fetched slot. A load
    /// whose range key is already being fetched is skipped outright; a fresh
    /// cache entry is merged without a network call.
    ///
    /// Failures are recorded in the error state rather than returned; the
    /// cache and local shift state are untouched by a failed load.
    pub async fn load_range(&self, start: NaiveDate, end: NaiveDate, exact: bool) {
        if let Err(err) = self.load_range_inner(start, end, exact).await {
            tracing::warn!(%start, %end, error = %err, "Range load failed");
            self.record_error(err);
        }
    }

    /// Schedules a debounced [`RosterCoordinator::load_range`].
    ///
    /// Only the most recently requested range loads; earlier pending
    /// requests inside the quiet window are cancelled.
    pub fn load_range_debounced(
        self: Arc<Self>,
        start: NaiveDate,
        end: NaiveDate,
        exact: bool,
    ) -> DebounceHandle
    where
        A: 'static,
        C: 'static,
    {
        let coordinator = Arc::clone(&self);
        self.debouncer.schedule(async move {
            coordinator.load_range(start, end, exact).await;
        })
    }

    /// Creates a shift remote-first, then mirrors it locally.
    ///
    /// Only cached ranges whose fetched bounds contain the new shift's start
    /// date are invalidated; everything else stays warm.
    pub async fn create_shift(&self, req: &CreateShiftRequest) -> Result<Shift> {
        let shift = self.api.create_shift(req).await?;
        self.replace_local(shift.clone());
        self.ranges.invalidate_containing(shift.start_date());
        tracing::debug!(shift_id = %shift.id, "Shift created");
        Ok(shift)
    }

    /// Updates a shift remote-first, then replaces the local record.
    ///
    /// The whole range cache is invalidated: the shift's date may have moved
    /// between ranges.
    pub async fn update_shift(&self, id: Uuid, req: &UpdateShiftRequest) -> Result<Shift> {
        let shift = self.api.update_shift(id, req).await?;
        self.replace_local(shift.clone());
        self.ranges.invalidate_all();
        tracing::debug!(shift_id = %id, "Shift updated");
        Ok(shift)
    }

    /// Deletes a shift remote-first, then drops the local record.
    pub async fn delete_shift(&self, id: Uuid) -> Result<()> {
        self.api.delete_shift(id).await?;
        self.shifts.write().unwrap().remove(&id);
        self.ranges.invalidate_all();
        tracing::debug!(shift_id = %id, "Shift deleted");
        Ok(())
    }

    /// Cancels a shift, then reloads everything.
    ///
    /// Cancellation has server-side side effects (cover reassignment, flag
    /// changes), so local state is rebuilt from the API rather than patched.
    pub async fn cancel_shift(&self, id: Uuid) -> Result<()> {
        self.api.cancel_shift(id).await?;
        tracing::debug!(shift_id = %id, "Shift cancelled; reloading");
        self.reload().await
    }

    /// Appends an instruction to a shift's instructions log.
    pub async fn add_instruction(&self, id: Uuid, text: &str) -> Result<Shift> {
        let shift = self.api.add_instruction(id, text).await?;
        self.replace_local(shift.clone());
        self.ranges.invalidate_all();
        Ok(shift)
    }

    /// Appends a message to a shift's message log.
    pub async fn add_message(&self, id: Uuid, text: &str) -> Result<Shift> {
        let shift = self.api.add_message(id, text).await?;
        self.replace_local(shift.clone());
        self.ranges.invalidate_all();
        Ok(shift)
    }

    /// Local shifts, sorted chronologically.
    pub fn shifts(&self) -> Vec<Shift> {
        let mut shifts: Vec<Shift> = self.shifts.read().unwrap().values().cloned().collect();
        sort_shifts(&mut shifts);
        shifts
    }

    /// A single local shift by id.
    pub fn shift(&self, id: Uuid) -> Option<Shift> {
        self.shifts.read().unwrap().get(&id).cloned()
    }

    pub fn clients(&self) -> Vec<Client> {
        self.reference.read().unwrap().clients.clone()
    }

    pub fn locations(&self) -> Vec<Location> {
        self.reference.read().unwrap().locations.clone()
    }

    pub fn teams(&self) -> Vec<Team> {
        self.reference.read().unwrap().teams.clone()
    }

    pub fn staff(&self) -> Vec<StaffMember> {
        self.reference.read().unwrap().staff.clone()
    }

    /// The last recorded load error, cleared by the next successful fetch.
    pub fn last_error(&self) -> Option<CoordinatorError> {
        self.last_error.lock().unwrap().clone()
    }

    async fn load_range_inner(&self, start: NaiveDate, end: NaiveDate, exact: bool) -> Result<()> {
        *self.viewport.lock().unwrap() = Some(Viewport { start, end, exact });

        let requested = DateRange::new(start, end)?;
        let range = if exact {
            requested
        } else {
            requested.padded(self.buffer_days)
        };
        let key = shift_range_key(range);

        if self.ranges.is_in_flight(&key) {
            tracing::trace!(key = %key, "Range fetch already in flight; skipping");
            return Ok(());
        }

        if let Some(shifts) = self.ranges.fresh(&key) {
            tracing::trace!(key = %key, count = shifts.len(), "Range cache hit");
            self.merge(shifts);
            return Ok(());
        }

        // begin() re-checks under the marker lock.
        let Some(_guard) = self.ranges.begin(&key) else {
            return Ok(());
        };

        tracing::trace!(key = %key, "Range cache miss");
        let shifts = self.api.list_shifts(range, true).await?;
        self.ranges.store(key, range, shifts.clone());
        self.merge(shifts);
        self.clear_error();
        Ok(())
        // _guard drops here, clearing the in-flight marker on success and
        // failure alike.
    }

    /// Full reload: every cache dropped, reference data and the current
    /// viewport refetched.
    async fn reload(&self) -> Result<()> {
        self.ranges.invalidate_all();
        for kind in REFERENCE_KINDS {
            self.kv.delete(&reference_key(kind)).await;
        }
        self.load_reference_data().await?;

        let viewport = *self.viewport.lock().unwrap();
        if let Some(v) = viewport {
            if let Err(err) = self.load_range_inner(v.start, v.end, v.exact).await {
                self.record_error(err.clone());
                return Err(err);
            }
        }
        Ok(())
    }

    fn merge(&self, fetched: Vec<Shift>) {
        let mut shifts = self.shifts.write().unwrap();
        merge_shifts(&mut shifts, fetched);
    }

    fn replace_local(&self, shift: Shift) {
        self.shifts.write().unwrap().insert(shift.id, shift);
    }

    fn record_error(&self, err: CoordinatorError) {
        *self.last_error.lock().unwrap() = Some(err);
    }

    fn clear_error(&self) {
        *self.last_error.lock().unwrap() = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::{TimeZone, Utc};
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use tokio::sync::{Notify, RwLock as TokioRwLock};

    use rostersync_core::api::{ApiError, Result as ApiResult};
    use rostersync_core::cache::Result as CacheResult;
    use rostersync_core::roster::ShiftRole;

    // Mock remote API that tracks calls
    struct MockApi {
        shifts: TokioRwLock<HashMap<Uuid, Shift>>,
        list_calls: AtomicUsize,
        reference_calls: AtomicUsize,
        last_query: Mutex<Option<(DateRange, bool)>>,
        fail_list: AtomicBool,
        fail_mutations: AtomicBool,
        gate: Mutex<Option<Arc<Notify>>>,
    }

    impl MockApi {
        fn new() -> Self {
            Self {
                shifts: TokioRwLock::new(HashMap::new()),
                list_calls: AtomicUsize::new(0),
                reference_calls: AtomicUsize::new(0),
                last_query: Mutex::new(None),
                fail_list: AtomicBool::new(false),
                fail_mutations: AtomicBool::new(false),
                gate: Mutex::new(None),
            }
        }

        async fn insert(&self, shift: Shift) {
            self.shifts.write().await.insert(shift.id, shift);
        }

        fn set_gate(&self, gate: Arc<Notify>) {
            *self.gate.lock().unwrap() = Some(gate);
        }

        fn list_calls(&self) -> usize {
            self.list_calls.load(Ordering::SeqCst)
        }

        fn reference_calls(&self) -> usize {
            self.reference_calls.load(Ordering::SeqCst)
        }

        fn last_query(&self) -> Option<(DateRange, bool)> {
            *self.last_query.lock().unwrap()
        }
    }

    #[async_trait]
    impl ShiftApi for MockApi {
        async fn list_shifts(
            &self,
            range: DateRange,
            include_relations: bool,
        ) -> ApiResult<Vec<Shift>> {
            let gate = self.gate.lock().unwrap().clone();
            if let Some(gate) = gate {
                gate.notified().await;
            }
            self.list_calls.fetch_add(1, Ordering::SeqCst);
            *self.last_query.lock().unwrap() = Some((range, include_relations));
            if self.fail_list.load(Ordering::SeqCst) {
                return Err(ApiError::Request("network down".to_string()));
            }
            let shifts = self.shifts.read().await;
            Ok(shifts
                .values()
                .filter(|s| range.contains(s.start_date()))
                .cloned()
                .collect())
        }

        async fn get_shift(&self, id: Uuid) -> ApiResult<Option<Shift>> {
            Ok(self.shifts.read().await.get(&id).cloned())
        }

        async fn create_shift(&self, req: &CreateShiftRequest) -> ApiResult<Shift> {
            if self.fail_mutations.load(Ordering::SeqCst) {
                return Err(ApiError::Server {
                    status: 500,
                    message: "boom".to_string(),
                });
            }
            let mut shift = Shift::new(req.title.clone(), req.starts_at, req.ends_at);
            shift.staff = req.staff.clone();
            shift.client_ids = req.client_ids.clone();
            shift.location_ids = req.location_ids.clone();
            shift.team_ids = req.team_ids.clone();
            shift.published = req.published.unwrap_or(false);
            self.shifts.write().await.insert(shift.id, shift.clone());
            Ok(shift)
        }

        async fn update_shift(&self, id: Uuid, req: &UpdateShiftRequest) -> ApiResult<Shift> {
            if self.fail_mutations.load(Ordering::SeqCst) {
                return Err(ApiError::Server {
                    status: 500,
                    message: "boom".to_string(),
                });
            }
            let mut shifts = self.shifts.write().await;
            let shift = shifts.get_mut(&id).ok_or_else(|| ApiError::NotFound {
                resource: id.to_string(),
            })?;
            if let Some(title) = &req.title {
                shift.title = title.clone();
            }
            if let Some(starts_at) = req.starts_at {
                shift.starts_at = starts_at;
            }
            if let Some(ends_at) = req.ends_at {
                shift.ends_at = ends_at;
            }
            if let Some(published) = req.published {
                shift.published = published;
            }
            Ok(shift.clone())
        }

        async fn delete_shift(&self, id: Uuid) -> ApiResult<()> {
            if self.fail_mutations.load(Ordering::SeqCst) {
                return Err(ApiError::Server {
                    status: 500,
                    message: "boom".to_string(),
                });
            }
            self.shifts.write().await.remove(&id);
            Ok(())
        }

        async fn cancel_shift(&self, id: Uuid) -> ApiResult<Shift> {
            if self.fail_mutations.load(Ordering::SeqCst) {
                return Err(ApiError::Server {
                    status: 500,
                    message: "boom".to_string(),
                });
            }
            let mut shifts = self.shifts.write().await;
            let shift = shifts.get_mut(&id).ok_or_else(|| ApiError::NotFound {
                resource: id.to_string(),
            })?;
            // Server-side side effects a plain patch would miss.
            shift.cancelled = true;
            shift.staff.push(rostersync_core::roster::ShiftAssignment::new(
                Uuid::new_v4(),
                ShiftRole::Cover,
            ));
            Ok(shift.clone())
        }

        async fn add_instruction(&self, id: Uuid, text: &str) -> ApiResult<Shift> {
            let mut shifts = self.shifts.write().await;
            let shift = shifts.get_mut(&id).ok_or_else(|| ApiError::NotFound {
                resource: id.to_string(),
            })?;
            shift.instructions.push(text.to_string());
            Ok(shift.clone())
        }

        async fn add_message(&self, id: Uuid, text: &str) -> ApiResult<Shift> {
            let mut shifts = self.shifts.write().await;
            let shift = shifts.get_mut(&id).ok_or_else(|| ApiError::NotFound {
                resource: id.to_string(),
            })?;
            shift.messages.push(text.to_string());
            Ok(shift.clone())
        }
    }

    #[async_trait]
    impl ReferenceApi for MockApi {
        async fn list_clients(&self) -> ApiResult<Vec<Client>> {
            self.reference_calls.fetch_add(1, Ordering::SeqCst);
            Ok(vec![Client::new("Acme Care")])
        }

        async fn list_locations(&self) -> ApiResult<Vec<Location>> {
            self.reference_calls.fetch_add(1, Ordering::SeqCst);
            Ok(vec![Location::new("North Wing")])
        }

        async fn list_teams(&self) -> ApiResult<Vec<Team>> {
            self.reference_calls.fetch_add(1, Ordering::SeqCst);
            Ok(vec![Team::new("Night team")])
        }

        async fn list_staff(&self) -> ApiResult<Vec<StaffMember>> {
            self.reference_calls.fetch_add(1, Ordering::SeqCst);
            Ok(vec![StaffMember::new("Sam Doe", "sam@example.com")])
        }
    }

    // Mock KV cache
    struct MockKv {
        store: TokioRwLock<HashMap<String, Vec<u8>>>,
    }

    impl MockKv {
        fn new() -> Self {
            Self {
                store: TokioRwLock::new(HashMap::new()),
            }
        }
    }

    #[async_trait]
    impl Cache for MockKv {
        async fn get(&self, key: &str) -> CacheResult<Option<Vec<u8>>> {
            Ok(self.store.read().await.get(key).cloned())
        }

        async fn set(&self, key: &str, value: &[u8], _ttl: Option<Duration>) -> CacheResult<()> {
            self.store
                .write()
                .await
                .insert(key.to_string(), value.to_vec());
            Ok(())
        }

        async fn delete(&self, key: &str) -> CacheResult<()> {
            self.store.write().await.remove(key);
            Ok(())
        }

        async fn delete_pattern(&self, pattern: &str) -> CacheResult<()> {
            let mut store = self.store.write().await;
            let keys: Vec<String> = store
                .keys()
                .filter(|k| rostersync_core::cache::pattern_matches(pattern, k))
                .cloned()
                .collect();
            for key in keys {
                store.remove(&key);
            }
            Ok(())
        }
    }

    fn date(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, m, d).unwrap()
    }

    fn shift_on(m: u32, d: u32, title: &str) -> Shift {
        let start = Utc.with_ymd_and_hms(2024, m, d, 9, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, m, d, 17, 0, 0).unwrap();
        Shift::new(title, start, end)
    }

    fn coordinator(api: Arc<MockApi>) -> RosterCoordinator<MockApi, MockKv> {
        coordinator_with_ttl(api, Duration::from_secs(60))
    }

    fn coordinator_with_ttl(
        api: Arc<MockApi>,
        ttl: Duration,
    ) -> RosterCoordinator<MockApi, MockKv> {
        RosterCoordinator::with_settings(
            api,
            CacheService::disabled(Duration::from_secs(60)),
            ttl,
            3,
            Duration::from_millis(20),
        )
    }

    #[tokio::test]
    async fn test_load_range_fetches_and_merges() {
        let api = Arc::new(MockApi::new());
        api.insert(shift_on(6, 15, "Day shift")).await;
        let coordinator = coordinator(api.clone());

        coordinator.load_range(date(6, 1), date(6, 30), true).await;

        assert_eq!(api.list_calls(), 1);
        assert_eq!(coordinator.shifts().len(), 1);
        assert!(coordinator.last_error().is_none());
    }

    #[tokio::test]
    async fn test_repeat_load_within_ttl_hits_cache() {
        let api = Arc::new(MockApi::new());
        api.insert(shift_on(6, 15, "Day shift")).await;
        let coordinator = coordinator(api.clone());

        coordinator.load_range(date(6, 1), date(6, 30), true).await;
        coordinator.load_range(date(6, 1), date(6, 30), true).await;

        assert_eq!(api.list_calls(), 1);
        assert_eq!(coordinator.shifts().len(), 1);
    }

    #[tokio::test]
    async fn test_load_after_ttl_expiry_refetches_once() {
        let api = Arc::new(MockApi::new());
        let coordinator = coordinator_with_ttl(api.clone(), Duration::from_millis(60));

        coordinator.load_range(date(6, 1), date(6, 30), true).await;
        assert_eq!(api.list_calls(), 1);

        // Still within the TTL window.
        tokio::time::sleep(Duration::from_millis(30)).await;
        coordinator.load_range(date(6, 1), date(6, 30), true).await;
        assert_eq!(api.list_calls(), 1);

        // Past the TTL window.
        tokio::time::sleep(Duration::from_millis(40)).await;
        coordinator.load_range(date(6, 1), date(6, 30), true).await;
        assert_eq!(api.list_calls(), 2);
    }

    #[tokio::test]
    async fn test_non_exact_load_pads_query_range() {
        let api = Arc::new(MockApi::new());
        let coordinator = coordinator(api.clone());

        coordinator
            .load_range(date(6, 10), date(6, 16), false)
            .await;

        let (range, include_relations) = api.last_query().unwrap();
        assert_eq!(range.start, date(6, 7));
        assert_eq!(range.end, date(6, 19));
        assert!(include_relations);
    }

    #[tokio::test]
    async fn test_exact_load_skips_padding() {
        let api = Arc::new(MockApi::new());
        let coordinator = coordinator(api.clone());

        coordinator.load_range(date(6, 10), date(6, 16), true).await;

        let (range, _) = api.last_query().unwrap();
        assert_eq!(range.start, date(6, 10));
        assert_eq!(range.end, date(6, 16));
    }

    #[tokio::test]
    async fn test_overlapping_ranges_never_duplicate_shifts() {
        let api = Arc::new(MockApi::new());
        api.insert(shift_on(6, 30, "Month boundary")).await;
        let coordinator = coordinator(api.clone());

        coordinator.load_range(date(6, 1), date(6, 30), true).await;
        coordinator.load_range(date(6, 25), date(7, 5), true).await;

        assert_eq!(api.list_calls(), 2);
        assert_eq!(coordinator.shifts().len(), 1);
    }

    #[tokio::test]
    async fn test_concurrent_same_range_issues_one_fetch() {
        let api = Arc::new(MockApi::new());
        let gate = Arc::new(Notify::new());
        api.set_gate(gate.clone());
        let coordinator = Arc::new(coordinator(api.clone()));

        let background = {
            let coordinator = Arc::clone(&coordinator);
            tokio::spawn(async move {
                coordinator.load_range(date(6, 1), date(6, 30), true).await;
            })
        };

        // Let the first load reach the gate inside the API call.
        tokio::time::sleep(Duration::from_millis(10)).await;

        // Same range while in flight: skipped, not queued.
        coordinator.load_range(date(6, 1), date(6, 30), true).await;

        gate.notify_one();
        background.await.unwrap();

        assert_eq!(api.list_calls(), 1);
    }

    #[tokio::test]
    async fn test_failed_load_records_error_and_allows_retry() {
        let api = Arc::new(MockApi::new());
        api.fail_list.store(true, Ordering::SeqCst);
        let coordinator = coordinator(api.clone());

        coordinator.load_range(date(6, 1), date(6, 30), true).await;

        assert_eq!(api.list_calls(), 1);
        assert!(matches!(
            coordinator.last_error(),
            Some(CoordinatorError::Api(ApiError::Request(_)))
        ));

        // The in-flight marker was cleared, so the retry goes out and a
        // success clears the error state.
        api.fail_list.store(false, Ordering::SeqCst);
        coordinator.load_range(date(6, 1), date(6, 30), true).await;

        assert_eq!(api.list_calls(), 2);
        assert!(coordinator.last_error().is_none());
    }

    #[tokio::test]
    async fn test_inverted_range_records_error_without_network() {
        let api = Arc::new(MockApi::new());
        let coordinator = coordinator(api.clone());

        coordinator.load_range(date(6, 30), date(6, 1), true).await;

        assert_eq!(api.list_calls(), 0);
        assert!(matches!(
            coordinator.last_error(),
            Some(CoordinatorError::Range(_))
        ));
    }

    #[tokio::test]
    async fn test_create_invalidates_covering_range() {
        let api = Arc::new(MockApi::new());
        let coordinator = coordinator(api.clone());

        coordinator.load_range(date(6, 1), date(6, 30), true).await;
        assert_eq!(api.list_calls(), 1);

        let req = CreateShiftRequest::new(
            "New shift",
            Utc.with_ymd_and_hms(2024, 6, 15, 9, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2024, 6, 15, 17, 0, 0).unwrap(),
        );
        let created = coordinator.create_shift(&req).await.unwrap();
        assert_eq!(coordinator.shift(created.id).unwrap().title, "New shift");

        // The June entry was invalidated, so this goes to the network.
        coordinator.load_range(date(6, 1), date(6, 30), true).await;
        assert_eq!(api.list_calls(), 2);
    }

    #[tokio::test]
    async fn test_create_outside_range_keeps_cache_warm() {
        let api = Arc::new(MockApi::new());
        let coordinator = coordinator(api.clone());

        coordinator.load_range(date(6, 1), date(6, 30), true).await;

        let req = CreateShiftRequest::new(
            "July shift",
            Utc.with_ymd_and_hms(2024, 7, 10, 9, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2024, 7, 10, 17, 0, 0).unwrap(),
        );
        coordinator.create_shift(&req).await.unwrap();

        coordinator.load_range(date(6, 1), date(6, 30), true).await;
        assert_eq!(api.list_calls(), 1);
    }

    #[tokio::test]
    async fn test_create_inside_buffer_invalidates_padded_entry() {
        let api = Arc::new(MockApi::new());
        let coordinator = coordinator(api.clone());

        // Requested June 10-16, fetched June 7-19 because of the pad.
        coordinator
            .load_range(date(6, 10), date(6, 16), false)
            .await;
        assert_eq!(api.list_calls(), 1);

        // June 18 is outside the requested window but inside the fetched one.
        let req = CreateShiftRequest::new(
            "Pad shift",
            Utc.with_ymd_and_hms(2024, 6, 18, 9, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2024, 6, 18, 17, 0, 0).unwrap(),
        );
        coordinator.create_shift(&req).await.unwrap();

        coordinator
            .load_range(date(6, 10), date(6, 16), false)
            .await;
        assert_eq!(api.list_calls(), 2);
    }

    #[tokio::test]
    async fn test_update_invalidates_entire_cache() {
        let api = Arc::new(MockApi::new());
        let shift = shift_on(6, 15, "Original");
        let id = shift.id;
        api.insert(shift).await;
        let coordinator = coordinator(api.clone());

        coordinator.load_range(date(6, 1), date(6, 30), true).await;
        coordinator.load_range(date(7, 1), date(7, 31), true).await;
        assert_eq!(api.list_calls(), 2);

        let req = UpdateShiftRequest {
            title: Some("Renamed".to_string()),
            ..Default::default()
        };
        coordinator.update_shift(id, &req).await.unwrap();
        assert_eq!(coordinator.shift(id).unwrap().title, "Renamed");

        // Every previously cached range refetches.
        coordinator.load_range(date(6, 1), date(6, 30), true).await;
        coordinator.load_range(date(7, 1), date(7, 31), true).await;
        assert_eq!(api.list_calls(), 4);
    }

    #[tokio::test]
    async fn test_delete_removes_local_and_invalidates() {
        let api = Arc::new(MockApi::new());
        let shift = shift_on(6, 15, "Doomed");
        let id = shift.id;
        api.insert(shift).await;
        let coordinator = coordinator(api.clone());

        coordinator.load_range(date(6, 1), date(6, 30), true).await;
        assert_eq!(coordinator.shifts().len(), 1);

        coordinator.delete_shift(id).await.unwrap();
        assert!(coordinator.shift(id).is_none());

        coordinator.load_range(date(6, 1), date(6, 30), true).await;
        assert_eq!(api.list_calls(), 2);
        assert!(coordinator.shifts().is_empty());
    }

    #[tokio::test]
    async fn test_cancel_reloads_server_side_effects() {
        let api = Arc::new(MockApi::new());
        let shift = shift_on(6, 15, "To cancel");
        let id = shift.id;
        api.insert(shift).await;
        let coordinator = coordinator(api.clone());

        coordinator.load_reference_data().await.unwrap();
        coordinator.load_range(date(6, 1), date(6, 30), true).await;
        assert_eq!(api.reference_calls(), 4);
        assert_eq!(api.list_calls(), 1);

        coordinator.cancel_shift(id).await.unwrap();

        // Full reload: reference data and the current viewport refetched.
        assert_eq!(api.reference_calls(), 8);
        assert_eq!(api.list_calls(), 2);

        let local = coordinator.shift(id).unwrap();
        assert!(local.cancelled);
        assert!(local.has_role(ShiftRole::Cover));
    }

    #[tokio::test]
    async fn test_failed_mutation_leaves_state_untouched() {
        let api = Arc::new(MockApi::new());
        let coordinator = coordinator(api.clone());

        coordinator.load_range(date(6, 1), date(6, 30), true).await;
        assert_eq!(api.list_calls(), 1);

        api.fail_mutations.store(true, Ordering::SeqCst);
        let req = CreateShiftRequest::new(
            "Rejected",
            Utc.with_ymd_and_hms(2024, 6, 15, 9, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2024, 6, 15, 17, 0, 0).unwrap(),
        );
        let err = coordinator.create_shift(&req).await.unwrap_err();
        assert!(matches!(
            err,
            CoordinatorError::Api(ApiError::Server { status: 500, .. })
        ));

        // No local record, and the cached range is still warm.
        assert!(coordinator.shifts().is_empty());
        coordinator.load_range(date(6, 1), date(6, 30), true).await;
        assert_eq!(api.list_calls(), 1);
    }

    #[tokio::test]
    async fn test_debounced_burst_loads_only_last_range() {
        let api = Arc::new(MockApi::new());
        let coordinator = Arc::new(coordinator(api.clone()));

        Arc::clone(&coordinator).load_range_debounced(date(6, 1), date(6, 30), true);
        Arc::clone(&coordinator).load_range_debounced(date(7, 1), date(7, 31), true);
        let last = Arc::clone(&coordinator).load_range_debounced(date(8, 1), date(8, 31), true);

        last.wait().await;
        // Give any (incorrectly) surviving earlier task time to fire.
        tokio::time::sleep(Duration::from_millis(40)).await;

        assert_eq!(api.list_calls(), 1);
        let (range, _) = api.last_query().unwrap();
        assert_eq!(range.start, date(8, 1));
        assert_eq!(range.end, date(8, 31));
    }

    #[tokio::test]
    async fn test_reference_data_flows_through_kv_cache() {
        let api = Arc::new(MockApi::new());
        let kv = CacheService::new(Arc::new(MockKv::new()), Duration::from_secs(60));
        let coordinator = RosterCoordinator::with_settings(
            api.clone(),
            kv,
            Duration::from_secs(60),
            3,
            Duration::from_millis(20),
        );

        coordinator.load_reference_data().await.unwrap();
        assert_eq!(api.reference_calls(), 4);
        assert_eq!(coordinator.clients().len(), 1);
        assert_eq!(coordinator.teams().len(), 1);

        // Second load is served from the KV cache.
        coordinator.load_reference_data().await.unwrap();
        assert_eq!(api.reference_calls(), 4);
    }

    #[tokio::test]
    async fn test_cancel_busts_kv_reference_cache() {
        let api = Arc::new(MockApi::new());
        let shift = shift_on(6, 15, "To cancel");
        let id = shift.id;
        api.insert(shift).await;

        let kv = CacheService::new(Arc::new(MockKv::new()), Duration::from_secs(60));
        let coordinator = RosterCoordinator::with_settings(
            api.clone(),
            kv,
            Duration::from_secs(60),
            3,
            Duration::from_millis(20),
        );

        coordinator.load_reference_data().await.unwrap();
        assert_eq!(api.reference_calls(), 4);

        // The reload inside cancel must not be served stale reference data.
        coordinator.cancel_shift(id).await.unwrap();
        assert_eq!(api.reference_calls(), 8);
    }

    #[tokio::test]
    async fn test_add_instruction_updates_local_record() {
        let api = Arc::new(MockApi::new());
        let shift = shift_on(6, 15, "With log");
        let id = shift.id;
        api.insert(shift).await;
        let coordinator = coordinator(api.clone());

        coordinator.load_range(date(6, 1), date(6, 30), true).await;
        coordinator
            .add_instruction(id, "Check in at the gate")
            .await
            .unwrap();
        coordinator.add_message(id, "Running late").await.unwrap();

        let local = coordinator.shift(id).unwrap();
        assert_eq!(local.instructions, vec!["Check in at the gate"]);
        assert_eq!(local.messages, vec!["Running late"]);
    }
}
