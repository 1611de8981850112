//! Server-side time-range resolution for a query.
//!
//! One resolution POSTs the query text and the requested window to
//! `{server}/select/logsql/query_time_range`, validates the reply, and
//! re-anchors the returned range onto a canonical snap boundary so the
//! displayed duration always matches the picker's discrete options.
//!
//! Only the most recently started resolution may touch observable state: a
//! generation counter tags every call and a stale settlement is dropped
//! without any state write, whatever order the network delivers results in.

use std::sync::atomic::{AtomicU64, Ordering};

use reqwest::Client;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error};
use url::Url;

use crate::errors::{AppError, AppResult};
use crate::models::tenant::TenantId;
use crate::models::time::{ResolvedPeriod, ServerTimeRange, TimePeriod, parse_instant};
use crate::utils::time::{duration_from_period, period_for_duration};

pub const QUERY_TIME_RANGE_PATH: &str = "/select/logsql/query_time_range";

pub struct TimeRangeResolver {
    http: Client,
    endpoint: String,
    tenant: TenantId,
    default_query: String,
    generation: AtomicU64,
    loading: watch::Sender<bool>,
    server_period: watch::Sender<Option<ResolvedPeriod>>,
    error: watch::Sender<Option<String>>,
}

impl TimeRangeResolver {
    pub fn new(
        server_url: &str,
        tenant: TenantId,
        default_query: impl Into<String>,
    ) -> AppResult<Self> {
        let base = Url::parse(server_url)
            .map_err(|e| AppError::InvalidUrl(format!("{server_url}: {e}")))?;
        let endpoint = format!(
            "{}{}",
            base.as_str().trim_end_matches('/'),
            QUERY_TIME_RANGE_PATH
        );
        let (loading, _) = watch::channel(false);
        let (server_period, _) = watch::channel(None);
        let (error, _) = watch::channel(None);
        Ok(Self {
            http: Client::new(),
            endpoint,
            tenant,
            default_query: default_query.into(),
            generation: AtomicU64::new(0),
            loading,
            server_period,
            error,
        })
    }

    /// True for the lifetime of the current in-flight request.
    pub fn loading(&self) -> bool {
        *self.loading.borrow()
    }

    pub fn subscribe_loading(&self) -> watch::Receiver<bool> {
        self.loading.subscribe()
    }

    /// The last applied resolution, if any.
    pub fn server_period(&self) -> Option<ResolvedPeriod> {
        *self.server_period.borrow()
    }

    pub fn subscribe_period(&self) -> watch::Receiver<Option<ResolvedPeriod>> {
        self.server_period.subscribe()
    }

    /// Rendered text of the last resolution failure, cleared on each call.
    pub fn last_error(&self) -> Option<String> {
        self.error.borrow().clone()
    }

    /// Resolve the effective time range for `(query, period)`.
    ///
    /// Issues exactly one request. Returns `Ok(None)` when the call was
    /// cancelled or superseded by a newer one; both leave no error behind.
    /// An empty query falls back to the configured default query. The
    /// caller is responsible for `period.start <= period.end`.
    pub async fn resolve(
        &self,
        query: &str,
        period: TimePeriod,
        cancel: &CancellationToken,
    ) -> AppResult<Option<ResolvedPeriod>> {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        let query = if query.is_empty() {
            self.default_query.as_str()
        } else {
            query
        };
        let form = [
            ("query", query.to_string()),
            ("start", period.start.timestamp().to_string()),
            ("end", period.end.timestamp().to_string()),
        ];

        self.server_period.send_replace(None);
        self.error.send_replace(None);
        self.loading.send_replace(true);

        let mut request = self.http.post(&self.endpoint).form(&form);
        for (name, value) in self.tenant.headers() {
            request = request.header(name, value);
        }

        debug!(query, endpoint = %self.endpoint, "resolving query time range");

        let outcome = tokio::select! {
            _ = cancel.cancelled() => {
                // Deliberate abort: clear loading, report nothing.
                if self.is_current(generation) {
                    self.loading.send_replace(false);
                }
                debug!(query, "time-range resolution cancelled");
                return Ok(None);
            }
            outcome = Self::fetch(request) => outcome,
        };

        self.settle(generation, outcome)
    }

    fn is_current(&self, generation: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == generation
    }

    async fn fetch(request: reqwest::RequestBuilder) -> AppResult<ResolvedPeriod> {
        let response = request
            .send()
            .await
            .map_err(|e| AppError::NetworkFailure(e.to_string()))?;
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| AppError::NetworkFailure(e.to_string()))?;

        if !status.is_success() || text.is_empty() {
            return Err(AppError::ServerRejected(text));
        }

        let range: ServerTimeRange = serde_json::from_str(&text)?;
        let Ok(start) = parse_instant(&range.start) else {
            return Err(AppError::InvalidDateRange);
        };
        let Ok(end) = parse_instant(&range.end) else {
            return Err(AppError::InvalidDateRange);
        };

        // Re-derive through a canonical duration anchored at the reply's own
        // end instant, not wall-clock now. The server may answer with an
        // arbitrary [start, end) pair.
        let raw = TimePeriod::new(start, end);
        let canonical = period_for_duration(duration_from_period(&raw), raw.end);
        Ok(ResolvedPeriod {
            start: canonical.start,
            end: canonical.end,
            has_time_filter: range.has_time_filter,
        })
    }

    fn settle(
        &self,
        generation: u64,
        outcome: AppResult<ResolvedPeriod>,
    ) -> AppResult<Option<ResolvedPeriod>> {
        if !self.is_current(generation) {
            // A newer resolution owns the observable state now.
            debug!(generation, "stale time-range resolution dropped");
            return Ok(None);
        }
        match outcome {
            Ok(resolved) => {
                self.server_period.send_replace(Some(resolved));
                self.loading.send_replace(false);
                Ok(Some(resolved))
            }
            Err(err) => {
                error!(error = %err, "time-range resolution failed");
                self.error.send_replace(Some(err.to_string()));
                self.loading.send_replace(false);
                Err(err)
            }
        }
    }
}
