//! Chart service: a lunar calendar plus a result cache.

use std::sync::Arc;

use tracing::{debug, info};
use ziwei_engine::{Chart, ChartView, Selection, assemble, view};
use ziwei_time::{BirthRecord, LunarCalendar, TableCalendar};

use crate::cache::{CacheStats, ChartKey, ResultCache};
use crate::config::ServiceConfig;
use crate::error::ZiweiError;

/// Thread-safe entry point for chart requests.
///
/// Natal views are cached once per birth record; overlay selections are
/// derived from the cached natal chart and cached under their own key.
pub struct ChartService {
    calendar: Arc<dyn LunarCalendar>,
    cache: ResultCache,
}

impl std::fmt::Debug for ChartService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChartService")
            .field("supported_years", &self.calendar.supported_years())
            .field("cache", &self.cache.stats())
            .finish()
    }
}

impl ChartService {
    /// Build from configuration, loading the configured lunar table.
    pub fn new(config: &ServiceConfig) -> Result<Self, ZiweiError> {
        config.validate()?;
        let calendar = match &config.calendar_table {
            Some(path) => TableCalendar::load(path)?,
            None => TableCalendar::bundled()?,
        };
        info!(
            years = calendar.len(),
            capacity = config.cache_capacity,
            "chart service ready"
        );
        Self::with_calendar(Arc::new(calendar), config.cache_capacity)
    }

    /// Build around any calendar implementation.
    pub fn with_calendar(
        calendar: Arc<dyn LunarCalendar>,
        cache_capacity: usize,
    ) -> Result<Self, ZiweiError> {
        Ok(Self {
            calendar,
            cache: ResultCache::new(cache_capacity)?,
        })
    }

    pub fn calendar(&self) -> &dyn LunarCalendar {
        self.calendar.as_ref()
    }

    /// Natal chart for `record`.
    pub fn chart(&self, record: &BirthRecord) -> Result<Arc<Chart>, ZiweiError> {
        Ok(Arc::clone(&self.natal(record)?.chart))
    }

    /// Chart with the overlays named by `selection`.
    pub fn view(
        &self,
        record: &BirthRecord,
        selection: Selection,
    ) -> Result<Arc<ChartView>, ZiweiError> {
        let natal = self.natal(record)?;
        if selection.is_natal() {
            return Ok(natal);
        }
        let key = ChartKey::new(record, selection);
        self.cache.get_or_compute(key, || -> Result<ChartView, ZiweiError> {
            debug!(fingerprint = %key.fingerprint(), "deriving overlay");
            view(Arc::clone(&natal.chart), selection).map_err(ZiweiError::from)
        })
    }

    fn natal(&self, record: &BirthRecord) -> Result<Arc<ChartView>, ZiweiError> {
        let key = ChartKey::new(record, Selection::natal());
        self.cache.get_or_compute(key, || -> Result<ChartView, ZiweiError> {
            debug!(fingerprint = %key.fingerprint(), "assembling natal chart");
            let chart = assemble(record, self.calendar.as_ref())?;
            Ok(view(Arc::new(chart), Selection::natal())?)
        })
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    pub fn clear_cache(&self) {
        self.cache.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ziwei_time::Gender;

    fn service() -> ChartService {
        ChartService::new(&ServiceConfig::with_capacity(8)).unwrap()
    }

    fn golden() -> BirthRecord {
        BirthRecord::solar(1990, 5, 15, 7, Gender::Male)
    }

    #[test]
    fn service_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ChartService>();
    }

    #[test]
    fn second_request_hits() {
        let svc = service();
        let a = svc.chart(&golden()).unwrap();
        let b = svc.chart(&golden()).unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        let stats = svc.cache_stats();
        assert_eq!((stats.hits, stats.misses), (1, 1));
    }

    #[test]
    fn overlay_shares_natal_chart() {
        let svc = service();
        let natal = svc.chart(&golden()).unwrap();
        let v = svc
            .view(&golden(), Selection::natal().with_period(1).with_year(2024))
            .unwrap();
        assert!(Arc::ptr_eq(&natal, &v.chart));
        assert!(v.period.is_some());
        assert!(v.fleeting_year.is_some());
        assert_eq!(svc.cache_stats().len, 2);
    }

    #[test]
    fn invalid_record_not_cached() {
        let svc = service();
        let err = svc
            .chart(&BirthRecord::solar(1990, 13, 1, 7, Gender::Male))
            .unwrap_err();
        assert!(matches!(err, ZiweiError::Chart(e) if e.is_invalid_birth_data()));
        assert_eq!(svc.cache_stats().len, 0);
    }

    #[test]
    fn invalid_selection_surfaces() {
        let svc = service();
        let err = svc
            .view(&golden(), Selection::natal().with_year(1900))
            .unwrap_err();
        assert!(matches!(
            err,
            ZiweiError::Chart(ziwei_engine::ChartError::InvalidSelection(_))
        ));
        // The natal chart was still cached on the way.
        assert_eq!(svc.cache_stats().len, 1);
    }

    #[test]
    fn missing_table_file_fails() {
        let config = ServiceConfig {
            calendar_table: Some("/nonexistent/lunar.toml".into()),
            ..ServiceConfig::default()
        };
        assert!(matches!(
            ChartService::new(&config),
            Err(ZiweiError::Chart(ziwei_engine::ChartError::Calendar(_)))
        ));
    }
}
