use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::aggregate::{AggregatedSpan, Aggregator};
use crate::bound::Bound;
use crate::error::GraphError;
use crate::flatten::{FlatSpan, Flattener};
use crate::interval::{self, Interval};
use crate::value::Value;
use crate::view::{Normalizer, NumericSpan, PercentSpan};


/// Derived stages, filled on first request.
struct Cache<B, V> {
    flat: Option<Arc<Vec<FlatSpan<B>>>>,
    aggregated: Option<Arc<Vec<AggregatedSpan<B, V>>>>,
    view: Option<Arc<Vec<PercentSpan>>>,
}

impl<B, V> Cache<B, V> {
    fn empty() -> Self {
        Self {
            flat: None,
            aggregated: None,
            view: None,
        }
    }

    fn drop_view(&mut self) {
        self.view = None;
    }

    fn drop_aggregated(&mut self) {
        self.aggregated = None;
        self.drop_view();
    }

    fn drop_all(&mut self) {
        self.flat = None;
        self.drop_aggregated();
    }
}

impl<B, V> Clone for Cache<B, V> {
    fn clone(&self) -> Self {
        Self {
            flat: self.flat.clone(),
            aggregated: self.aggregated.clone(),
            view: self.view.clone(),
        }
    }
}

/// A set of intervals and the pipeline that renders it.
///
/// Each stage (flat spans, aggregated spans, percentage view) is computed on
/// first request and cached until something it depends on changes:
/// * replacing the intervals or the flattener drops every stage;
/// * replacing the aggregator keeps the flat spans;
/// * replacing the normalizer keeps the flat and aggregated spans.
///
/// The cache lock is held while a stage is computed, so a graph shared
/// between threads computes each stage once.
///
/// # Examples
///
/// ```
/// use intvg::graph::IntervalGraph;
/// use intvg::interval::Interval;
/// use intvg::view::PercentSpan;
///
/// let graph = IntervalGraph::new(vec![
///     Interval::valued(0, 2, 1),
///     Interval::valued(1, 3, 1),
/// ]);
///
/// let aggregated = graph.aggregated_spans().unwrap();
/// let values: Vec<_> = aggregated.iter().map(|s| s.value().copied()).collect();
/// assert_eq!(values, vec![Some(1), Some(2), Some(1)]);
///
/// let view = graph.view().unwrap();
/// match &view[1] {
///     PercentSpan::Span { start_pct, end_pct, .. } => {
///         assert_eq!((*start_pct, *end_pct), (33.33, 33.33));
///     }
///     PercentSpan::Discrete { .. } => unreachable!(),
/// }
/// ```
pub struct IntervalGraph<B, V> {
    intervals: Vec<Interval<B, V>>,
    flattener: Flattener<B>,
    aggregator: Aggregator<V>,
    normalizer: Normalizer<B, V>,
    cache: Mutex<Cache<B, V>>,
}

impl<B: Bound + 'static, V: Value + 'static> IntervalGraph<B, V> {
    /// Graph with the default pipeline for the bound and value types.
    pub fn new(intervals: Vec<Interval<B, V>>) -> Self {
        Self::with_pipeline(
            intervals,
            Flattener::new(),
            Aggregator::default(),
            Normalizer::default(),
        )
    }
}

impl<B, V> IntervalGraph<B, V> {
    pub fn with_pipeline(
        intervals: Vec<Interval<B, V>>,
        flattener: Flattener<B>,
        aggregator: Aggregator<V>,
        normalizer: Normalizer<B, V>,
    ) -> Self {
        Self {
            intervals,
            flattener,
            aggregator,
            normalizer,
            cache: Mutex::new(Cache::empty()),
        }
    }

    pub fn with_flattener(mut self, flattener: Flattener<B>) -> Self {
        self.set_flattener(flattener);
        self
    }

    pub fn with_aggregator(mut self, aggregator: Aggregator<V>) -> Self {
        self.set_aggregator(aggregator);
        self
    }

    pub fn with_normalizer(mut self, normalizer: Normalizer<B, V>) -> Self {
        self.set_normalizer(normalizer);
        self
    }

    pub fn intervals(&self) -> &[Interval<B, V>] {
        &self.intervals
    }

    pub fn flattener(&self) -> &Flattener<B> {
        &self.flattener
    }

    pub fn aggregator(&self) -> &Aggregator<V> {
        &self.aggregator
    }

    pub fn normalizer(&self) -> &Normalizer<B, V> {
        &self.normalizer
    }

    pub fn set_intervals(&mut self, intervals: Vec<Interval<B, V>>) {
        log::debug!("replacing {} intervals with {}", self.intervals.len(), intervals.len());
        self.intervals = intervals;
        self.cache_mut().drop_all();
    }

    pub fn set_flattener(&mut self, flattener: Flattener<B>) {
        self.flattener = flattener;
        self.cache_mut().drop_all();
    }

    pub fn set_aggregator(&mut self, aggregator: Aggregator<V>) {
        self.aggregator = aggregator;
        self.cache_mut().drop_aggregated();
    }

    pub fn set_normalizer(&mut self, normalizer: Normalizer<B, V>) {
        self.normalizer = normalizer;
        self.cache_mut().drop_view();
    }

    pub fn into_intervals(self) -> Vec<Interval<B, V>> {
        self.intervals
    }

    fn cache_mut(&mut self) -> &mut Cache<B, V> {
        self.cache.get_mut().unwrap_or_else(PoisonError::into_inner)
    }

    fn lock(&self) -> MutexGuard<'_, Cache<B, V>> {
        // Stages are only stored once fully computed, so a poisoned cache is
        // still consistent.
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<B: PartialOrd + Clone, V: Clone> IntervalGraph<B, V> {
    /// Checks that every bound and value converts to a finite number and
    /// that every interval's bounds are comparable.
    pub fn validate(&self) -> Result<(), GraphError> {
        interval::validate(&self.intervals, self.normalizer.conversions())
    }

    pub fn flat_spans(&self) -> Result<Arc<Vec<FlatSpan<B>>>, GraphError> {
        let mut cache = self.lock();
        self.flat_in(&mut cache)
    }

    pub fn aggregated_spans(&self) -> Result<Arc<Vec<AggregatedSpan<B, V>>>, GraphError> {
        let mut cache = self.lock();
        self.aggregated_in(&mut cache)
    }

    /// The percentage view: spans in order, then discrete points.
    pub fn view(&self) -> Result<Arc<Vec<PercentSpan>>, GraphError> {
        let mut cache = self.lock();
        if let Some(view) = &cache.view {
            return Ok(Arc::clone(view));
        }
        let aggregated = self.aggregated_in(&mut cache)?;
        let view = Arc::new(self.normalizer.create_view(&aggregated)?);
        cache.view = Some(Arc::clone(&view));
        Ok(view)
    }

    /// Aggregated spans on the numeric axis, shifted to start at zero.
    pub fn numeric_values(&self) -> Result<Vec<NumericSpan>, GraphError> {
        let aggregated = self.aggregated_spans()?;
        self.normalizer.numeric_values(&aggregated)
    }

    /// Restricts the intervals to `[lower, upper]`, optionally padding the
    /// axis out to the limits with valueless intervals.
    pub fn truncate(
        &mut self,
        lower: Option<&B>,
        upper: Option<&B>,
        padding: bool,
    ) -> Result<(), GraphError> {
        let truncated = interval::truncate(&self.intervals, lower, upper, padding)?;
        self.set_intervals(truncated);
        Ok(())
    }

    /// Merges touching intervals that carry the same value.
    pub fn join(&mut self) -> Result<(), GraphError>
    where
        V: PartialEq,
    {
        let joined = self.flattener.join(&self.intervals)?;
        self.set_intervals(joined);
        Ok(())
    }

    fn flat_in(&self, cache: &mut Cache<B, V>) -> Result<Arc<Vec<FlatSpan<B>>>, GraphError> {
        if let Some(flat) = &cache.flat {
            return Ok(Arc::clone(flat));
        }
        let flat = Arc::new(self.flattener.flatten(&self.intervals)?);
        cache.flat = Some(Arc::clone(&flat));
        Ok(flat)
    }

    fn aggregated_in(
        &self,
        cache: &mut Cache<B, V>,
    ) -> Result<Arc<Vec<AggregatedSpan<B, V>>>, GraphError> {
        if let Some(aggregated) = &cache.aggregated {
            return Ok(Arc::clone(aggregated));
        }
        let flat = self.flat_in(cache)?;
        let aggregated = Arc::new(self.aggregator.aggregate(&flat, &self.intervals));
        cache.aggregated = Some(Arc::clone(&aggregated));
        Ok(aggregated)
    }
}

impl<B: Clone, V: Clone> Clone for IntervalGraph<B, V> {
    fn clone(&self) -> Self {
        Self {
            intervals: self.intervals.clone(),
            flattener: self.flattener.clone(),
            aggregator: self.aggregator.clone(),
            normalizer: self.normalizer.clone(),
            cache: Mutex::new(self.lock().clone()),
        }
    }
}

impl<B: fmt::Debug, V: fmt::Debug> fmt::Debug for IntervalGraph<B, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntervalGraph")
            .field("intervals", &self.intervals)
            .field("flattener", &self.flattener)
            .field("aggregator", &self.aggregator)
            .field("normalizer", &self.normalizer)
            .finish_non_exhaustive()
    }
}
