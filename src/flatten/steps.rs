use std::fmt;
use std::ops::{Add, Sub};
use std::sync::Arc;

use chrono::TimeDelta;

pub type StepFn<B> = Arc<dyn Fn(&B) -> B + Send + Sync>;

/// Optional one-step moves for domains with a smallest increment.
///
/// Closed intervals over such a domain (days with second granularity,
/// integers) touch without overlapping when one ends one step before the next
/// begins. The flattener uses these moves to render that: each side is
/// independent, and a missing side disables its adjustment.
pub struct Steps<B> {
    increment: Option<StepFn<B>>,
    decrement: Option<StepFn<B>>,
}

impl<B> Steps<B> {
    /// No adjustment: continuous domain.
    pub fn none() -> Self {
        Self {
            increment: None,
            decrement: None,
        }
    }

    pub fn new(
        increment: impl Fn(&B) -> B + Send + Sync + 'static,
        decrement: impl Fn(&B) -> B + Send + Sync + 'static,
    ) -> Self {
        Self {
            increment: Some(Arc::new(increment)),
            decrement: Some(Arc::new(decrement)),
        }
    }

    /// Steps of a fixed `delta` in both directions.
    pub fn by<D>(delta: D) -> Self
    where
        B: Add<D, Output = B> + Sub<D, Output = B> + Clone + 'static,
        D: Clone + Send + Sync + 'static,
    {
        let down = delta.clone();
        Self::new(
            move |b: &B| b.clone() + delta.clone(),
            move |b: &B| b.clone() - down.clone(),
        )
    }

    /// One-second steps for date-time bounds.
    pub fn one_second() -> Self
    where
        B: Add<TimeDelta, Output = B> + Sub<TimeDelta, Output = B> + Clone + 'static,
    {
        Self::by(TimeDelta::seconds(1))
    }

    pub fn with_increment(mut self, f: impl Fn(&B) -> B + Send + Sync + 'static) -> Self {
        self.increment = Some(Arc::new(f));
        self
    }

    pub fn with_decrement(mut self, f: impl Fn(&B) -> B + Send + Sync + 'static) -> Self {
        self.decrement = Some(Arc::new(f));
        self
    }

    /// The bound one step up, if incrementing is configured.
    pub fn increment(&self, bound: &B) -> Option<B> {
        self.increment.as_ref().map(|f| f(bound))
    }

    /// The bound one step down, if decrementing is configured.
    pub fn decrement(&self, bound: &B) -> Option<B> {
        self.decrement.as_ref().map(|f| f(bound))
    }

    pub fn is_none(&self) -> bool {
        self.increment.is_none() && self.decrement.is_none()
    }
}

impl<B> Default for Steps<B> {
    fn default() -> Self {
        Self::none()
    }
}

impl<B> Clone for Steps<B> {
    fn clone(&self) -> Self {
        Self {
            increment: self.increment.clone(),
            decrement: self.decrement.clone(),
        }
    }
}

impl<B> fmt::Debug for Steps<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Steps")
            .field("increment", &self.increment.is_some())
            .field("decrement", &self.decrement.is_some())
            .finish()
    }
}
