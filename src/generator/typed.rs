//! Generators of typed identifiers

use std::marker::PhantomData;

use super::time::{MonotonicClock, TickSource};
use super::IdGenerator;
use crate::config::EzIdConfig;
use crate::error::EzIdError;
use crate::id::{EzId, Identifier};

impl<T: TickSource> IdGenerator<T> {
    /// Generate the next id wrapped with its rendered text
    pub fn next_ez_id(&self) -> Result<EzId, EzIdError> {
        self.next_id().map(EzId::new)
    }

    /// Generate the next id as an identifier variant
    pub fn next_as<I: Identifier>(&self) -> Result<I, EzIdError> {
        I::from_raw(self.next_id()?)
    }
}

/// Generator bound to one identifier variant, e.g. `EzIdGenerator<OrderId>`
#[derive(Debug)]
pub struct EzIdGenerator<I, T = MonotonicClock> {
    inner: IdGenerator<T>,
    _variant: PhantomData<fn() -> I>,
}

impl<I: Identifier> EzIdGenerator<I, MonotonicClock> {
    pub fn new(generator_id: i64) -> Result<Self, EzIdError> {
        IdGenerator::new(generator_id).map(Self::from_generator)
    }

    pub fn with_config(generator_id: i64, config: EzIdConfig) -> Result<Self, EzIdError> {
        IdGenerator::with_config(generator_id, config).map(Self::from_generator)
    }
}

impl<I: Identifier, T: TickSource> EzIdGenerator<I, T> {
    pub fn from_generator(inner: IdGenerator<T>) -> Self {
        Self {
            inner,
            _variant: PhantomData,
        }
    }

    /// Generate the next identifier of variant `I`
    pub fn next_id(&self) -> Result<I, EzIdError> {
        self.inner.next_as()
    }

    pub fn generator(&self) -> &IdGenerator<T> {
        &self.inner
    }

    pub fn into_inner(self) -> IdGenerator<T> {
        self.inner
    }
}
