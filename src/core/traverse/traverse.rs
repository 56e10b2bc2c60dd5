use crate::core::base::*;
use crate::core::error::*;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParamFlags {
    Differentiable,
    NonDifferentiable,
    Discontinuous,
}

/// Receives the externally visible parameters of an object.
pub trait TraversalCallback {
    fn put_parameter(&mut self, name: &str, value: &[Float], flags: ParamFlags);
}

/// New values for some of an object's parameters, keyed by name.
pub type ParameterUpdates = BTreeMap<String, Vec<Float>>;

pub trait Traversable {
    fn traverse(&self, callback: &mut dyn TraversalCallback);

    /// Applies `updates` as a unit. Implementations validate every value
    /// before touching their state; on error nothing has changed.
    fn parameters_changed(&mut self, updates: &ParameterUpdates) -> Result<(), SpectrumError>;
}
