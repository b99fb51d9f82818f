//! Value normalization used by the derivation rules.

pub mod numeric;
pub mod rounding;
