mod backend;
mod bits;
pub mod errors;
pub mod random;

pub use backend::{QuantumBackend, StateVectorBackend};
pub use bits::{Basis, FiltrationTable, PolarizationTable};
