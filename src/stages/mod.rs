pub mod extract;
pub mod insights;
pub mod metrics;

pub use extract::*;
pub use insights::*;
pub use metrics::*;
