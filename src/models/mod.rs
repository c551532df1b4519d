pub mod analysis;
pub mod metrics;
pub mod record;
pub mod turns;

pub use analysis::*;
pub use metrics::*;
pub use record::*;
pub use turns::*;
