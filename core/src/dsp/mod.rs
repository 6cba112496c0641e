pub mod frame;
pub mod spectrum;
pub mod stats;

pub use frame::feature_tensor;
pub use spectrum::SpectrumHelper;
pub use stats::StatsHelper;
