pub mod bypass;

pub use bypass::BypassClassifier;
