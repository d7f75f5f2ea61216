pub mod classifier;
pub mod code;
pub mod service;

pub use classifier::SectorClassifier;
pub use code::CodeInput;
pub use service::SicLookup;
