mod model;

pub use model::SavedAnalysis;
