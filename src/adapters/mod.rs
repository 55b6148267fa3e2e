// Adapters layer: concrete implementations for external systems (http source, presentation surface, storage).

pub mod http;
pub mod storage;
pub mod surface;
