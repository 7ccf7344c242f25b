pub mod battery;
pub mod candidate;
pub mod comparator;
pub mod globals;
pub mod horizon;
pub mod model;
pub mod projector;
pub mod usage;
