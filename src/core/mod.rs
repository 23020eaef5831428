// Core algorithm exports
pub mod contract;
pub mod distance;
pub mod engine;
pub mod experience;
pub mod explain;
pub mod location;
pub mod remote;
pub mod salary;
pub mod skills;

pub use distance::{coordinates_match, haversine_distance};
pub use engine::{EngineError, MatchConfig, MatchingEngine, DEFAULT_TOP_MATCHES_LIMIT};
pub use skills::normalize_skill_name;
