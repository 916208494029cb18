pub mod types;

pub use types::{
    mission, Exoplanet, ExoplanetStatus, FilterCriteria, MissionFilter, RawRecord, SortKey,
    StatusFilter,
};
