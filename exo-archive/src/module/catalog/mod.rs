//! In-memory catalog views: filtering, pagination and chart statistics

pub mod filter;
pub mod pagination;
pub mod stats;
pub mod store;

pub use filter::filter_exoplanets;
pub use pagination::{paginate, visible_pages, Page, PageMarker, DEFAULT_PER_PAGE};
pub use stats::{
    mission_distribution, scatter_points, status_distribution, year_distribution, ScatterPoint,
    StatusCounts,
};
pub use store::CatalogStore;
