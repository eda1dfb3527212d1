mod movie;
mod trend;

pub use movie::{
    CAST_DISPLAY_LIMIT, CastMember, Company, Genre, MovieDetail, MovieSummary, UNAVAILABLE,
    rating_label, year_label,
};
pub use trend::TrendRecord;
