pub mod city;
pub mod feedback;

pub use city::{slugify, City, CityRecord};
pub use feedback::{
    Color, CountryFeedback, CountryMatch, EastWest, FeedbackResult, HemisphereFeedback,
    LatitudeFeedback, LongitudeFeedback, NorthSouth, PopulationFeedback, PopulationHint,
};
