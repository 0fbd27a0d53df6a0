pub mod ai_review;
pub mod hall;
pub mod listing;
pub mod listing_image;
pub mod score;
pub mod venue;

pub use ai_review::Entity as AiReview;
pub use hall::Entity as Hall;
pub use listing::Entity as Listing;
pub use listing_image::Entity as ListingImage;
pub use score::Entity as Score;
pub use venue::Entity as Venue;
