pub mod filter;
pub mod guest_count;
pub mod tags;

pub use filter::{HallSearchFilter, Page, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
pub use guest_count::GuestCountRange;
