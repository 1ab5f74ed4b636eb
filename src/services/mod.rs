pub mod items;
pub mod mlb;

pub use items::ItemStore;
pub use mlb::MlbService;
