pub mod status_banner;
pub mod ui;

pub use status_banner::StatusBanner;
