pub mod registry;
pub mod state;
pub mod tab_bar;

pub use registry::TabId;
pub use state::TabState;
pub use tab_bar::{TabBar, TabPanel};
