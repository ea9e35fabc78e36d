//! Navigation - tab bar route resolution.

mod tab_bar;

pub use tab_bar::{resolve_active, Tab};
