/// UI module - panels and rendering components
pub mod form_panel;
pub mod layout;
pub mod logs_panel;

pub use form_panel::{FieldAreas, FormPanel};
pub use layout::render_layout;
pub use logs_panel::LogsPanel;
