/// Store modules that hold application state
/// Each store is responsible for a slice of the application state
pub mod app_logs_store;
pub mod form_store;
pub mod ui_store;

pub use app_logs_store::AppLogsStore;
pub use form_store::FormStore;
pub use ui_store::UIStore;
