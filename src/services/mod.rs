pub mod auth_service;
pub mod dashboard_service;
pub mod error;
pub mod session_store;

pub use auth_service::{fetch_current_user, login};
pub use dashboard_service::{load_dashboard, DashboardData};
pub use error::ApiError;
