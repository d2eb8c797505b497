pub mod dashboard_viewmodel;
pub mod role_content;

pub use dashboard_viewmodel::DashboardViewModel;
pub use role_content::features_for_role;
