pub mod app;
pub mod dashboard;
pub mod login_form;
pub mod stat_card;
pub mod top_bar;

pub use app::App;
pub use dashboard::Dashboard;
pub use login_form::LoginForm;
pub use stat_card::StatCard;
pub use top_bar::TopBar;
