pub mod auth;
pub mod sales;
pub mod user;

pub use auth::TokenResponse;
pub use sales::{Customer, Report, Target};
pub use user::{Role, User};
