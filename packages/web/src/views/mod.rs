mod login;
pub use login::Login;

mod admin;
pub use admin::Admin;

mod portal;
pub use portal::{Agent, Customer};
