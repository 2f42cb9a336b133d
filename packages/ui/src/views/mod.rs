mod modal_overlay;
pub use modal_overlay::ModalOverlay;

mod fields;
pub use fields::{GenderSelect, TextField};

mod login;
pub use login::LoginView;

pub mod admin;
pub use admin::AdminDashboard;
