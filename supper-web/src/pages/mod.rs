mod config_error;
mod main_page;
mod sign_in;

pub use config_error::ConfigErrorPage;
pub use main_page::MainPage;
pub use sign_in::SignInPage;
