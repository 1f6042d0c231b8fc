pub mod session;

pub use session::WebDriverSession;
