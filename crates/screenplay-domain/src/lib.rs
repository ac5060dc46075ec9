// screenplay-domain library entry point
pub mod account;
pub mod app;
pub mod error;
pub mod project;
pub mod session;
pub use account::Account;
pub use app::App;
pub use error::DomainError;
pub use project::Project;
pub use session::Session;
