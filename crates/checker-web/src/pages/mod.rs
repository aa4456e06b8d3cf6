//! Page Components

mod checker;
mod home;
mod legal;

pub use checker::CheckerPage;
pub use home::HomePage;
pub use legal::LegalPage;
