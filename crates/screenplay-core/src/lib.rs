//! screenplay-core: actores, tareas, acciones y preguntas (patrón Screenplay)
//!
//! Los escenarios se expresan como actores que ejecutan pasos (`Action`,
//! `Task`) y responden preguntas (`Question`) comprobadas con matchers. Toda
//! interacción con la aplicación pasa por un `DomainDriver` inyectado en las
//! abilities del actor.
pub mod ability;
pub mod actor;
pub mod assertion;
pub mod cast;
pub mod config;
pub mod constants;
pub mod driver;
pub mod errors;
pub mod matchers;
pub mod performable;
pub mod question;
pub mod vocabulary;

pub use ability::Abilities;
pub use actor::{Actor, AttemptsTo};
pub use assertion::{assert_that, check_that, Check};
pub use cast::{Cast, Persona, Stage};
pub use config::ScreenplayConfig;
pub use driver::{share, DomainDriver, ProjectSummary, SharedDriver};
pub use errors::{DriverError, ScreenplayError};
pub use performable::{Action, Performable, Task};
pub use question::{observe, Observation, Question};
pub use vocabulary::{ActivateAccount, AuthenticationError, CreateAccount, CreateProject, IsAuthenticated, ProjectsVisible,
                     SignIn, SignUp};
