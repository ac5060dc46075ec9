//! Screenplay Rust
//!
//! Raíz del workspace: une el core (`screenplay-core`), la aplicación en
//! memoria (`screenplay-domain`) y su driver (`screenplay-adapters`):
//! - `scenario` abre un contexto aislado por escenario (App + Stage).
//! - `scripts` contiene los escenarios de referencia.
//! - `errors` define `ScenarioError`.

pub mod errors;
pub mod scenario;
pub mod scripts;

pub use errors::ScenarioError;
pub use scenario::Scenario;
