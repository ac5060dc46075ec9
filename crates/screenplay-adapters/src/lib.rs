//! screenplay-adapters: capa de adaptación Dominio ↔ Core
//!
//! Este crate provee:
//! - `AppDriver`: implementación de `DomainDriver` sobre la `App` en memoria.
//! - Traducción de `DomainError` a `DriverError`.
//!
//! El core sólo conoce el trait `DomainDriver` y `ProjectSummary`; aquí se
//! decide cómo se proyectan cuentas, sesiones y proyectos del dominio.

pub mod driver;
pub mod errors;

pub use driver::AppDriver;
