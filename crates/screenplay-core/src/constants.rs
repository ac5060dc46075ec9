//! Constantes del core.
//!
//! Nombres de variables de entorno y valores por defecto que lee
//! `ScreenplayConfig`.

/// Lista de personas (separadas por coma) que pueden subir al escenario.
pub const ENV_CAST: &str = "SCREENPLAY_CAST";

/// Si es `false`, cualquier persona conocida puede actuar aunque no esté
/// listada en `SCREENPLAY_CAST`.
pub const ENV_STRICT_CAST: &str = "SCREENPLAY_STRICT_CAST";

pub const DEFAULT_CAST: &str = "Sue,Tanya,Bob";
