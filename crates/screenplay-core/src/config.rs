//! Configuración del cast desde variables de entorno.
//!
//! Usa `SCREENPLAY_CAST` (lista separada por comas) y
//! `SCREENPLAY_STRICT_CAST`. El `.env` se carga una sola vez y de forma
//! perezosa.

use std::env;

use dotenvy::dotenv;
use once_cell::sync::Lazy;

use crate::cast::Persona;
use crate::constants::{DEFAULT_CAST, ENV_CAST, ENV_STRICT_CAST};
use crate::errors::{Result, ScreenplayError};

static DOTENV_LOADED: Lazy<()> = Lazy::new(|| {
    let _ = dotenv(); // ignora error si no existe .env
});

static CONFIG: Lazy<Result<ScreenplayConfig>> = Lazy::new(ScreenplayConfig::from_env);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenplayConfig {
    /// Personas que pueden actuar, en el orden declarado.
    pub cast: Vec<Persona>,
    pub strict_cast: bool,
}

impl ScreenplayConfig {
    pub fn from_env() -> Result<Self> {
        Lazy::force(&DOTENV_LOADED);
        let cast = env::var(ENV_CAST).ok();
        let strict = env::var(ENV_STRICT_CAST).ok();
        Self::from_vars(cast.as_deref(), strict.as_deref())
    }

    /// Igual que `from_env` pero con los valores ya leídos (útil en tests).
    pub fn from_vars(cast: Option<&str>, strict_cast: Option<&str>) -> Result<Self> {
        let cast = parse_cast(cast.unwrap_or(DEFAULT_CAST))?;
        let strict_cast = match strict_cast {
            None => true,
            Some(raw) => parse_bool(ENV_STRICT_CAST, raw)?,
        };
        Ok(Self { cast, strict_cast })
    }
}

impl Default for ScreenplayConfig {
    fn default() -> Self {
        Self { cast: Persona::ALL.to_vec(),
               strict_cast: true }
    }
}

/// Configuración del proceso, evaluada una sola vez.
pub fn global() -> Result<&'static ScreenplayConfig> {
    (*CONFIG).as_ref().map_err(Clone::clone)
}

/// Forzar carga temprana de .env desde binarios si se desea.
pub fn init_dotenv() {
    Lazy::force(&DOTENV_LOADED);
}

fn parse_cast(raw: &str) -> Result<Vec<Persona>> {
    let mut cast = Vec::new();
    for name in raw.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        let persona = name.parse::<Persona>()
                          .map_err(|_| ScreenplayError::Config(format!("{ENV_CAST}: unknown persona '{name}'")))?;
        if !cast.contains(&persona) {
            cast.push(persona);
        }
    }
    if cast.is_empty() {
        return Err(ScreenplayError::Config(format!("{ENV_CAST} lists no personas")));
    }
    Ok(cast)
}

fn parse_bool(var: &str, raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(ScreenplayError::Config(format!("{var}: expected a boolean, got '{other}'"))),
    }
}
