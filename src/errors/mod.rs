use screenplay_core::ScreenplayError;
use thiserror::Error;

/// Errores a nivel de escenario.
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error(transparent)]
    Screenplay(#[from] ScreenplayError),
    #[error("Escenario '{title}' falló: {source}")]
    Failed {
        title: String,
        #[source]
        source: ScreenplayError,
    },
}

impl ScenarioError {
    /// Error de screenplay subyacente, si lo hay.
    pub fn screenplay(&self) -> &ScreenplayError {
        match self {
            ScenarioError::Screenplay(e) => e,
            ScenarioError::Failed { source, .. } => source,
        }
    }
}
