//! Contexto de un escenario.
//!
//! Cada escenario crea su propia `App`, su driver y su `Stage`; nada se
//! comparte entre escenarios. Se construye antes del primer step y se
//! descarta al terminar.

use std::cell::RefCell;
use std::rc::Rc;

use chrono::{DateTime, Utc};
use log::info;
use screenplay_adapters::AppDriver;
use screenplay_core::{config, Actor, Cast, Persona, SharedDriver, Stage};
use screenplay_domain::App;
use uuid::Uuid;

use crate::errors::ScenarioError;

pub struct Scenario {
    id: Uuid,
    title: String,
    started_at: DateTime<Utc>,
    driver: Rc<RefCell<AppDriver>>,
    stage: Stage,
}

impl Scenario {
    /// Abre un escenario con el cast de la configuración del proceso.
    pub fn begin(title: impl Into<String>) -> Result<Self, ScenarioError> {
        let cast = Cast::from_config(config::global()?);
        Ok(Self::with_cast(title, cast))
    }

    pub fn with_cast(title: impl Into<String>, cast: Cast) -> Self {
        let driver = Rc::new(RefCell::new(AppDriver::new()));
        let shared: SharedDriver = driver.clone();
        let scenario = Self { id: Uuid::new_v4(),
                              title: title.into(),
                              started_at: Utc::now(),
                              driver,
                              stage: Stage::new(shared, cast) };
        info!("scenario {} '{}' begins", scenario.id, scenario.title);
        scenario
    }

    /// Actor mencionado en el texto del step (cacheado por escenario).
    pub fn actor_called(&mut self, name: &str) -> Result<Actor, ScenarioError> {
        Ok(self.stage.actor_called(name)?)
    }

    pub fn actor(&mut self, persona: Persona) -> Result<Actor, ScenarioError> {
        Ok(self.stage.actor(persona)?)
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    /// Copia del estado de la aplicación (para diagnósticos).
    pub fn app_snapshot(&self) -> App {
        self.driver.borrow().app().clone()
    }
}
