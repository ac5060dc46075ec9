//! Escenarios de extremo a extremo: core + App en memoria + AppDriver.

use screenplay_core::matchers::{is, is_empty, matches_pattern};
use screenplay_core::{check_that, ActivateAccount, AuthenticationError, Cast, CreateAccount, IsAuthenticated, Persona,
                      ScreenplayError, SignUp};
use screenplay_rust::scripts::{self, ALL};
use screenplay_rust::{Scenario, ScenarioError};

fn fresh(title: &str) -> Scenario {
    Scenario::with_cast(title, Cast::everyone())
}

#[test]
fn every_reference_script_passes() {
    for (title, script) in ALL {
        let mut scenario = fresh(title);
        if let Err(e) = scripts::play(&mut scenario, *script) {
            panic!("{e}");
        }
    }
}

#[test]
fn sue_is_authenticated_after_activation() {
    let mut scenario = fresh("sue");
    scripts::sue_signs_in_after_activation(&mut scenario).unwrap();
    let app = scenario.app_snapshot();
    assert!(app.account("Sue").unwrap().is_activated());
    assert!(app.session("Sue").unwrap().is_authenticated());
}

#[test]
fn tanya_sees_the_activation_message() {
    let mut scenario = fresh("tanya");
    scripts::tanya_cannot_sign_in_without_activation(&mut scenario).unwrap();
    let tanya = scenario.actor(Persona::Tanya).unwrap();
    let error = tanya.asks_for(&AuthenticationError).unwrap();
    assert_eq!(error.as_deref(), Some("You need to activate your account before signing in"));
}

#[test]
fn wrong_expectation_fails_with_title_and_description() {
    let mut scenario = fresh("expectation");
    let sue = scenario.actor_called("Sue").unwrap();
    sue.attempts_to(&[&CreateAccount::for_themselves()]).unwrap();

    fn expects_authenticated(scenario: &mut Scenario) -> Result<(), ScenarioError> {
        let sue = scenario.actor(Persona::Sue)?;
        sue.attempts_to(&[&check_that(IsAuthenticated, is(true))])?;
        Ok(())
    }
    let err = scripts::play(&mut scenario, expects_authenticated).unwrap_err();
    assert!(matches!(err.screenplay(), ScreenplayError::AssertionFailed { .. }));
    let text = err.to_string();
    assert!(text.starts_with("Escenario 'expectation' falló: authenticated"));
    assert!(text.contains("Expected: <true>"));
    assert!(text.contains("but: was <false>"));
}

#[test]
fn actors_are_cached_within_a_scenario() {
    let mut scenario = fresh("cache");
    let first = scenario.actor_called("Sue").unwrap();
    first.attempts_to(&[&SignUp]).unwrap();

    let again = scenario.actor_called("Sue").unwrap();
    assert!(first.same_identity(&again));
    again.attempts_to(&[&check_that(IsAuthenticated, is(true))]).unwrap();
}

#[test]
fn a_new_scenario_starts_from_an_empty_app() {
    let mut first = fresh("first");
    first.actor_called("Bob").unwrap().attempts_to(&[&SignUp]).unwrap();

    let mut second = fresh("second");
    let bob = second.actor_called("Bob").unwrap();
    bob.attempts_to(&[&check_that(IsAuthenticated, is(false)),
                      &check_that(AuthenticationError, is(None::<String>))])
       .unwrap();
    assert_eq!(second.app_snapshot().accounts().count(), 0);
}

#[test]
fn activation_signs_in_only_the_acting_user() {
    let mut scenario = fresh("isolation");
    let sue = scenario.actor_called("Sue").unwrap();
    let tanya = scenario.actor_called("Tanya").unwrap();

    sue.attempts_to(&[&CreateAccount::for_themselves(), &ActivateAccount]).unwrap();
    tanya.attempts_to(&[&CreateAccount::for_themselves()]).unwrap();

    tanya.attempts_to(&[&check_that(IsAuthenticated, is(false))]).unwrap();
    sue.attempts_to(&[&check_that(AuthenticationError, is(None::<String>))]).unwrap();
}

#[test]
fn unknown_names_and_excluded_personas_are_rejected() {
    let mut scenario = Scenario::with_cast("restricted", Cast::new([Persona::Sue]));
    assert!(matches!(scenario.actor_called("Zed").unwrap_err().screenplay(),
                     ScreenplayError::UnknownActor(_)));
    assert!(matches!(scenario.actor_called("Bob").unwrap_err().screenplay(),
                     ScreenplayError::NotInCast(Persona::Bob)));
    assert!(scenario.actor_called("Sue").is_ok());
}

#[test]
fn project_attempt_keeps_the_activation_reason() {
    let mut scenario = fresh("no-session");
    scripts::unactivated_user_has_no_projects(&mut scenario).unwrap();
    let tanya = scenario.actor(Persona::Tanya).unwrap();
    tanya.attempts_to(&[&check_that(AuthenticationError, matches_pattern("activate your account").unwrap()),
                        &check_that(screenplay_core::ProjectsVisible, is_empty())])
         .unwrap();

    let session = scenario.app_snapshot().session("Tanya").cloned().unwrap();
    assert_eq!(session.project_error(), Some("You need to sign in before creating a project"));
}
