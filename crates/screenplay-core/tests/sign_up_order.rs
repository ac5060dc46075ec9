//! `SignUp` debe producir exactamente las mismas llamadas al driver, y en el
//! mismo orden, que ejecutar sus pasos a mano.


use screenplay_core::{ActivateAccount, Actor, CreateAccount, Performable, SignUp};
use test_support::{recording, RecordingDriver};

fn calls_for(steps: &[&dyn Performable], driver: RecordingDriver) -> (Vec<String>, bool) {
    let (concrete, shared) = recording(driver);
    let actor = Actor::named("Sue").who_can_use(shared);
    let ok = actor.attempts_to(steps).is_ok();
    let calls = concrete.borrow().calls.clone();
    (calls, ok)
}

#[test]
fn sign_up_matches_manual_sequence() {
    let (task_calls, task_ok) = calls_for(&[&SignUp], RecordingDriver::default());
    let (manual_calls, manual_ok) = calls_for(&[&CreateAccount::for_themselves(), &ActivateAccount::theirs()],
                                              RecordingDriver::default());

    assert!(task_ok && manual_ok);
    assert_eq!(task_calls, manual_calls);
    assert_eq!(task_calls,
               vec!["create_account(Sue)".to_string(),
                    "activate_account(Sue)".to_string(),
                    "sign_in(Sue)".to_string()]);
}

#[test]
fn sign_up_matches_manual_sequence_when_driver_fails() {
    // El mismo doble con fallos en cada punto posible.
    for failing in ["create_account", "activate_account", "sign_in"] {
        let (task_calls, task_ok) = calls_for(&[&SignUp], RecordingDriver::failing_on(failing));
        let (manual_calls, manual_ok) = calls_for(&[&CreateAccount::for_themselves(), &ActivateAccount::theirs()],
                                                  RecordingDriver::failing_on(failing));
        assert!(!task_ok && !manual_ok, "failure at {failing} must propagate");
        assert_eq!(task_calls, manual_calls, "call order differs when failing at {failing}");
        assert_eq!(task_calls.last().map(String::as_str), Some(format!("{failing}(Sue)").as_str()));
    }
}

#[test]
fn sign_up_task_declares_create_before_activate() {
    let task = SignUp::as_new_user();
    assert_eq!(task.step_descriptions(),
               vec!["create an account for themselves".to_string(), "activate their account".to_string()]);
}
