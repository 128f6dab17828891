//! `data` declarations and `match` through a whole session

use smallml::config::Config;
use smallml::interpreter::{Capture, RValue};
use smallml::{Error, Outcome, Session};

const OPTION: &str = "data option = some x | none";

fn session_with(prelude: &str) -> Session {
    let mut session = Session::with_output(Config::default(), Box::new(Capture::new()));
    session.run_source(prelude).expect("prelude failed");
    session
}

fn value_of(session: &mut Session, source: &str) -> RValue {
    let mut outcomes = session
        .run_source(source)
        .unwrap_or_else(|err| panic!("{}", err.report()));
    outcomes
        .pop()
        .and_then(|outcome| outcome.value)
        .expect("no value")
}

#[test]
fn match_selects_constructor_branch() {
    let mut session = session_with(OPTION);
    let value = value_of(
        &mut session,
        "match (some 5) with | some y => y | none => 0 end",
    );
    assert!(matches!(value, RValue::Integer(5)));
}

#[test]
fn match_nullary_branch() {
    let mut session = session_with(OPTION);
    let value = value_of(&mut session, "match none with | some y => y | none => 0 end");
    assert!(matches!(value, RValue::Integer(0)));
}

#[test]
fn branches_are_chosen_by_position() {
    // The branch labelled `no` is the first continuation, which `yes` selects
    let mut session = session_with("data answer = yes | no");
    let value = value_of(&mut session, "match yes with | no => 1 | yes => 2 end");
    assert!(matches!(value, RValue::Integer(1)));
}

#[test]
fn swapped_branches_on_constructor_with_fields_do_not_type_check() {
    let mut session = session_with(OPTION);
    let err = session
        .run_source("match (some 5) with | none => 0 | some y => y end")
        .unwrap_err();
    assert!(matches!(err, Error::Type(_)));
}

#[test]
fn swapped_branches_hand_back_the_wrong_branch() {
    let mut session = session_with(OPTION);
    let value = value_of(&mut session, "match none with | none => 0 | some y => y end");
    assert_eq!(value.to_string(), "<fun y>");
}

#[test]
fn match_inside_function() {
    let mut session = session_with(OPTION);
    session
        .run_source("val get = fun o => match o with | some y => y | none => 0 end")
        .unwrap();
    assert!(matches!(value_of(&mut session, "get (some 7)"), RValue::Integer(7)));
    assert!(matches!(value_of(&mut session, "get none"), RValue::Integer(0)));
}

#[test]
fn constructor_with_several_fields() {
    let mut session = session_with("data pair = mk l r");
    let value = value_of(&mut session, "match (mk 3 4) with | mk a b => sub a b end");
    assert!(matches!(value, RValue::Integer(-1)));
}

#[test]
fn constructors_are_reported_with_their_types() {
    let mut session = session_with("val unused = unit");
    let reports: Vec<String> = session
        .run_source(OPTION)
        .unwrap()
        .iter()
        .map(Outcome::report)
        .collect();
    assert_eq!(
        reports,
        vec![
            "val some = fun x : a => fun some : a -> d => fun none : c => some x : forall a c d . a -> (a -> d) -> c -> d",
            "val none = fun some : a => fun none : b => none : forall a b . a -> b -> b",
        ]
    );
}

#[test]
fn nested_option() {
    let mut session = session_with(OPTION);
    let value = value_of(
        &mut session,
        "match (some (some 1)) with | some inner => match inner with | some v => add v 10 | none => 0 end | none => 0 end",
    );
    assert!(matches!(value, RValue::Integer(11)));
}
