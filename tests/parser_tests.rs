use smallml::ast::{Expression, Pattern, Program, Statement};
use smallml::fmt::SurfaceProgram;
use smallml::parser::parse;
use smallml::types::Type;

fn parse_program(input: &str) -> Program {
    match parse(input) {
        Ok(program) => program,
        Err(err) => panic!("parsing failed: {err}"),
    }
}

fn parse_single(input: &str) -> Statement {
    let mut program = parse_program(input);
    assert_eq!(program.len(), 1, "expected a single statement");
    program.remove(0)
}

#[test]
fn parse_integer_statement() {
    if let Statement::Expression(Expression::Integer(i)) = parse_single("42") {
        assert_eq!(i.value, 42);
    } else {
        panic!("expected integer expression");
    }
}

#[test]
fn parse_val_binding() {
    if let Statement::Val(binding) = parse_single("val x = 42") {
        assert_eq!(binding.name.value, "x");
        assert!(matches!(*binding.value, Expression::Integer(ref i) if i.value == 42));
    } else {
        panic!("expected val");
    }
}

#[test]
fn parse_def_binding() {
    assert!(matches!(parse_single("def x = 1"), Statement::Def(_)));
}

#[test]
fn parse_data_declaration() {
    if let Statement::DataType(data) = parse_single("data pair a b = mk l r | empty") {
        assert_eq!(data.name.value, "pair");
        assert_eq!(data.type_args.len(), 2);
        assert_eq!(data.constructors.len(), 2);
        assert_eq!(data.constructors[0].name.value, "mk");
        assert_eq!(data.constructors[0].fields.len(), 2);
        assert!(data.constructors[1].fields.is_empty());
    } else {
        panic!("expected data declaration");
    }
}

#[test]
fn parse_match_arms() {
    let stmt = parse_single("match o with | some y => y | none => 0 end");
    let Statement::Expression(Expression::Match(m)) = stmt else {
        panic!("expected match");
    };
    assert_eq!(m.arms.len(), 2);
    assert!(matches!(
        &m.arms[0].pattern,
        Pattern::Constructor { name, fields } if name.value == "some" && fields.len() == 1
    ));
    assert!(matches!(&m.arms[1].pattern, Pattern::Nullary(name) if name.value == "none"));
}

#[test]
fn parse_nested_match_in_arm() {
    let source = "match a with | some x => match x with | some y => y | none => 0 end | none => 1 end";
    let Statement::Expression(Expression::Match(m)) = parse_single(source) else {
        panic!("expected match");
    };
    assert_eq!(m.arms.len(), 2);
    assert!(matches!(m.arms[0].body, Expression::Match(_)));
}

#[test]
fn parse_annotated_lambda() {
    let Statement::Expression(Expression::Lambda(lambda)) =
        parse_single("fun f : (int -> int) -> int => f 1")
    else {
        panic!("expected lambda");
    };
    assert_eq!(
        lambda.annotation,
        Some(Type::func(
            Type::func(Type::int(), Type::int()),
            Type::int()
        ))
    );
}

#[test]
fn parse_multiple_statements() {
    let program = parse_program("val id = fun x => x; id 1; id true;");
    assert_eq!(program.len(), 3);
    assert!(matches!(program[0], Statement::Val(_)));
    assert!(matches!(program[1], Statement::Expression(Expression::Application(_))));
}

#[test]
fn parse_multiline_program() {
    let program = parse_program(
        r#"
        data option = some x | none;
        val get = fun o =>
            match o with
            | some y => y
            | none => 0
            end;
        get (some 5)
        "#,
    );
    assert_eq!(program.len(), 3);
}

#[test]
fn printed_program_parses_back() {
    let source = "val f = fun g => fun x => g (g x); let y = f (fun z => add z 1) 2 in if eq y 4 then \"ok\" else \"no\"";
    let printed = SurfaceProgram(&parse_program(source)).to_string();
    assert_eq!(
        printed,
        "val f = fun g => fun x => g (g x);\nlet y = f (fun z => add z 1) 2 in if eq y 4 then \"ok\" else \"no\""
    );
    let reparsed = parse_program(&printed);
    assert_eq!(SurfaceProgram(&reparsed).to_string(), printed);
}

#[test]
fn error_missing_then() {
    let err = parse("if true 1 else 2").unwrap_err();
    assert!(err.expected.iter().any(|e| e == "'then'"), "{err}");
    // `true 1` is read as an application, so the error is at `else`
    assert_eq!(err.found.as_deref(), Some("'else'"));
}

#[test]
fn error_missing_expression() {
    let err = parse("val x =").unwrap_err();
    assert!(err.expected.iter().any(|e| e == "expression"), "{err}");
    assert!(err.found.is_none());
}

#[test]
fn error_unclosed_match() {
    let err = parse("match o with | none => 0").unwrap_err();
    assert!(err.expected.iter().any(|e| e == "'end'"), "{err}");
}

#[test]
fn error_bad_lambda_parameter() {
    let err = parse("fun 1 => 2").unwrap_err();
    assert_eq!(err.expected, vec!["parameter"]);
}
