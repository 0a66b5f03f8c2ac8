use smartcalc::ErrorClass;

mod cases;

test_case! {
    name: sine_of_zero,
    input: "sin(0)",
    Basic: Err(ErrorClass::Name),
    Scientific: Ok("0.0"),
    Smart: Ok("0.0"),
}

test_case! {
    name: cosine_in_arithmetic,
    input: "2 * cos(0) + 1",
    Basic: Err(ErrorClass::Name),
    Scientific: Ok("3.0"),
    Smart: Ok("3.0"),
}

test_case! {
    name: tangent_of_zero,
    input: "tan(0)",
    Scientific: Ok("0.0"),
}

test_case! {
    name: nested_calls,
    input: "sin(cos(0) - 1)",
    Scientific: Ok("0.0"),
    Smart: Ok("0.0"),
}

test_case! {
    name: unknown_function,
    input: "log(2)",
    all: Err(ErrorClass::Name),
}

test_case! {
    name: unknown_name,
    input: "pi * 2",
    all: Err(ErrorClass::Name),
}

test_case! {
    name: function_names_are_case_sensitive,
    input: "SIN(0)",
    all: Err(ErrorClass::Name),
}

test_case! {
    name: bare_function_is_not_a_result,
    input: "sin",
    Basic: Err(ErrorClass::Name),
    Scientific: Err(ErrorClass::Type),
    Smart: Err(ErrorClass::Type),
}

test_case! {
    name: wrong_argument_count,
    input: "sin(1, 2)",
    Scientific: Err(ErrorClass::Type),
    Smart: Err(ErrorClass::Type),
}

test_case! {
    name: smart_division_by_zero_is_not_retried,
    input: "1/0",
    all: Err(ErrorClass::Arithmetic),
}

test_case! {
    name: attribute_on_unknown_name,
    input: "math.sin(0)",
    all: Err(ErrorClass::Name),
}

test_case! {
    name: attribute_on_function,
    input: "sin.real",
    Basic: Err(ErrorClass::Name),
    Scientific: Err(ErrorClass::Attribute),
    Smart: Err(ErrorClass::Attribute),
}

test_case! {
    name: sine_of_infinity,
    input: "sin(1e308 * 10)",
    Scientific: Err(ErrorClass::Arithmetic),
    Smart: Err(ErrorClass::Arithmetic),
}

#[test]
fn test_factory_round_trip() {
    use smartcalc::{CalculatorFactory, CalculatorKind};

    let factory = CalculatorFactory::instance();
    for (name, kind) in [
        ("basic", CalculatorKind::Basic),
        ("SCIENTIFIC", CalculatorKind::Scientific),
        ("Smart", CalculatorKind::Smart),
    ] {
        assert_eq!(factory.create(name).unwrap().kind(), kind);
    }
    assert_eq!(
        factory.create("graphing").unwrap_err().to_string(),
        "Invalid calculator type"
    );
}

#[test]
fn test_fresh_calculators_display_differently() {
    use smartcalc::{CalculatorFactory, NO_RESULT};

    let factory = CalculatorFactory::instance();
    assert_eq!(factory.create("smart").unwrap().display_result().to_string(), NO_RESULT);
    assert_eq!(factory.create("basic").unwrap().display_result().to_string(), "None");
    assert_eq!(
        factory.create("scientific").unwrap().display_result().to_string(),
        "None"
    );
}
