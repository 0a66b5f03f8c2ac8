use smartcalc::{Calculator, CalculatorKind, ErrorClass};

/// Run `input` on a fresh calculator and return what it displays, or the
/// class of the error it fails with.
pub fn run(kind: CalculatorKind, input: &str) -> Result<String, ErrorClass> {
    let mut calc = Calculator::new(kind);
    calc.calculate(input).map_err(|e| e.class())?;
    Ok(calc.display_result().to_string())
}

/// Declare a test evaluating `input` on one or more calculators.
///
/// ```ignore
/// test_case! {
///     name: addition,
///     input: "2 + 3",
///     all: Ok("5"),
/// }
///
/// test_case! {
///     name: sine,
///     input: "sin(0)",
///     Basic: Err(ErrorClass::Name),
///     Smart: Ok("0.0"),
/// }
/// ```
#[macro_export]
macro_rules! test_case {
    (
        name: $name:ident,
        input: $input:expr,
        all: $expected:expr $(,)?
    ) => {
        $crate::test_case! {
            name: $name,
            input: $input,
            Basic: $expected,
            Scientific: $expected,
            Smart: $expected,
        }
    };
    (
        name: $name:ident,
        input: $input:expr,
        $( $kind:ident: $expected:expr ),+ $(,)?
    ) => {
        #[test]
        fn $name() {
            $(
                let expected: Result<&str, smartcalc::ErrorClass> = $expected;
                pretty_assertions::assert_eq!(
                    $crate::cases::run(smartcalc::CalculatorKind::$kind, $input),
                    expected.map(|s| s.to_string()),
                    "{} calculator on {:?}",
                    stringify!($kind),
                    $input,
                );
            )+
        }
    };
}
