use super::*;
use crate::error::LookupKey;
use crate::test_helpers::{Color, Level, Partial};
use pretty_assertions::assert_eq;

#[test]
fn string_interpretation_uses_name() {
    let value = <AsString as Interpreter<Color>>::to_interpretation(Color::Green).expect("registered");
    assert_eq!(value, Value::string("GREEN"));
}

#[test]
fn integer_interpretation_uses_underlying_type() {
    let value = <AsInteger as Interpreter<Color>>::to_interpretation(Color::Green).expect("registered");
    assert_eq!(value, Value::Int32(1));

    let value = <AsInteger as Interpreter<Level>>::to_interpretation(Level::High).expect("registered");
    assert_eq!(value, Value::UInt8(250));
}

#[test]
fn string_round_trip() {
    for color in [Color::Red, Color::Green, Color::Blue] {
        let value = <AsString as Interpreter<Color>>::to_interpretation(color).expect("registered");
        let back = <AsString as Interpreter<Color>>::from_interpretation(&value).expect("known name");
        assert_eq!(back, color);
    }
}

#[test]
fn integer_round_trip() {
    for level in [Level::Low, Level::Mid, Level::High] {
        let value = <AsInteger as Interpreter<Level>>::to_interpretation(level).expect("registered");
        let back = <AsInteger as Interpreter<Level>>::from_interpretation(&value).expect("known value");
        assert_eq!(back, level);
    }
}

#[test]
fn string_interpreter_rejects_integer_tag() {
    let err = <AsString as Interpreter<Color>>::from_interpretation(&Value::Int32(1))
        .expect_err("integer is not a name");
    assert_eq!(
        err,
        EnumError::TypeMismatch {
            qualifier: "Color".to_string(),
            expected: ValueTag::Str,
            found: ValueTag::Int32,
        }
    );
}

#[test]
fn integer_interpreter_rejects_string_tag() {
    let err = <AsInteger as Interpreter<Color>>::from_interpretation(&Value::string("GREEN"))
        .expect_err("string is not an integer");
    assert_eq!(
        err,
        EnumError::TypeMismatch {
            qualifier: "Color".to_string(),
            expected: ValueTag::Int32,
            found: ValueTag::Str,
        }
    );
}

#[test]
fn integer_interpreter_requires_exact_width() {
    let err = <AsInteger as Interpreter<Color>>::from_interpretation(&Value::Int64(1))
        .expect_err("int64 is not int32");
    assert!(err.is_type_mismatch());
}

#[test]
fn null_is_a_tag_mismatch() {
    let err = <AsString<false> as Interpreter<Color>>::from_interpretation(&Value::Null)
        .expect_err("null carries no name");
    assert!(err.is_type_mismatch());
}

#[test]
fn unknown_name_is_not_found() {
    let err = <AsString as Interpreter<Level>>::from_interpretation(&Value::string("Extreme"))
        .expect_err("no such member");
    assert_eq!(
        err,
        EnumError::NotFound {
            qualifier: "test.Level".to_string(),
            key: LookupKey::Name("Extreme".to_string()),
        }
    );
}

#[test]
fn unknown_integer_is_not_found() {
    let err = <AsInteger as Interpreter<Level>>::from_interpretation(&Value::UInt8(11))
        .expect_err("no such member");
    assert!(err.is_not_found());
}

#[test]
fn unregistered_value_is_not_found() {
    let err = <AsString as Interpreter<Partial>>::to_interpretation(Partial::Hidden)
        .expect_err("never registered");
    assert!(err.is_not_found());

    let err = <AsInteger as Interpreter<Partial>>::to_interpretation(Partial::Hidden)
        .expect_err("never registered");
    assert!(err.is_not_found());

    let value = <AsInteger as Interpreter<Partial>>::to_interpretation(Partial::Known)
        .expect("registered");
    assert_eq!(value, Value::Int16(1));
}

#[test]
fn interpretation_tags() {
    assert_eq!(<AsString as Interpreter<Level>>::interpretation_tag(), ValueTag::Str);
    assert_eq!(<AsInteger as Interpreter<Level>>::interpretation_tag(), ValueTag::UInt8);
    assert_eq!(<AsInteger as Interpreter<Partial>>::interpretation_tag(), ValueTag::Int16);
}

#[test]
fn derived_configurations() {
    type Nullable = AsInteger<true>;
    type Derived<I> = <I as Interpreter<Color>>::NotNull;

    assert!(<Nullable as Interpreter<Color>>::NULLABLE);
    assert!(!<Derived<Nullable> as Interpreter<Color>>::NULLABLE);
    assert_eq!(
        <Derived<Nullable> as Interpreter<Color>>::KIND,
        InterpretationKind::Integer
    );

    type Switched = <AsInteger<false> as Interpreter<Color>>::AsString;
    assert!(<Switched as Interpreter<Color>>::NULLABLE);
    assert_eq!(<Switched as Interpreter<Color>>::KIND, InterpretationKind::String);

    type Back = <AsString<false> as Interpreter<Color>>::AsInteger;
    assert_eq!(<Back as Interpreter<Color>>::KIND, InterpretationKind::Integer);
}

#[test]
fn nullability_does_not_change_conversion() {
    let nullable = <AsString<true> as Interpreter<Color>>::to_interpretation(Color::Blue).expect("registered");
    let not_null = <AsString<false> as Interpreter<Color>>::to_interpretation(Color::Blue).expect("registered");
    assert_eq!(nullable, not_null);
}
