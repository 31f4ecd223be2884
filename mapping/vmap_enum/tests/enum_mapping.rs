// Test code uses unwrap/expect for clarity - panics provide good test failure messages
#![allow(clippy::unwrap_used, clippy::expect_used)]

//! End-to-end tests for enum mapping.
//!
//! These drive the crate the way a generic codec would: through the public
//! lookup API, the `Enum` field wrapper, and type-erased descriptors.

use pretty_assertions::assert_eq;
use vmap_enum::{
    declare_enum, descriptor, enum_dispatcher, AsInteger, AsString, Enum, EnumAsInteger,
    EnumError, EnumType, EnumValueEntry, NotNull, ENUM_CLASS_ID,
};
use vmap_value::{TypeDescriptor, Value, ValueTag};

declare_enum! {
    #[derive(Default)]
    pub enum Color: i32 {
        #[default]
        Red = 0 => "RED",
        Green = 1 => "GREEN",
        Blue = 2 => "BLUE",
    }
}

declare_enum! {
    #[derive(Default)]
    enum Signal: i64 as "net.Signal" {
        #[default]
        Hangup = 1,
        Interrupt = 2,
        Kill = 9,
        Terminate = 15,
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Stand-in for a codec: encodes any enum object by its descriptor alone.
fn encode(value: &Value) -> Result<Value, EnumError> {
    let obj = value.as_object().expect("enum object");
    let dispatcher = enum_dispatcher(obj.descriptor()).expect("enum descriptor");
    dispatcher.to_interpretation(value)
}

fn decode(desc: &'static TypeDescriptor, value: &Value) -> Result<Value, EnumError> {
    let dispatcher = enum_dispatcher(desc).expect("enum descriptor");
    dispatcher.from_interpretation(value)
}

#[test]
fn color_scenario() {
    init_tracing();
    let registry = Color::registry();
    registry.ensure_registered().expect("valid declaration");

    assert_eq!(
        registry.lookup_by_name("GREEN").expect("registered"),
        &EnumValueEntry {
            value: Color::Green,
            index: 1,
            name: "GREEN".to_string(),
        }
    );
    assert_eq!(
        Enum::<Color>::new(Color::Green).to_interpretation(),
        Ok(Value::string("GREEN"))
    );
    assert_eq!(
        EnumAsInteger::<Color>::new(Color::Green).to_interpretation(),
        Ok(Value::Int32(1))
    );
    assert_eq!(
        registry.lookup_by_underlying_value(2).expect("registered").value,
        Color::Blue
    );
}

#[test]
fn wrapper_static_lookups() {
    assert_eq!(Enum::<Signal>::entry_by_name("Kill").expect("registered").value, Signal::Kill);
    assert_eq!(Enum::<Signal>::entry_by_value(Signal::Terminate).expect("registered").index, 3);
    assert_eq!(Enum::<Signal>::entry_by_underlying_value(2).expect("registered").name, "Interrupt");
    assert_eq!(Enum::<Signal>::entry_by_index(0).expect("registered").value, Signal::Hangup);
    assert!(Enum::<Signal>::entry_by_index(4).expect_err("past the end").is_not_found());

    let names: Vec<&str> = Enum::<Signal>::entries()
        .expect("registered")
        .iter()
        .map(|entry| entry.name.as_str())
        .collect();
    assert_eq!(names, vec!["Hangup", "Interrupt", "Kill", "Terminate"]);
}

#[test]
fn wrapper_null_handling() {
    let field = Enum::<Color>::null();
    assert!(field.is_null());
    assert_eq!(field.to_interpretation(), Ok(Value::Null));
    assert_eq!(Enum::<Color>::from_interpretation(&Value::Null), Ok(Enum::null()));
    assert_eq!(Enum::<Color>::default(), Enum::null());

    let decoded = Enum::<Color>::from_interpretation(&Value::string("RED")).expect("known name");
    assert_eq!(decoded, Color::Red);
    assert_eq!(decoded.value(), Some(Color::Red));
}

#[test]
fn wrapper_nullability_flags() {
    assert!(Enum::<Color>::is_nullable());
    assert!(EnumAsInteger::<Color>::is_nullable());
    assert!(!NotNull::<Color>::is_nullable());
    assert!(!NotNull::<Color, AsInteger>::is_nullable());

    let required: NotNull<Color, AsInteger> = Color::Blue.into();
    assert_eq!(required.to_interpretation(), Ok(Value::Int32(2)));
}

#[test]
fn descriptor_identifies_enum_types() {
    let desc = Enum::<Signal, AsInteger>::descriptor().expect("valid declaration");
    assert_eq!(desc.class_id(), *ENUM_CLASS_ID);
    assert_eq!(desc.qualifier(), Some("net.Signal"));

    let same = descriptor::<Signal, AsInteger>().expect("valid declaration");
    assert!(std::ptr::eq(desc, same));
}

#[test]
fn codec_round_trip_through_descriptors() {
    init_tracing();
    let by_name = descriptor::<Signal, AsString>().expect("valid declaration");
    let by_code = descriptor::<Signal, AsInteger>().expect("valid declaration");

    let object = Value::object(Signal::Kill, by_name);
    assert_eq!(encode(&object), Ok(Value::string("Kill")));

    let object = Value::object(Signal::Kill, by_code);
    assert_eq!(encode(&object), Ok(Value::Int64(9)));

    let decoded = decode(by_code, &Value::Int64(15)).expect("known value");
    let obj = decoded.as_object().expect("enum object");
    assert_eq!(obj.downcast_ref::<Signal>(), Some(&Signal::Terminate));
}

#[test]
fn codec_allocates_then_fills() {
    let desc = descriptor::<Signal, AsString>().expect("valid declaration");

    let fresh = desc.create_instance().expect("factory");
    assert_eq!(encode(&fresh), Ok(Value::string("Hangup")));
}

#[test]
fn codec_failures_propagate() {
    let desc = descriptor::<Signal, AsInteger>().expect("valid declaration");

    let err = decode(desc, &Value::Int64(3)).expect_err("no signal 3");
    assert!(err.is_not_found());

    let err = decode(desc, &Value::Int32(9)).expect_err("wrong width");
    assert_eq!(
        err,
        EnumError::TypeMismatch {
            qualifier: "net.Signal".to_string(),
            expected: ValueTag::Int64,
            found: ValueTag::Int32,
        }
    );
}
