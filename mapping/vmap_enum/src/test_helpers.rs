//! Enum fixtures shared by unit tests.

use crate::{EnumInfo, EnumInfoBuilder, EnumRegistry, EnumType, RegistrationError};

crate::declare_enum! {
    #[derive(Default)]
    pub enum Color: i32 {
        #[default]
        Red = 0 => "RED",
        Green = 1 => "GREEN",
        Blue = 2 => "BLUE",
    }
}

crate::declare_enum! {
    /// Sparse `u8` values and a custom qualifier.
    #[derive(Default)]
    pub enum Level: u8 as "test.Level" {
        Low = 10,
        #[default]
        Mid = 20,
        High = 250,
    }
}

/// Enum with a member the registry never hears about.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Partial {
    #[default]
    Known = 1,
    Hidden = 2,
}

impl EnumType for Partial {
    type Underlying = i16;

    fn to_underlying(self) -> i16 {
        self as i16
    }

    fn registry() -> &'static EnumRegistry<Self> {
        static REGISTRY: EnumRegistry<Partial> = EnumRegistry::new(declare_partial);
        &REGISTRY
    }
}

fn declare_partial() -> Result<EnumInfo<Partial>, RegistrationError> {
    let mut builder = EnumInfoBuilder::new("Partial");
    builder.register_entry(Partial::Known, 0, "KNOWN")?;
    Ok(builder.build())
}
