//! Declarative enum definitions.

/// Define an enum together with its registry.
///
/// Each member is registered in declaration order under its own name, or
/// under the label given after `=>`. The type's qualifier defaults to the
/// enum's name and can be overridden with `as "..."`.
///
/// ```text
/// declare_enum! {
///     #[derive(Default)]
///     pub enum Color: i32 as "app.Color" {
///         #[default]
///         Red = 0 => "RED",
///         Green = 1 => "GREEN",
///         Blue = 2 => "BLUE",
///     }
/// }
/// ```
///
/// The generated enum derives `Clone, Copy, Debug, PartialEq, Eq, Hash` and
/// is `#[repr]`-ed as its underlying integer type.
#[macro_export]
macro_rules! declare_enum {
    (@qualifier $name:ident) => {
        stringify!($name)
    };
    (@qualifier $name:ident $qualifier:literal) => {
        $qualifier
    };
    (@label $variant:ident) => {
        stringify!($variant)
    };
    (@label $variant:ident $label:literal) => {
        $label
    };
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident : $repr:ident $(as $qualifier:literal)? {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident = $value:expr $(=> $label:literal)?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        #[repr($repr)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant = $value,
            )*
        }

        impl $crate::EnumType for $name {
            type Underlying = $repr;

            #[inline]
            fn to_underlying(self) -> $repr {
                self as $repr
            }

            fn registry() -> &'static $crate::EnumRegistry<Self> {
                fn declare() -> ::std::result::Result<
                    $crate::EnumInfo<$name>,
                    $crate::RegistrationError,
                > {
                    let mut builder = $crate::EnumInfoBuilder::new(
                        $crate::declare_enum!(@qualifier $name $($qualifier)?),
                    );
                    $(
                        builder.push(
                            $name::$variant,
                            $crate::declare_enum!(@label $variant $($label)?),
                        )?;
                    )*
                    ::std::result::Result::Ok(builder.build())
                }

                static REGISTRY: $crate::EnumRegistry<$name> = $crate::EnumRegistry::new(declare);
                &REGISTRY
            }
        }
    };
}
