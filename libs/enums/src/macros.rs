//! Enum Declaration Macro
//!
//! Provides the `define_enum!` macro for declaring an enum type as a list of
//! constants, each either auto-numbered or given an explicit ordinal.
//!
//! ## Usage Example
//!
//! ```rust
//! use enums::{define_enum, Enumeration};
//!
//! define_enum! {
//!     /// Animals with a gap before BIRD
//!     pub Animal {
//!         __SOME_INTERNAL_CONSTANT = 222,
//!         CAT,
//!         DOG,
//!         BIRD = 3,
//!         FISH,
//!     }
//! }
//!
//! assert_eq!(Animal::FISH().unwrap().ordinal(), 4);
//! assert!(!Animal::is_ordinal_defined(2));
//! assert!(Animal::__SOME_INTERNAL_CONSTANT().is_err());
//! ```

/// Declare an enum type backed by a lazily built, process-wide registry
///
/// Generates:
/// - a unit struct named after the type implementing [`Enumeration`](crate::Enumeration)
/// - a `'static` registry built with the global configuration on first use
/// - one accessor function per declared constant, routed through
///   [`EnumRegistry::call`](crate::EnumRegistry::call)
///
/// The type name used in records and errors is the module path of the
/// invocation followed by the identifier, e.g. `my_crate::zoo::Animal`, so
/// same-named types in different modules never resolve each other's records.
///
/// Constants whose names are not member names still get an accessor; calling
/// it fails with `MethodNotFound` instead of producing an instance.
///
/// The registry is built once per process and cannot be reset. Code that needs
/// to rebuild tables should own an [`EnumRegistry`](crate::EnumRegistry).
#[macro_export]
macro_rules! define_enum {
    (@value) => {
        $crate::DeclaredValue::Auto
    };
    (@value $value:expr) => {
        $crate::DeclaredValue::Explicit($value)
    };
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident {
            $(
                $(#[$member_meta:meta])*
                $member:ident $(= $value:expr)?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        $vis struct $name;

        impl $crate::Enumeration for $name {
            fn registry() -> &'static $crate::EnumRegistry {
                static REGISTRY: $crate::__private::Lazy<$crate::EnumRegistry> =
                    $crate::__private::Lazy::new(|| {
                        $crate::EnumRegistry::new(
                            $crate::Declaration::new(concat!(module_path!(), "::", stringify!($name)))
                            $(
                                .member(stringify!($member), $crate::define_enum!(@value $($value)?))
                            )*
                        )
                    });
                &REGISTRY
            }
        }

        #[allow(non_snake_case, dead_code)]
        impl $name {
            $(
                $(#[$member_meta])*
                $vis fn $member() -> $crate::Result<$crate::EnumInstance> {
                    <$name as $crate::Enumeration>::call::<()>(stringify!($member), &[])
                }
            )*
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::{EnumError, Enumeration};

    mod zoo {
        define_enum! {
            pub Animal {
                CAT,
                DOG,
            }
        }
    }

    mod farm {
        define_enum! {
            pub Animal {
                CAT,
                DOG,
            }
        }
    }

    define_enum! {
        AccessLevel {
            READ,
            WRITE,
            ADMIN,
        }
    }

    define_enum! {
        Sparse {
            /// Starts at ten
            FIRST = 10,
            SECOND,
            lower_case = 40,
            NEGATIVE = -1,
        }
    }

    #[test]
    fn test_generated_accessors() {
        assert_eq!(AccessLevel::READ().unwrap().ordinal(), 0);
        assert_eq!(AccessLevel::WRITE().unwrap().ordinal(), 1);
        assert_eq!(AccessLevel::ADMIN().unwrap().name(), "ADMIN");
        assert_eq!(
            AccessLevel::type_name(),
            concat!(module_path!(), "::AccessLevel")
        );
        assert_eq!(AccessLevel::type_name(), "enums::macros::tests::AccessLevel");
    }

    #[test]
    fn test_explicit_values_and_filtered_names() {
        assert_eq!(Sparse::SECOND().unwrap().ordinal(), 11);
        assert_eq!(Sparse::NEGATIVE().unwrap().ordinal(), -1);
        assert!(!Sparse::is_name_defined("lower_case"));
        assert!(matches!(
            Sparse::lower_case(),
            Err(EnumError::MethodNotFound { .. })
        ));
    }

    #[test]
    fn test_same_named_types_in_different_modules() {
        let zoo_dog = zoo::Animal::DOG().unwrap();
        let farm_dog = farm::Animal::DOG().unwrap();

        assert_eq!(zoo_dog.type_name(), "enums::macros::tests::zoo::Animal");
        assert_eq!(farm_dog.type_name(), "enums::macros::tests::farm::Animal");
        assert!(!zoo_dog.is_equal(&farm_dog));

        // A record of one type does not resolve into the other
        assert!(matches!(
            farm::Animal::registry().from_record(&zoo_dog.to_record()),
            Err(EnumError::TypeMismatch { .. })
        ));
        assert!(zoo::Animal::registry()
            .from_record(&zoo_dog.to_record())
            .unwrap()
            .is_same(&zoo_dog));

        assert_eq!(
            zoo_dog.is_less(&farm_dog),
            Err(EnumError::TypeMismatch {
                left: "enums::macros::tests::zoo::Animal".to_string(),
                right: "enums::macros::tests::farm::Animal".to_string(),
            })
        );
    }

    #[test]
    fn test_types_are_distinct() {
        let read = AccessLevel::READ().unwrap();
        assert!(AccessLevel::contains(&read));
        assert!(!Sparse::contains(&read));
    }
}
