//! Macros that stamp out the boilerplate every model shares: getters and
//! setters, an owned builder, and (behind `with_serde`) serialization.

/// Define a string-backed ID type for a model.
macro_rules! model_id {
    (
        $(#[$id_meta:meta])*
        pub struct $id:ident
    ) => {
        $(#[$id_meta])*
        #[derive(Clone, Debug, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "with_serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
        #[cfg_attr(feature = "with_serde", serde(transparent))]
        pub struct $id(String);

        impl $id {
            pub fn new<T: Into<String>>(id: T) -> Self {
                Self(id.into())
            }

            /// Return a string ref for this ID
            pub fn as_str(&self) -> &str {
                self.0.as_str()
            }
        }

        impl std::convert::From<$id> for String {
            fn from(id: $id) -> Self {
                let $id(val) = id;
                val
            }
        }

        impl std::convert::From<String> for $id {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl std::convert::From<&str> for $id {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl std::fmt::Display for $id {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

/// Define a model struct. Fields are readable and writable through getset
/// unless a field overrides it, and `builder()` hands back the owned builder.
/// Equality is left to the model since not every field takes part in it.
/// Model attributes land after the derives so serde/builder helpers apply.
macro_rules! model {
    (
        $(#[$struct_meta:meta])*
        pub struct $name:ident {
            $($fields:tt)*
        }
        $builder:ident
    ) => {
        #[derive(Clone, Debug, getset::Getters, getset::Setters, derive_builder::Builder)]
        #[cfg_attr(feature = "with_serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
        #[builder(pattern = "owned", setter(into))]
        #[getset(get = "pub", set = "pub")]
        $(#[$struct_meta])*
        pub struct $name {
            $($fields)*
        }

        impl $name {
            pub fn builder() -> $builder {
                $builder::default()
            }
        }
    };
}
