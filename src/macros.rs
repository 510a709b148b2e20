//! Declarative generators for the repeating model template.
//!
//! The whole model surface is one pattern repeated per type: optional fields
//! behind accessors, fluent `with_` builders, wire-named serde mapping and a
//! present-fields-only debug rendering. `dto!` and `wire_enum!` stamp that
//! pattern out so each type is declared once, as data.
//!
//! Field kinds:
//! - `scalar T`  -> stored as `Option<T>`
//! - `list T`    -> stored as `Option<Vec<T>>`, `with_` appends
//! - `map T`     -> stored as `Option<BTreeMap<String, T>>`, entries added
//!                  through `add_*_entry` which rejects duplicate keys

macro_rules! dto_field_ty {
    (scalar $ty:ty) => { Option<$ty> };
    (list $ty:ty) => { Option<Vec<$ty>> };
    (map $ty:ty) => { Option<::std::collections::BTreeMap<String, $ty>> };
}

macro_rules! dto_accessors {
    (scalar $field:ident : $ty:ty => $wire:literal) => {
        ::paste::paste! {
            pub fn $field(&self) -> Option<&$ty> {
                self.$field.as_ref()
            }

            /// Replaces the field; `None` clears it back to absent.
            pub fn [<set_ $field>](&mut self, value: impl Into<Option<$ty>>) {
                self.$field = value.into();
            }

            pub fn [<with_ $field>](mut self, value: $ty) -> Self {
                self.$field = Some(value);
                self
            }
        }
    };
    (list $field:ident : $ty:ty => $wire:literal) => {
        ::paste::paste! {
            pub fn $field(&self) -> Option<&[$ty]> {
                self.$field.as_deref()
            }

            /// Replaces the whole list; `None` clears it back to absent.
            pub fn [<set_ $field>](&mut self, value: impl Into<Option<Vec<$ty>>>) {
                self.$field = value.into();
            }

            /// Appends one element, initializing the list on first use. An
            /// untouched field stays absent, which serializes differently
            /// from an empty list.
            pub fn [<with_ $field>](mut self, value: $ty) -> Self {
                self.$field.get_or_insert_with(Vec::new).push(value);
                self
            }
        }
    };
    (map $field:ident : $ty:ty => $wire:literal) => {
        ::paste::paste! {
            pub fn $field(&self) -> Option<&::std::collections::BTreeMap<String, $ty>> {
                self.$field.as_ref()
            }

            /// Replaces the whole map; `None` clears it back to absent.
            pub fn [<set_ $field>](
                &mut self,
                value: impl Into<Option<::std::collections::BTreeMap<String, $ty>>>,
            ) {
                self.$field = value.into();
            }

            /// Inserts one entry, initializing the map on first use. Keys are
            /// unique; inserting an existing key fails.
            pub fn [<add_ $field _entry>](
                &mut self,
                key: impl Into<String>,
                value: $ty,
            ) -> Result<(), $crate::error::ModelError> {
                let key = key.into();
                let entries = self.$field.get_or_insert_with(Default::default);
                if entries.contains_key(&key) {
                    return Err($crate::error::ModelError::DuplicateKey {
                        field: $wire,
                        key,
                    });
                }
                entries.insert(key, value);
                Ok(())
            }

            /// Resets the map to absent.
            pub fn [<clear_ $field _entries>](&mut self) {
                self.$field = None;
            }
        }
    };
}

/// Declares one model record. See the module docs for field kinds.
macro_rules! dto {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $(
                $(#[$fmeta:meta])*
                $field:ident : $kind:ident $ty:ty => $wire:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name {
            $(
                $(#[$fmeta])*
                #[serde(rename = $wire, skip_serializing_if = "Option::is_none", default)]
                $field: dto_field_ty!($kind $ty),
            )+
        }

        impl $name {
            /// Creates the record with every field absent.
            pub fn new() -> Self {
                Self::default()
            }

            $( dto_accessors!($kind $field : $ty => $wire); )+
        }

        impl ::std::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter) -> ::std::fmt::Result {
                let mut record = $crate::fmt::RecordWriter::new(f);
                $( record.field($wire, &self.$field)?; )+
                record.finish()
            }
        }

        impl $crate::fmt::WireDisplay for $name {
            fn wire_fmt(&self, f: &mut ::std::fmt::Formatter) -> ::std::fmt::Result {
                ::std::fmt::Debug::fmt(self, f)
            }
        }
    };
}

/// Declares a closed wire-string vocabulary. The wire token is the single
/// source of truth: parsing an empty or unrecognized string fails, and
/// `as_str` is the exact inverse of `from_value` for every member.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $wire:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
        }

        impl $name {
            /// The exact token exchanged with the remote API.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $( $name::$variant => $wire, )+
                }
            }

            /// Strict parse. Empty and unrecognized input fail; there is no
            /// sentinel fallback.
            pub fn from_value(value: &str) -> Result<Self, $crate::error::ModelError> {
                match value {
                    $( $wire => Ok($name::$variant), )+
                    _ => Err($crate::error::ModelError::InvalidEnumValue {
                        enum_name: stringify!($name),
                        value: value.to_string(),
                    }),
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::error::ModelError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $name::from_value(s)
            }
        }

        impl $crate::fmt::WireDisplay for $name {
            fn wire_fmt(&self, f: &mut ::std::fmt::Formatter) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                let raw = <String as ::serde::Deserialize>::deserialize(deserializer)?;
                $name::from_value(&raw).map_err(::serde::de::Error::custom)
            }
        }
    };
}

/// Declares one server-defined error type: a mandatory message set at
/// construction, plus optional diagnostic fields the transport fills in
/// afterwards through plain setters.
macro_rules! service_error {
    (
        $(#[$meta:meta])*
        pub struct $name:ident $({ $( $extra:ident ),+ $(,)? })?
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Fail)]
        #[fail(display = "{}", message)]
        pub struct $name {
            message: String,
            $( $( $extra: Option<String>, )+ )?
        }

        impl $name {
            pub fn new(message: impl Into<String>) -> Self {
                $name {
                    message: message.into(),
                    $( $( $extra: None, )+ )?
                }
            }

            pub fn message(&self) -> &str {
                &self.message
            }

            $( $(
                ::paste::paste! {
                    pub fn $extra(&self) -> Option<&str> {
                        self.$extra.as_deref()
                    }

                    pub fn [<set_ $extra>](&mut self, value: impl Into<Option<String>>) {
                        self.$extra = value.into();
                    }
                }
            )+ )?
        }
    };
}

/// Wires a `NextToken`-bearing request/result pair into the pagination
/// traits.
macro_rules! impl_paged {
    (request $name:ty) => {
        impl $crate::pagination::PagedRequest for $name {
            fn set_continuation(&mut self, token: Option<String>) {
                self.set_next_token(token);
            }
        }
    };
    (result $name:ty) => {
        impl $crate::pagination::PagedResult for $name {
            fn continuation(&self) -> Option<&str> {
                self.next_token().map(String::as_str)
            }
        }
    };
}
