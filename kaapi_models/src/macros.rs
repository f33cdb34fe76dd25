macro_rules! nutype_string {
    ($ident:ident($($args:tt)*)) => {
        #[::nutype::nutype(
            $($args)*,
            derive(Debug, Clone, PartialEq, Eq, Deref, TryFrom, Serialize, Deserialize),
        )]
        pub struct $ident(String);
    };
}

/// Declares a fieldless enum whose variants are identified by a fixed,
/// human readable label on the wire.
macro_rules! label_enum {
    ($(#[$meta:meta])* $vis:vis enum $ident:ident {
        $($variant:ident => $label:literal),* $(,)?
    }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, ::serde::Serialize)]
        $vis enum $ident {
            $(
                #[serde(rename = $label)]
                $variant,
            )*
        }

        impl $ident {
            pub const ALL: &'static [Self] = &[$(Self::$variant),*];

            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)*
                }
            }
        }

        impl ::std::str::FromStr for $ident {
            type Err = $crate::UnknownLabel;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|variant| variant.as_str() == s)
                    .ok_or_else(|| $crate::UnknownLabel(s.into()))
            }
        }

        impl ::std::fmt::Display for $ident {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

pub(crate) use label_enum;
pub(crate) use nutype_string;
