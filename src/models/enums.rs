use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Raised when a stored string does not map to a known enum variant.
#[derive(Error, Debug)]
#[error("Invalid value '{value}' for enum {field}")]
pub struct InvalidEnum {
    pub field: String,
    pub value: String,
}

/// Macro to generate enum with as_str + std::str::FromStr pattern
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = InvalidEnum;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }
    };
}

str_enum!(DocumentType {
    Prescription => "prescription",
    Bill => "bill",
    Report => "report",
    Unknown => "unknown",
});

str_enum!(ClaimSubtype {
    Specialist => "specialist",
    Medical => "medical",
});

str_enum!(OrderKind {
    Medicine => "medicine",
    Supplement => "supplement",
    Lab => "lab",
});

str_enum!(Severity {
    Flag => "flag",
    Warning => "warning",
    Error => "error",
});
