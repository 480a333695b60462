//! Enumerated string values shared by several entities.
//!
//! Each enum has a wire value (what the backend sends and expects), an Arabic
//! label for display, and a `FromStr` impl that accepts the wire value so the
//! same strings work on the command line.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Error returned when a string does not name any variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
    pub expected: &'static [&'static str],
}

impl std::error::Error for UnknownVariant {}

impl fmt::Display for UnknownVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown {} '{}', expected one of: {}",
            self.kind,
            self.value,
            self.expected.join(", ")
        )
    }
}

macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal {
            $( $variant:ident => ($wire:literal, $label:literal) ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];
            const WIRE: &'static [&'static str] = &[$($wire),+];

            /// The value sent to and received from the backend.
            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $wire,)+
                }
            }

            /// Human-readable label for display.
            pub fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = UnknownVariant;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim() {
                    $($wire => Ok($name::$variant),)+
                    other => Err(UnknownVariant {
                        kind: $kind,
                        value: other.to_string(),
                        expected: Self::WIRE,
                    }),
                }
            }
        }
    };
}

string_enum!(
    /// School year a chapter targets or a teacher teaches.
    YearTarget, "year target" {
        FirstSecondary => ("first_secondary", "الصف الأول الثانوي"),
        SecondSecondary => ("second_secondary", "الصف الثاني الثانوي"),
        ThirdSecondary => ("third_secondary", "الصف الثالث الثانوي"),
    }
);

string_enum!(
    /// Study branch within a year.
    Branch, "branch" {
        Scientific => ("scientific", "علمي"),
        Literary => ("literary", "أدبي"),
        Mathematics => ("mathematics", "علمي رياضة"),
        Science => ("science", "علمي علوم"),
    }
);

string_enum!(
    /// Lifecycle of a scheduled session.
    SessionStatus, "session status" {
        Pending => ("pending", "قيد الانتظار"),
        Completed => ("completed", "مكتملة"),
        Cancelled => ("cancelled", "ملغاة"),
    }
);

string_enum!(
    /// How a payment is billed.
    PaymentType, "payment type" {
        Monthly => ("monthly", "شهري"),
        PerSession => ("per_session", "بالحصة"),
    }
);

string_enum!(
    /// Subscription state of a student.
    SubscriptionStatus, "subscription status" {
        Active => ("active", "نشط"),
        Inactive => ("inactive", "غير نشط"),
        Expired => ("expired", "منتهي"),
    }
);

impl Default for SessionStatus {
    fn default() -> Self {
        Self::Pending
    }
}

impl Default for SubscriptionStatus {
    fn default() -> Self {
        Self::Inactive
    }
}
