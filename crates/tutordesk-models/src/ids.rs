//! Strongly-typed ID newtypes for domain entities.
//!
//! The backend issues integer ids. Wrapping them prevents passing a
//! `ChapterId` where a `CourseId` is expected, which matters in the nested
//! chapter/course operations where both appear side by side.
//!
//! # Example
//!
//! ```ignore
//! use tutordesk_models::ids::{ChapterId, CourseId};
//!
//! fn remove_course(chapter: ChapterId, course: CourseId) { /* ... */ }
//!
//! remove_course(ChapterId::new(1), CourseId::new(99));    // OK
//! // remove_course(CourseId::new(99), ChapterId::new(1)); // Compile error!
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Macro to define a strongly-typed ID newtype over `i64`.
///
/// Ids serialize as JSON numbers and deserialize from either numbers or
/// numeric strings.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(pub i64);

        impl $name {
            #[inline]
            pub const fn new(id: i64) -> Self {
                Self(id)
            }

            #[inline]
            pub const fn get(self) -> i64 {
                self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            #[inline]
            fn from(id: i64) -> Self {
                Self(id)
            }
        }

        impl From<$name> for i64 {
            #[inline]
            fn from(id: $name) -> i64 {
                id.0
            }
        }

        impl std::str::FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim().parse().map(Self)
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_i64(self.0)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                tutordesk_core::serde::deserialize_i64_lenient(deserializer).map(Self)
            }
        }
    };
}

define_id!(
    /// Identifies a teacher.
    TeacherId
);

define_id!(
    /// Identifies a student.
    StudentId
);

define_id!(
    /// Identifies a chapter (the parent of courses).
    ChapterId
);

define_id!(
    /// Identifies a course inside a chapter.
    CourseId
);

define_id!(
    /// Identifies a scheduled teaching session.
    SessionId
);

define_id!(
    /// Identifies a payment record.
    PaymentId
);

define_id!(
    /// Identifies a student check-in.
    CheckInId
);
