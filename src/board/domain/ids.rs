//! Identifier newtypes for board entities.
//!
//! Every identifier wraps a UUID so a list id can never be passed where a
//! task id is expected.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

macro_rules! board_id {
    ($(#[$meta:meta])* $name:ident, $label:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            #[doc = concat!("Creates a new random ", $label, " identifier.")]
            #[must_use]
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            #[doc = concat!("Creates a ", $label, " identifier from an existing UUID.")]
            #[must_use]
            pub const fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Returns the wrapped UUID.
            #[must_use]
            pub const fn into_inner(self) -> Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl AsRef<Uuid> for $name {
            fn as_ref(&self) -> &Uuid {
                &self.0
            }
        }

        impl From<$name> for Uuid {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

board_id!(
    /// Unique identifier for a project.
    ProjectId,
    "project"
);

board_id!(
    /// Unique identifier for a list within a project.
    ///
    /// Ordered so that lock acquisition over several lists can follow a
    /// fixed order.
    ListId,
    "list"
);

board_id!(
    /// Unique identifier for a task.
    TaskId,
    "task"
);

board_id!(
    /// Unique identifier for a user account.
    UserId,
    "user"
);

board_id!(
    /// Unique identifier for an activity log entry.
    ActivityId,
    "activity"
);
