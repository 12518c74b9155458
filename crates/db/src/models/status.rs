//! Status enums mapping to SMALLSERIAL lookup tables.
//!
//! Each variant's discriminant matches the seed order (1-based) of the
//! corresponding `*_statuses` table.

/// Status ID type matching SMALLINT/SMALLSERIAL in the database.
pub type StatusId = i16;

macro_rules! define_status_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $val:expr => $label:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[repr(i16)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum $name {
            $( $(#[$vmeta])* $variant = $val ),+
        }

        impl $name {
            /// Every variant in seed order.
            pub const ALL: &'static [$name] = &[$( $name::$variant ),+];

            /// Return the database status ID.
            pub fn id(self) -> StatusId {
                self as StatusId
            }

            /// Seeded `name` column of the lookup row.
            pub fn name(self) -> &'static str {
                match self {
                    $( $name::$variant => $label ),+
                }
            }

            /// Look up a variant by database ID.
            pub fn from_id(id: StatusId) -> Option<Self> {
                Self::ALL.iter().copied().find(|s| s.id() == id)
            }
        }

        impl From<$name> for StatusId {
            fn from(value: $name) -> Self {
                value as StatusId
            }
        }
    };
}

define_status_enum! {
    /// Job lifecycle status (`job_statuses`).
    JobStatus {
        InProgress = 1 => "in_progress",
        Completed = 2 => "completed",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_match_seed_order() {
        assert_eq!(JobStatus::InProgress.id(), 1);
        assert_eq!(StatusId::from(JobStatus::Completed), 2);
    }

    #[test]
    fn from_id_round_trips_known_ids_only() {
        assert_eq!(JobStatus::from_id(2), Some(JobStatus::Completed));
        assert_eq!(JobStatus::from_id(0), None);
        assert_eq!(JobStatus::from_id(3), None);
    }

    #[test]
    fn names_match_seed_rows() {
        let names: Vec<_> = JobStatus::ALL.iter().map(|s| s.name()).collect();
        assert_eq!(names, ["in_progress", "completed"]);
    }
}
