use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! define_id {
    ($name:ident, $prefix:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub struct $name(pub u64);

        impl $name {
            pub fn value(self) -> u64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($prefix, "_{}"), self.0)
            }
        }

        impl From<u64> for $name {
            fn from(value: u64) -> Self {
                Self(value)
            }
        }

        impl From<$name> for u64 {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

define_id!(ActorId, "actor");
define_id!(DirectorId, "director");
define_id!(MovieId, "movie");
define_id!(CastingId, "casting");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_display_with_their_prefix() {
        assert_eq!(ActorId(1).to_string(), "actor_1");
        assert_eq!(MovieId::from(12).to_string(), "movie_12");
        assert_eq!(u64::from(DirectorId(3)), 3);
    }

    #[test]
    fn ids_order_by_value() {
        let mut ids = vec![CastingId(3), CastingId(1), CastingId(2)];
        ids.sort();
        assert_eq!(ids, vec![CastingId(1), CastingId(2), CastingId(3)]);
    }
}
