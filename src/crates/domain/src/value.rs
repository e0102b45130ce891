use std::fmt::{self, Display};

// Helper macro to define aggregate ID newtypes and common trait impls
macro_rules! define_id {
    ($name:ident $(, $extra:ident)*) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq $(, $extra)*)]
        pub struct $name(i64);

        impl $name {
            pub fn as_i64(&self) -> i64 {
                self.0
            }
        }

        impl From<i64> for $name {
            fn from(id: i64) -> Self {
                Self(id)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

define_id!(GenreId, Hash, PartialOrd, Ord);
define_id!(BookId, Hash, PartialOrd, Ord);

/// 单调递增的 id 计数器，只会前进，不会复用已发放的 id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdCounter {
    next: i64,
}

impl IdCounter {
    pub fn starting_at(next: i64) -> Self {
        Self { next }
    }

    pub fn peek(&self) -> i64 {
        self.next
    }

    pub fn advance(&mut self) -> i64 {
        let id = self.next;
        self.next += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_hands_out_increasing_ids() {
        let mut counter = IdCounter::starting_at(4);
        assert_eq!(counter.advance(), 4);
        assert_eq!(counter.advance(), 5);
        assert_eq!(counter.peek(), 6);
    }

    #[test]
    fn ids_display_as_plain_numbers() {
        assert_eq!(GenreId::from(7).to_string(), "7");
        assert_eq!(i64::from(BookId::from(3)), 3);
    }
}
