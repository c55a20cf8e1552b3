use std::sync::atomic::{AtomicU64, Ordering};

// Single static counter for all drawables
static NEXT_DRAWABLE_ID: AtomicU64 = AtomicU64::new(1);

/// Handle identifying one drawable (and the gesture that creates it)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DrawableId(u64);

impl std::fmt::Display for DrawableId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

pub fn generate_id() -> DrawableId {
    DrawableId(NEXT_DRAWABLE_ID.fetch_add(1, Ordering::Relaxed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_increasing() {
        let first = generate_id();
        let second = generate_id();
        assert!(second > first);
        assert_ne!(first, second);
    }
}
