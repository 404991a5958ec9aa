use crate::domain::{Bounds, Coordinates};
use tracing::warn;

#[derive(Debug, PartialEq)]
pub enum MoveOutcome {
    Accepted,
    /// The viewport left the bounds and must be rebuilt around this center.
    Reset(Coordinates),
}

/// Keeps the map viewport inside the allowed region.
#[derive(Debug)]
pub struct BoundsGuard {
    bounds: Bounds,
    last_valid_center: Coordinates,
}

impl BoundsGuard {
    pub fn new(bounds: Bounds, initial_center: Coordinates) -> Self {
        BoundsGuard {
            bounds,
            last_valid_center: initial_center,
        }
    }

    #[cfg(test)]
    pub fn last_valid_center(&self) -> Coordinates {
        self.last_valid_center
    }

    pub fn on_move(&mut self, center: Coordinates) -> MoveOutcome {
        if self.bounds.contains(&center) {
            self.last_valid_center = center;
            return MoveOutcome::Accepted;
        }

        warn!("⚠️ Map center {} is out of bounds, resetting to {}", center, self.last_valid_center);
        MoveOutcome::Reset(self.last_valid_center)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn guard() -> BoundsGuard {
        BoundsGuard::new(Bounds::TABASCO, Coordinates::new(17.989, -92.933))
    }

    #[test]
    fn accepts_a_center_inside_the_bounds() {
        let mut guard = guard();

        assert_eq!(guard.on_move(Coordinates::new(18.0, -92.0)), MoveOutcome::Accepted);
        assert_eq!(guard.last_valid_center(), Coordinates::new(18.0, -92.0));
    }

    #[test]
    fn resets_to_the_initial_center_before_any_valid_move() {
        let mut guard = guard();

        assert_eq!(
            guard.on_move(Coordinates::new(19.0, -92.933)),
            MoveOutcome::Reset(Coordinates::new(17.989, -92.933))
        );
    }

    #[test]
    fn resets_to_the_last_valid_center() {
        let mut guard = guard();
        guard.on_move(Coordinates::new(18.2, -91.5));

        assert_eq!(
            guard.on_move(Coordinates::new(18.2, -89.0)),
            MoveOutcome::Reset(Coordinates::new(18.2, -91.5))
        );
        assert_eq!(guard.last_valid_center(), Coordinates::new(18.2, -91.5));
    }
}
