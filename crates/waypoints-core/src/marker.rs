//! A single user-placed landmark.

use crate::coord::ProjectedCoord;

/// A waypoint on the map.
///
/// Deleting a marker only clears `alive`; the entry stays in the store's
/// backing sequence until the whole sequence is replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Marker {
    position: ProjectedCoord,
    alive: bool,
}

impl Marker {
    /// Create a new live marker.
    pub fn new(position: ProjectedCoord) -> Self {
        Self {
            position,
            alive: true,
        }
    }

    pub fn position(&self) -> ProjectedCoord {
        self.position
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Tombstone the marker. There is no way back.
    pub(crate) fn kill(&mut self) {
        self.alive = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_marker_is_alive() {
        let marker = Marker::new(ProjectedCoord::new(3, -4));
        assert!(marker.is_alive());
        assert_eq!(marker.position(), ProjectedCoord::new(3, -4));
    }

    #[test]
    fn test_kill_keeps_position() {
        let mut marker = Marker::new(ProjectedCoord::new(3, -4));
        marker.kill();
        marker.kill();
        assert!(!marker.is_alive());
        assert_eq!(marker.position(), ProjectedCoord::new(3, -4));
    }
}
