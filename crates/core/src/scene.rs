//! Scene state machine shared by the slider and rain games.
//!
//! A scene is a [`SceneState`] plus a row cursor used by the row-by-row
//! reveal and clear animations. Every state change resets the cursor and is
//! reported once through [`Scene::set`].

use log::info;

use crate::types::SceneState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scene {
    state: SceneState,
    row: u8,
    rows: u8,
}

impl Scene {
    /// Scene animating over `rows` rows, starting in `state`
    pub fn new(state: SceneState, rows: u8) -> Self {
        Self { state, row: 0, rows }
    }

    pub fn state(&self) -> SceneState {
        self.state
    }

    /// Next row the animation will touch
    pub fn row(&self) -> u8 {
        self.row
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    pub fn is_playing(&self) -> bool {
        self.state.accepts_input()
    }

    /// Switch state and rewind the row cursor.
    ///
    /// Returns false (and changes nothing) if already in `state`.
    pub fn set(&mut self, state: SceneState) -> bool {
        if self.state == state {
            return false;
        }
        info!("scene {} -> {}", self.state.as_str(), state.as_str());
        self.state = state;
        self.row = 0;
        true
    }

    /// Claim the next animation row, `None` once every row is done
    pub fn next_row(&mut self) -> Option<u8> {
        if self.row < self.rows {
            let row = self.row;
            self.row += 1;
            Some(row)
        } else {
            None
        }
    }

    /// Whether every row has been animated
    pub fn rows_done(&self) -> bool {
        self.row >= self.rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_are_claimed_in_order() {
        let mut scene = Scene::new(SceneState::Loading, 3);
        assert_eq!(scene.next_row(), Some(0));
        assert_eq!(scene.next_row(), Some(1));
        assert_eq!(scene.next_row(), Some(2));
        assert_eq!(scene.next_row(), None);
        assert!(scene.rows_done());
    }

    #[test]
    fn test_set_rewinds_cursor() {
        let mut scene = Scene::new(SceneState::Loading, 3);
        scene.next_row();
        assert!(scene.set(SceneState::Playing));
        assert_eq!(scene.row(), 0);
        assert!(scene.is_playing());
    }

    #[test]
    fn test_set_same_state_is_noop() {
        let mut scene = Scene::new(SceneState::Won, 3);
        scene.next_row();
        assert!(!scene.set(SceneState::Won));
        assert_eq!(scene.row(), 1);
    }
}
