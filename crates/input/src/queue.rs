//! Bounded single-consumer queue of player actions.
//!
//! Key events may arrive several times between two frames (terminal
//! auto-repeat). They are pushed here as they are read and drained in one go
//! at the start of the next frame.

use arrayvec::ArrayVec;

use crate::types::PlayerAction;

/// Maximum actions buffered between two frames.
pub const INPUT_QUEUE_CAPACITY: usize = 32;

#[derive(Debug, Clone, Default)]
pub struct InputQueue {
    pending: ArrayVec<PlayerAction, INPUT_QUEUE_CAPACITY>,
    dropped: u64,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an action. Returns false (and counts a drop) when full.
    pub fn push(&mut self, action: PlayerAction) -> bool {
        match self.pending.try_push(action) {
            Ok(()) => true,
            Err(_) => {
                self.dropped += 1;
                log::warn!(
                    "input queue full ({} pending), dropping {}",
                    INPUT_QUEUE_CAPACITY,
                    action.as_str()
                );
                false
            }
        }
    }

    /// Take every pending action in arrival order.
    pub fn drain(&mut self) -> ArrayVec<PlayerAction, INPUT_QUEUE_CAPACITY> {
        std::mem::take(&mut self.pending)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Total actions dropped because the queue was full.
    pub fn dropped(&self) -> u64 {
        self.dropped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drains_in_arrival_order() {
        let mut q = InputQueue::new();
        assert!(q.push(PlayerAction::MoveForward));
        assert!(q.push(PlayerAction::RotateLeft));

        let drained = q.drain();
        assert_eq!(
            drained.as_slice(),
            &[PlayerAction::MoveForward, PlayerAction::RotateLeft]
        );
        assert!(q.is_empty());
    }

    #[test]
    fn drops_when_full() {
        let mut q = InputQueue::new();
        for _ in 0..INPUT_QUEUE_CAPACITY {
            assert!(q.push(PlayerAction::RotateRight));
        }
        assert!(!q.push(PlayerAction::MoveBackward));
        assert_eq!(q.len(), INPUT_QUEUE_CAPACITY);
        assert_eq!(q.dropped(), 1);
    }
}
