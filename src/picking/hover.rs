use crate::scene::ObjectId;

/// Transition of the hovered object between two updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverChange {
    /// The cursor moved onto an object from empty space.
    Entered(ObjectId),
    /// The cursor left an object for empty space.
    Exited(ObjectId),
    /// The cursor moved directly from one object to another.
    Changed {
        /// Object the cursor left.
        from: ObjectId,
        /// Object the cursor is now over.
        to: ObjectId,
    },
}

/// Tracks which object is under the cursor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HoverState {
    hovered: Option<ObjectId>,
}

impl HoverState {
    /// Object currently under the cursor.
    #[must_use]
    pub fn hovered(&self) -> Option<ObjectId> {
        self.hovered
    }

    /// Record the latest pick result and report what changed.
    pub fn update(&mut self, hit: Option<ObjectId>) -> Option<HoverChange> {
        let previous = std::mem::replace(&mut self.hovered, hit);
        match (previous, hit) {
            (None, Some(id)) => Some(HoverChange::Entered(id)),
            (Some(id), None) => Some(HoverChange::Exited(id)),
            (Some(from), Some(to)) if from != to => {
                Some(HoverChange::Changed { from, to })
            }
            _ => None,
        }
    }

    /// Forget the hovered object.
    pub fn clear(&mut self) -> Option<HoverChange> {
        self.update(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enter_change_exit_sequence() {
        let (a, b) = (ObjectId(1), ObjectId(2));
        let mut hover = HoverState::default();
        assert_eq!(hover.update(Some(a)), Some(HoverChange::Entered(a)));
        assert_eq!(hover.update(Some(a)), None);
        assert_eq!(
            hover.update(Some(b)),
            Some(HoverChange::Changed { from: a, to: b })
        );
        assert_eq!(hover.hovered(), Some(b));
        assert_eq!(hover.clear(), Some(HoverChange::Exited(b)));
        assert_eq!(hover.clear(), None);
    }
}
