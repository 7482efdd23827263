//! Mount-time centering of freshly dropped blocks

use crate::model::{BlockData, Size};

impl BlockData {
    /// Shift the block so its drop point becomes its visual center.
    ///
    /// Only applies while `adjust_position` is set, and clears it. Returns
    /// whether the block moved.
    pub fn adjust_to_measured(&mut self, measured: Size) -> bool {
        if !self.adjust_position {
            return false;
        }

        self.left -= measured.width / 2.0;
        self.top -= measured.height / 2.0;
        self.adjust_position = false;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Point;

    #[test]
    fn test_adjust_centers_block() {
        let mut block = BlockData::dropped("text", Point::new(120.0, 80.0));

        assert!(block.adjust_to_measured(Size::new(100.0, 40.0)));

        assert_eq!(block.left, 70.0);
        assert_eq!(block.top, 60.0);
        assert!(!block.adjust_position);
    }

    #[test]
    fn test_adjust_is_one_shot() {
        let mut block = BlockData::dropped("text", Point::new(120.0, 80.0));
        block.adjust_to_measured(Size::new(100.0, 40.0));

        assert!(!block.adjust_to_measured(Size::new(100.0, 40.0)));
        assert_eq!(block.position(), Point::new(70.0, 60.0));
    }
}
