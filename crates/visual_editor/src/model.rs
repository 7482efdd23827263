//! Editor data model
//!
//! The model is owned by the consumer. The editor only ever builds new values
//! from old ones (copy-on-write) and hands them back through the binder.

use serde::{Deserialize, Serialize};

use crate::errors::Result;

/// A position in pixels, relative to whatever origin the caller states.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A measured or configured extent in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Dimensions of the drop surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Container {
    pub width: f32,
    pub height: f32,
}

impl Container {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

/// One positioned block on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockData {
    pub top: f32,
    pub left: f32,
    /// Key of the registered component that renders this block
    pub component_key: String,
    /// One-shot: center the block on its drop point once it has been measured
    pub adjust_position: bool,
}

impl BlockData {
    /// A freshly dropped block, anchored at the pointer position until measured.
    pub fn dropped(component_key: impl Into<String>, at: Point) -> Self {
        Self {
            top: at.y,
            left: at.x,
            component_key: component_key.into(),
            adjust_position: true,
        }
    }

    pub fn position(&self) -> Point {
        Point::new(self.left, self.top)
    }
}

/// The externally owned editor state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelValue {
    pub container: Container,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blocks: Option<Vec<BlockData>>,
}

impl ModelValue {
    pub fn new(container: Container) -> Self {
        Self {
            container,
            blocks: None,
        }
    }

    /// Blocks in render order. An absent list reads as empty.
    pub fn blocks(&self) -> &[BlockData] {
        self.blocks.as_deref().unwrap_or(&[])
    }

    /// Returns a new model with `block` appended, creating the list if needed.
    pub fn with_block(&self, block: BlockData) -> Self {
        let mut blocks = self.blocks().to_vec();
        blocks.push(block);
        Self {
            container: self.container,
            blocks: Some(blocks),
        }
    }

    /// Returns a new model with the block at `index` replaced.
    pub fn with_block_replaced(&self, index: usize, block: BlockData) -> Option<Self> {
        if index >= self.blocks().len() {
            return None;
        }
        let mut blocks = self.blocks().to_vec();
        blocks[index] = block;
        Some(Self {
            container: self.container,
            blocks: Some(blocks),
        })
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_blocks_read_as_empty() {
        let model = ModelValue::new(Container::new(800.0, 600.0));
        assert!(model.blocks.is_none());
        assert!(model.blocks().is_empty());
    }

    #[test]
    fn test_with_block_leaves_original_untouched() {
        let model = ModelValue::new(Container::new(800.0, 600.0));
        let next = model.with_block(BlockData::dropped("text", Point::new(10.0, 20.0)));

        assert!(model.blocks.is_none());
        assert_eq!(next.blocks().len(), 1);
        assert_eq!(next.container, model.container);

        let after = next.with_block(BlockData::dropped("button", Point::new(0.0, 0.0)));
        assert_eq!(next.blocks().len(), 1);
        assert_eq!(after.blocks().len(), 2);
        assert_eq!(after.blocks()[1].component_key, "button");
    }

    #[test]
    fn test_with_block_replaced_out_of_range() {
        let model = ModelValue::new(Container::new(100.0, 100.0));
        assert!(model
            .with_block_replaced(0, BlockData::dropped("text", Point::default()))
            .is_none());
    }

    #[test]
    fn test_dropped_block_layout() {
        let block = BlockData::dropped("text", Point::new(120.0, 80.0));
        assert_eq!(block.left, 120.0);
        assert_eq!(block.top, 80.0);
        assert!(block.adjust_position);
        assert_eq!(block.position(), Point::new(120.0, 80.0));
    }

    #[test]
    fn test_json_uses_camel_case_fields() {
        let model = ModelValue::new(Container::new(800.0, 600.0))
            .with_block(BlockData::dropped("text", Point::new(1.0, 2.0)));
        let json = model.to_json_pretty().unwrap();
        assert!(json.contains("\"componentKey\""));
        assert!(json.contains("\"adjustPosition\""));

        let parsed = ModelValue::from_json(&json).unwrap();
        assert_eq!(parsed, model);
    }

    #[test]
    fn test_json_without_blocks() {
        let parsed = ModelValue::from_json(r#"{"container":{"width":800,"height":600}}"#).unwrap();
        assert!(parsed.blocks.is_none());
        assert_eq!(parsed.container.size(), Size::new(800.0, 600.0));

        let json = parsed.to_json_pretty().unwrap();
        assert!(!json.contains("blocks"));
    }
}
