use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use visual_editor::{
    BlockData, ComponentRegistry, Container, DragEvent, DragListener, DropSurface, ModelBinder,
    ModelValue, Point, Size, VisualEditor,
};

/// Drop surface that behaves like a DOM node: every attached listener fires,
/// duplicates included.
#[derive(Default)]
struct ListenerSurface {
    attached: HashMap<DragListener, usize>,
}

impl ListenerSurface {
    fn listeners(&self, listener: DragListener) -> usize {
        self.attached.get(&listener).copied().unwrap_or(0)
    }

    fn fire(
        &self,
        editor: &mut VisualEditor<String>,
        listener: DragListener,
        event: &mut DragEvent,
    ) -> Vec<BlockData> {
        (0..self.listeners(listener))
            .filter_map(|_| editor.handle(listener, event))
            .collect()
    }
}

impl DropSurface for ListenerSurface {
    fn attach(&mut self, listener: DragListener) {
        *self.attached.entry(listener).or_default() += 1;
    }

    fn detach(&mut self, listener: DragListener) {
        self.attached.remove(&listener);
    }
}

struct Harness {
    editor: VisualEditor<String>,
    owner: Arc<RwLock<ModelValue>>,
    writes: Arc<RwLock<Vec<ModelValue>>>,
    surface: ListenerSurface,
}

fn harness() -> Harness {
    let owner = Arc::new(RwLock::new(ModelValue::new(Container::new(800.0, 600.0))));
    let writes = Arc::new(RwLock::new(Vec::new()));

    let read = owner.clone();
    let write_owner = owner.clone();
    let write_log = writes.clone();
    let binder = ModelBinder::new(
        move || Some(read.read().clone()),
        move |model: &ModelValue| {
            write_log.write().push(model.clone());
            *write_owner.write() = model.clone();
        },
    );

    let mut registry = ComponentRegistry::new();
    registry.register("text", "Text", || "Text".to_string(), || "Rendered text".to_string());

    Harness {
        editor: VisualEditor::new(registry, binder),
        owner,
        writes,
        surface: ListenerSurface::default(),
    }
}

fn drag_and_drop(h: &mut Harness, key: &str, at: Point) -> Vec<BlockData> {
    h.editor.begin_drag(key, &mut h.surface).unwrap();

    let mut event = DragEvent::at(at);
    h.surface.fire(&mut h.editor, DragListener::Enter, &mut event);
    h.surface.fire(&mut h.editor, DragListener::Over, &mut event);
    let dropped = h.surface.fire(&mut h.editor, DragListener::Drop, &mut event);

    h.editor.end_drag(&mut h.surface);
    dropped
}

#[test]
fn test_drop_text_onto_empty_canvas() {
    let mut h = harness();

    let dropped = drag_and_drop(&mut h, "text", Point::new(120.0, 80.0));

    assert_eq!(dropped.len(), 1);
    let expected = BlockData {
        top: 80.0,
        left: 120.0,
        component_key: "text".to_string(),
        adjust_position: true,
    };
    assert_eq!(h.owner.read().blocks(), &[expected]);
    assert_eq!(h.owner.read().container, Container::new(800.0, 600.0));
}

#[test]
fn test_drag_end_detaches_every_listener() {
    let mut h = harness();

    // Cancelled: no drop before the end
    h.editor.begin_drag("text", &mut h.surface).unwrap();
    for listener in DragListener::ALL {
        assert_eq!(h.surface.listeners(listener), 1);
    }
    h.editor.end_drag(&mut h.surface);
    for listener in DragListener::ALL {
        assert_eq!(h.surface.listeners(listener), 0);
    }
    assert!(!h.editor.is_dragging());

    // Completed
    drag_and_drop(&mut h, "text", Point::new(1.0, 2.0));
    for listener in DragListener::ALL {
        assert_eq!(h.surface.listeners(listener), 0);
    }
}

#[test]
fn test_drop_without_drag_leaves_model_alone() {
    let mut h = harness();
    let before = h.owner.read().clone();

    let mut event = DragEvent::at(Point::new(10.0, 10.0));
    assert!(h.editor.handle(DragListener::Drop, &mut event).is_none());

    assert_eq!(*h.owner.read(), before);
    assert!(h.writes.read().is_empty());
}

#[test]
fn test_repeated_drag_start_fires_drop_once() {
    let mut h = harness();

    h.editor.begin_drag("text", &mut h.surface).unwrap();
    let dropped = drag_and_drop(&mut h, "text", Point::new(50.0, 60.0));

    assert_eq!(dropped.len(), 1);
    assert_eq!(h.owner.read().blocks().len(), 1);
    assert_eq!(h.writes.read().len(), 1);
}

#[test]
fn test_second_drop_in_same_drag_is_ignored() {
    let mut h = harness();

    h.editor.begin_drag("text", &mut h.surface).unwrap();
    let mut event = DragEvent::at(Point::new(120.0, 80.0));
    h.surface.fire(&mut h.editor, DragListener::Over, &mut event);
    let first = h.surface.fire(&mut h.editor, DragListener::Drop, &mut event);
    assert_eq!(first.len(), 1);
    assert!(!h.editor.is_dragging());

    let mut again = DragEvent::at(Point::new(300.0, 200.0));
    let second = h.surface.fire(&mut h.editor, DragListener::Drop, &mut again);
    assert!(second.is_empty());

    // Listeners stay until the end, then every one is detached
    assert_eq!(h.surface.listeners(DragListener::Drop), 1);
    h.editor.end_drag(&mut h.surface);
    for listener in DragListener::ALL {
        assert_eq!(h.surface.listeners(listener), 0);
    }

    assert_eq!(h.owner.read().blocks().len(), 1);
    assert_eq!(h.owner.read().blocks()[0].position(), Point::new(120.0, 80.0));
    assert_eq!(h.writes.read().len(), 1);
}

#[test]
fn test_binder_write_is_visible_immediately() {
    let mut h = harness();
    let value = ModelValue::new(Container::new(320.0, 240.0))
        .with_block(BlockData::dropped("text", Point::new(3.0, 4.0)));

    let owner = h.owner.clone();
    let writes = Arc::new(RwLock::new(0usize));
    let counter = writes.clone();
    let mut binder = ModelBinder::new(
        move || Some(owner.read().clone()),
        move |_: &ModelValue| *counter.write() += 1,
    );

    binder.set(value.clone());

    assert_eq!(binder.value(), Some(&value));
    assert_eq!(*writes.read(), 1);
    // Upstream untouched by this binder's owner callback
    assert_eq!(h.editor.container_size(), Size::new(800.0, 600.0));
}

#[test]
fn test_mount_adjusts_once() {
    let mut h = harness();
    drag_and_drop(&mut h, "text", Point::new(120.0, 80.0));

    assert!(h.editor.block_mounted(0, Size::new(60.0, 30.0)).unwrap());
    let block = h.owner.read().blocks()[0].clone();
    assert_eq!(block.left, 90.0);
    assert_eq!(block.top, 65.0);
    assert!(!block.adjust_position);

    // Re-render of the same block
    assert!(!h.editor.block_mounted(0, Size::new(60.0, 30.0)).unwrap());
    assert_eq!(h.owner.read().blocks()[0], block);
}

#[test]
fn test_second_drop_appends_after_first() {
    let mut h = harness();

    drag_and_drop(&mut h, "text", Point::new(10.0, 10.0));
    let first = h.owner.read().clone();
    drag_and_drop(&mut h, "text", Point::new(20.0, 30.0));

    // Each write is a fresh model, the earlier one is not mutated
    assert_eq!(first.blocks().len(), 1);
    let writes = h.writes.read();
    assert_eq!(writes.len(), 2);
    assert_eq!(writes[0].blocks().len(), 1);
    assert_eq!(writes[1].blocks().len(), 2);
    assert_eq!(writes[1].blocks()[1].position(), Point::new(20.0, 30.0));
}

#[test]
fn test_missing_component_lookup() {
    let mut h = harness();
    *h.owner.write() = ModelValue::new(Container::new(100.0, 100.0))
        .with_block(BlockData::dropped("missing", Point::default()));

    let err = h.editor.render_block(0).unwrap_err();
    assert_eq!(err.to_string(), "Component not registered: missing");
    assert_eq!(err.missing_component(), Some("missing"));

    let err = h.editor.begin_drag("missing", &mut h.surface).unwrap_err();
    assert_eq!(err.missing_component(), Some("missing"));
}

#[test]
fn test_upstream_replacement_is_rendered() {
    let mut h = harness();
    drag_and_drop(&mut h, "text", Point::new(10.0, 10.0));

    *h.owner.write() = ModelValue::new(Container::new(1024.0, 768.0));

    assert_eq!(h.editor.container_size(), Size::new(1024.0, 768.0));
    assert!(h.editor.blocks().is_empty());
    assert_eq!(h.editor.render_block(0).unwrap_err().missing_component(), None);
}
