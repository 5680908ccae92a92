//! Leptos DragDrop Utilities
//!
//! Free-form pointer dragging for Leptos using mouse events.
//! Uses movement threshold to distinguish click from drag, keeps the
//! dragged element inside a container with an elastic overshoot, and snaps
//! back to the container edge on release.

use leptos::html::Div;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Translation applied to a dragged element, in pixels
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Offset {
    pub x: f64,
    pub y: f64,
}

impl Offset {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Plain copy of a client rect so the constraint math works off-DOM
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl From<&web_sys::DomRect> for Rect {
    fn from(r: &web_sys::DomRect) -> Self {
        Self {
            left: r.left(),
            top: r.top(),
            right: r.right(),
            bottom: r.bottom(),
        }
    }
}

/// Range of offsets that keep the element inside its container
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Bounds {
    /// `element` is measured with `current` already applied.
    /// An element larger than its container is pinned at its current offset on that axis.
    pub fn from_rects(container: Rect, element: Rect, current: Offset) -> Self {
        let min_x = current.x + (container.left - element.left);
        let max_x = current.x + (container.right - element.right);
        let min_y = current.y + (container.top - element.top);
        let max_y = current.y + (container.bottom - element.bottom);
        Self {
            min_x: min_x.min(current.x),
            max_x: max_x.max(current.x),
            min_y: min_y.min(current.y),
            max_y: max_y.max(current.y),
        }
    }

    /// Offset while dragging: overflow past an edge is scaled by `elastic`
    pub fn elastic(&self, raw: Offset, elastic: f64) -> Offset {
        Offset {
            x: rubber_band(raw.x, self.min_x, self.max_x, elastic),
            y: rubber_band(raw.y, self.min_y, self.max_y, elastic),
        }
    }

    /// Offset after release
    pub fn clamp(&self, offset: Offset) -> Offset {
        Offset {
            x: offset.x.clamp(self.min_x, self.max_x),
            y: offset.y.clamp(self.min_y, self.max_y),
        }
    }
}

pub fn rubber_band(value: f64, min: f64, max: f64, elastic: f64) -> f64 {
    let elastic = elastic.clamp(0.0, 1.0);
    if value < min {
        min - (min - value) * elastic
    } else if value > max {
        max + (value - max) * elastic
    } else {
        value
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragOptions {
    /// Share of the overflow that is still applied past the container edge
    pub elastic: f64,
    /// Movement threshold in pixels to start dragging
    pub threshold_px: i32,
}

impl Default for DragOptions {
    fn default() -> Self {
        Self {
            elastic: 0.7,
            threshold_px: 3,
        }
    }
}

/// Pointer went down on an element (may not be dragging yet)
#[derive(Clone, Copy, Debug)]
struct PendingDrag<K: Copy + Send + Sync + 'static> {
    id: K,
    offset: RwSignal<Offset>,
    start_x: i32,
    start_y: i32,
    origin: Offset,
    bounds: Bounds,
    started: bool,
}

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals<K: Copy + Send + Sync + 'static> {
    pub dragging_id: RwSignal<Option<K>>,
    pending: StoredValue<Option<PendingDrag<K>>>,
    pub options: DragOptions,
}

pub fn create_dnd_signals<K>(options: DragOptions) -> DndSignals<K>
where
    K: Copy + PartialEq + Send + Sync + 'static,
{
    DndSignals {
        dragging_id: RwSignal::new(None),
        pending: StoredValue::new(None),
        options,
    }
}

/// Create mousedown handler for a draggable element
/// Records pending drag with start position and the container bounds
pub fn make_on_mousedown<K>(
    dnd: DndSignals<K>,
    id: K,
    offset: RwSignal<Offset>,
    container: NodeRef<Div>,
) -> impl Fn(web_sys::MouseEvent) + Copy + 'static
where
    K: Copy + PartialEq + Send + Sync + 'static,
{
    move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 {
            return;
        }
        // Ignore if target is a form control or button
        if let Some(target) = ev.target() {
            if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
            if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
            if target.dyn_ref::<web_sys::HtmlSelectElement>().is_some() { return; }
            if target.dyn_ref::<web_sys::HtmlTextAreaElement>().is_some() { return; }
            if let Some(el) = target.dyn_ref::<web_sys::Element>() {
                if el.closest("button").ok().flatten().is_some() { return; }
            }
        }
        let Some(element) = ev
            .current_target()
            .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
        else {
            return;
        };
        let Some(container_el) = container.get_untracked() else { return };

        let current = offset.get_untracked();
        let bounds = Bounds::from_rects(
            Rect::from(&container_el.get_bounding_client_rect()),
            Rect::from(&element.get_bounding_client_rect()),
            current,
        );
        ev.prevent_default();
        dnd.pending.set_value(Some(PendingDrag {
            id,
            offset,
            start_x: ev.client_x(),
            start_y: ev.client_y(),
            origin: current,
            bounds,
            started: false,
        }));
    }
}

/// Bind global mousemove handler - starts drag if moved enough, then follows the pointer
pub fn bind_global_mousemove<K>(dnd: DndSignals<K>)
where
    K: Copy + PartialEq + Send + Sync + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let Some(mut pending) = dnd.pending.try_get_value().flatten() else { return };
        let dx = ev.client_x() - pending.start_x;
        let dy = ev.client_y() - pending.start_y;

        if !pending.started {
            if dx.abs() <= dnd.options.threshold_px && dy.abs() <= dnd.options.threshold_px {
                return;
            }
            pending.started = true;
            dnd.pending.set_value(Some(pending));
            dnd.dragging_id.set(Some(pending.id));
        }

        let raw = Offset::new(pending.origin.x + dx as f64, pending.origin.y + dy as f64);
        // The element may have been removed mid-drag
        let _ = pending.offset.try_set(pending.bounds.elastic(raw, dnd.options.elastic));
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
        }
    }
    on_mousemove.forget();
}

/// Bind global mouseup handler: snaps the element back inside its bounds
/// and reports the resting offset
pub fn bind_global_mouseup<K, F>(dnd: DndSignals<K>, on_release: F)
where
    K: Copy + PartialEq + Send + Sync + 'static,
    F: Fn(K, Offset) + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let pending = dnd.pending.try_get_value().flatten();
        dnd.pending.set_value(None);

        let Some(pending) = pending else { return };
        if !pending.started {
            // Click event will fire naturally on the element
            return;
        }
        dnd.dragging_id.set(None);
        let rest = pending
            .offset
            .try_update(|o| {
                *o = pending.bounds.clamp(*o);
                *o
            });
        if let Some(rest) = rest {
            on_release(pending.id, rest);
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
        }
    }
    on_mouseup.forget();

    // Also bind global mousemove
    bind_global_mousemove(dnd);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn container() -> Rect {
        Rect { left: 0.0, top: 0.0, right: 500.0, bottom: 400.0 }
    }

    #[test]
    fn test_bounds_from_rects() {
        // 100x100 element at (50, 50) with no offset applied
        let element = Rect { left: 50.0, top: 50.0, right: 150.0, bottom: 150.0 };
        let bounds = Bounds::from_rects(container(), element, Offset::default());
        assert_eq!(bounds, Bounds { min_x: -50.0, max_x: 350.0, min_y: -50.0, max_y: 250.0 });
    }

    #[test]
    fn test_bounds_account_for_current_offset() {
        // Same element already translated by (20, 10)
        let element = Rect { left: 70.0, top: 60.0, right: 170.0, bottom: 160.0 };
        let bounds = Bounds::from_rects(container(), element, Offset::new(20.0, 10.0));
        assert_eq!(bounds, Bounds { min_x: -50.0, max_x: 350.0, min_y: -50.0, max_y: 250.0 });
    }

    #[test]
    fn test_oversized_element_is_pinned() {
        let element = Rect { left: -10.0, top: 0.0, right: 600.0, bottom: 100.0 };
        let bounds = Bounds::from_rects(container(), element, Offset::default());
        assert_eq!(bounds.min_x, 0.0);
        assert_eq!(bounds.max_x, 0.0);
    }

    #[test]
    fn test_elastic_inside_bounds_is_identity() {
        let bounds = Bounds { min_x: -50.0, max_x: 350.0, min_y: -50.0, max_y: 250.0 };
        let raw = Offset::new(120.0, -10.0);
        assert_eq!(bounds.elastic(raw, 0.7), raw);
    }

    #[test]
    fn test_elastic_scales_overflow() {
        let bounds = Bounds { min_x: -50.0, max_x: 350.0, min_y: -50.0, max_y: 250.0 };
        let moved = bounds.elastic(Offset::new(450.0, -150.0), 0.5);
        assert_eq!(moved, Offset::new(400.0, -100.0));
    }

    #[test]
    fn test_release_clamps_to_bounds() {
        let bounds = Bounds { min_x: -50.0, max_x: 350.0, min_y: -50.0, max_y: 250.0 };
        assert_eq!(bounds.clamp(Offset::new(420.0, -80.0)), Offset::new(350.0, -50.0));
        assert_eq!(bounds.clamp(Offset::new(10.0, 20.0)), Offset::new(10.0, 20.0));
    }

    #[test]
    fn test_rubber_band_clamps_factor() {
        assert_eq!(rubber_band(10.0, 0.0, 5.0, 3.0), 10.0);
        assert_eq!(rubber_band(10.0, 0.0, 5.0, -1.0), 5.0);
    }
}
