//! Viewport visibility as a push-based event source.
//!
//! A [`VisibilitySource`] hands out a [`Subscription`] per element: a stream
//! of `bool` intersection states. Dropping the subscription detaches it; the
//! source prunes closed observers on its next refresh.
//!
//! [`ViewportTracker`] is the built-in source. The renderer reports where
//! each element sits on the page (in rows) and where the viewport is, and
//! the tracker pushes edge changes to subscribers.

use std::collections::HashMap;

use tokio::sync::mpsc;
use tracing::debug;

/// Identity of an observed element on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(u32);

impl ElementId {
    #[must_use]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

/// A vertical span on the page, in rows from the top of the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RowSpan {
    pub top: u32,
    pub height: u32,
}

impl RowSpan {
    #[must_use]
    pub const fn new(top: u32, height: u32) -> Self {
        Self { top, height }
    }

    #[must_use]
    pub const fn bottom(self) -> u32 {
        self.top.saturating_add(self.height)
    }

    /// Whether the two spans share at least one row.
    #[must_use]
    pub const fn intersects(self, other: RowSpan) -> bool {
        self.height > 0 && other.height > 0 && self.top < other.bottom() && other.top < self.bottom()
    }
}

pub trait VisibilitySource {
    fn subscribe(&mut self, element: ElementId) -> Subscription;
}

/// Receiving end of an element's visibility stream.
#[derive(Debug)]
pub struct Subscription {
    element: ElementId,
    receiver: mpsc::UnboundedReceiver<bool>,
}

impl Subscription {
    /// Create a connected sender/subscription pair for `element`.
    #[must_use]
    pub fn channel(element: ElementId) -> (mpsc::UnboundedSender<bool>, Self) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            tx,
            Self {
                element,
                receiver: rx,
            },
        )
    }

    #[must_use]
    pub fn element(&self) -> ElementId {
        self.element
    }

    /// Next pending visibility state, without blocking.
    pub fn try_next(&mut self) -> Option<bool> {
        self.receiver.try_recv().ok()
    }
}

#[derive(Debug)]
struct Observer {
    element: ElementId,
    sender: mpsc::UnboundedSender<bool>,
    last: Option<bool>,
}

#[derive(Debug, Default)]
pub struct ViewportTracker {
    viewport: Option<RowSpan>,
    elements: HashMap<ElementId, RowSpan>,
    observers: Vec<Observer>,
}

impl ViewportTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record where an element currently sits on the page.
    pub fn place(&mut self, element: ElementId, span: RowSpan) {
        self.elements.insert(element, span);
    }

    pub fn set_viewport(&mut self, viewport: RowSpan) {
        self.viewport = Some(viewport);
    }

    #[must_use]
    pub fn viewport(&self) -> Option<RowSpan> {
        self.viewport
    }

    #[must_use]
    pub fn is_visible(&self, element: ElementId) -> bool {
        match (self.viewport, self.elements.get(&element)) {
            (Some(viewport), Some(span)) => span.intersects(viewport),
            _ => false,
        }
    }

    /// Recompute intersections and push changes.
    ///
    /// Each observer receives its first known state, then only transitions.
    /// Elements that have not been placed yet produce nothing.
    pub fn refresh(&mut self) {
        self.observers.retain(|observer| !observer.sender.is_closed());

        let Some(viewport) = self.viewport else {
            return;
        };

        for observer in &mut self.observers {
            let Some(span) = self.elements.get(&observer.element) else {
                continue;
            };
            let visible = span.intersects(viewport);
            if observer.last == Some(visible) {
                continue;
            }
            observer.last = Some(visible);
            if observer.sender.send(visible).is_err() {
                debug!(element = observer.element.raw(), "Visibility observer closed");
            }
        }
    }

    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.observers
            .iter()
            .filter(|observer| !observer.sender.is_closed())
            .count()
    }
}

impl VisibilitySource for ViewportTracker {
    fn subscribe(&mut self, element: ElementId) -> Subscription {
        let (sender, subscription) = Subscription::channel(element);
        self.observers.push(Observer {
            element,
            sender,
            last: None,
        });
        subscription
    }
}
