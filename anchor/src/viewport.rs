use crate::ViewportSize;

/// Global viewport, its size and resize notifications.
///
/// Subscriptions follow `addEventListener` semantics: subscribing the same
/// listener twice registers it once and unsubscribing a listener which is
/// not subscribed does nothing.
pub trait ViewportEvents {
    type Listener;

    /// Creates a listener which can be repeatedly subscribed and unsubscribed.
    fn listener(&self, handler: Box<dyn Fn()>) -> Self::Listener;

    fn size(&self) -> ViewportSize;

    fn subscribe(&self, listener: &Self::Listener);

    fn unsubscribe(&self, listener: &Self::Listener);
}

impl<V: ViewportEvents + ?Sized> ViewportEvents for std::rc::Rc<V> {
    type Listener = V::Listener;

    fn listener(&self, handler: Box<dyn Fn()>) -> Self::Listener {
        (**self).listener(handler)
    }

    fn size(&self) -> ViewportSize {
        (**self).size()
    }

    fn subscribe(&self, listener: &Self::Listener) {
        (**self).subscribe(listener)
    }

    fn unsubscribe(&self, listener: &Self::Listener) {
        (**self).unsubscribe(listener)
    }
}
