/// Attachment contract between a widget and the host which owns its element.
///
/// The host resolves the widget's references before calling
/// [`on_attach`](Lifecycle::on_attach) and calls
/// [`on_detach`](Lifecycle::on_detach) once the element leaves the document.
/// A widget may be attached again after it was detached.
pub trait Lifecycle {
    type Refs;

    fn on_attach(&self, refs: Self::Refs);

    fn on_detach(&self);
}
