use std::any::Any;

/// Marker for values stored in a [`StateCtx`](crate::StateCtx).
///
/// Implementors only need to forward to `self`; the registry uses these to
/// recover the concrete type.
pub trait State: Any {
    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}
