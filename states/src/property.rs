/// A value a widget reads from and writes back to.
///
/// Form fields take `&impl Property<T>` instead of `&mut T` so that the same
/// value can be bound by several widgets in one frame.
pub trait Property<T> {
    fn get(&self) -> T;

    fn set(&self, value: T);
}
