/// Produces a new, independently owned copy of a value behind a `Box`.
///
/// This is what `PtrArray` uses to deep-copy its elements. Any sized `Clone` type gets it
/// for free. Trait objects implement it by hand, forwarding to a per-type method:
///
/// ```
/// use ptrarray::Cloneable;
///
/// trait Shape {
///     fn box_clone(&self) -> Box<dyn Shape>;
///     fn value(&self) -> i32;
/// }
///
/// impl Cloneable for dyn Shape {
///     fn clone_boxed(&self) -> Box<dyn Shape> {
///         self.box_clone()
///     }
/// }
/// ```
pub trait Cloneable {
    fn clone_boxed(&self) -> Box<Self>;
}

impl<T> Cloneable for T where T: Clone {
    #[inline(always)]
    fn clone_boxed(&self) -> Box<T> {
        Box::new(self.clone())
    }
}
