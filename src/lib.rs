#[macro_use]
mod logging;
mod raw;
mod cloneable;
mod error;
mod cursor;
mod iter;
mod array;

pub use cloneable::Cloneable;
pub use error::PtrArrayError;
pub use cursor::Cursor;
pub use iter::{Iter, IterMut, IntoIter};
pub use array::PtrArray;
pub use raw::{grow_capacity, GROWTH_FACTOR, INITIAL_CAPACITY};

#[cfg(test)]
pub mod dropflag;
