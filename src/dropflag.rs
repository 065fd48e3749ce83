//! This module is for testing only

use crate::Cloneable;
use std::rc::Rc;
use std::cell::RefCell;

pub type DropFlag<T> = Rc<RefCell<T>>;

/// Counts live instances: incremented on construction and clone, decremented on drop.
pub fn live_counter() -> DropFlag<i64> {
    DropFlag::new(RefCell::new(0))
}

pub trait Shape {
    fn display(&self) -> &'static str;
    fn box_clone(&self) -> Box<dyn Shape>;
    fn value(&self) -> i32;
    fn set_value(&mut self, value: i32);
}

impl Cloneable for dyn Shape {
    fn clone_boxed(&self) -> Box<dyn Shape> {
        self.box_clone()
    }
}

impl std::fmt::Debug for dyn Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.display(), self.value())
    }
}

macro_rules! shape {
    ($name:ident) => {
        pub struct $name {
            value: i32,
            live: DropFlag<i64>,
        }

        impl $name {
            pub fn new(value: i32) -> $name {
                $name::tracked(value, &live_counter())
            }

            pub fn tracked(value: i32, live: &DropFlag<i64>) -> $name {
                *live.borrow_mut() += 1;
                $name { value, live: live.clone() }
            }
        }

        impl Shape for $name {
            fn display(&self) -> &'static str {
                stringify!($name)
            }

            fn box_clone(&self) -> Box<dyn Shape> {
                Box::new($name::tracked(self.value, &self.live))
            }

            fn value(&self) -> i32 {
                self.value
            }

            fn set_value(&mut self, value: i32) {
                self.value = value;
            }
        }

        impl Drop for $name {
            fn drop(&mut self) {
                *self.live.borrow_mut() -= 1;
            }
        }
    };
}

shape!(Circle);
shape!(Square);

/// Shorthand for a tracked shape of either kind, picked by parity like the mixed fixtures.
pub fn boxed_shape(value: i32, live: &DropFlag<i64>) -> Box<dyn Shape> {
    if value % 2 == 0 {
        Box::new(Square::tracked(value, live))
    } else {
        Box::new(Circle::tracked(value, live))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Person {
    pub name: String,
    pub age: u32,
}

impl Person {
    pub fn new(name: &str, age: u32) -> Person {
        Person { name: name.to_string(), age }
    }
}

#[test]
fn dropflag() {
    let live = live_counter();
    let circle = Circle::tracked(7, &live);
    let copy = circle.box_clone();
    assert_eq!(2, *live.borrow());
    std::mem::drop(circle);
    assert_eq!(1, *live.borrow());
    std::mem::drop(copy);
    assert_eq!(0, *live.borrow());
}
