//! Reactive cells shared between widgets.
//!
//! An [`Observable`] is the owning handle: it can read, write and hand out
//! read-only views. An [`ObservableReader`] can only read or subscribe, so a
//! widget that receives one cannot become a second writer.
//!
//! Both handles share the same `Rc`, which keeps them on the UI thread.
//!
//! # Usage
//!
//! ```
//! use roster_states::Observable;
//!
//! let show = Observable::new(false);
//! let reader = show.reader();
//!
//! show.update(|v| *v = !*v);
//! assert!(reader.get());
//! ```

use std::cell::RefCell;
use std::fmt::{Debug, Formatter};
use std::rc::Rc;

use flume::{Receiver, Sender};

use crate::Property;

struct Cell<T> {
    value: RefCell<T>,
    subscribers: RefCell<Vec<Sender<T>>>,
}

impl<T: Clone> Cell<T> {
    fn notify(&self) {
        let value = self.value.borrow().clone();
        // Receivers that were dropped are pruned here.
        self.subscribers
            .borrow_mut()
            .retain(|sender| sender.send(value.clone()).is_ok());
    }

    fn subscribe(&self) -> Receiver<T> {
        let (send, recv) = flume::unbounded();
        self.subscribers.borrow_mut().push(send);
        recv
    }
}

/// Owning handle of a reactive cell.
///
/// Cloning shares the cell, it does not copy the value.
pub struct Observable<T> {
    cell: Rc<Cell<T>>,
}

impl<T> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Self {
            cell: Rc::clone(&self.cell),
        }
    }
}

impl<T: Default + Clone> Default for Observable<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Debug> Debug for Observable<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Observable")
            .field(&*self.cell.value.borrow())
            .finish()
    }
}

impl<T: Clone> Observable<T> {
    pub fn new(value: T) -> Self {
        Self {
            cell: Rc::new(Cell {
                value: RefCell::new(value),
                subscribers: RefCell::new(Vec::new()),
            }),
        }
    }

    pub fn get(&self) -> T {
        self.cell.value.borrow().clone()
    }

    /// Replaces the value and notifies subscribers.
    pub fn set(&self, value: T) {
        *self.cell.value.borrow_mut() = value;
        self.cell.notify();
    }

    /// Mutates the value in place and notifies subscribers.
    pub fn update(&self, f: impl FnOnce(&mut T)) {
        f(&mut self.cell.value.borrow_mut());
        self.cell.notify();
    }

    /// Read-only view over the same cell.
    pub fn reader(&self) -> ObservableReader<T> {
        ObservableReader {
            cell: Rc::clone(&self.cell),
        }
    }

    /// Every later write is delivered to the returned receiver.
    pub fn subscribe(&self) -> Receiver<T> {
        self.cell.subscribe()
    }

    /// Returns `true` when both handles point at the same cell.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.cell, &other.cell)
    }
}

impl<T: Clone> Property<T> for Observable<T> {
    fn get(&self) -> T {
        Observable::get(self)
    }

    fn set(&self, value: T) {
        Observable::set(self, value);
    }
}

/// Read-only view of an [`Observable`].
pub struct ObservableReader<T> {
    cell: Rc<Cell<T>>,
}

impl<T> Clone for ObservableReader<T> {
    fn clone(&self) -> Self {
        Self {
            cell: Rc::clone(&self.cell),
        }
    }
}

impl<T: Debug> Debug for ObservableReader<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ObservableReader")
            .field(&*self.cell.value.borrow())
            .finish()
    }
}

impl<T: Clone> ObservableReader<T> {
    pub fn get(&self) -> T {
        self.cell.value.borrow().clone()
    }

    pub fn subscribe(&self) -> Receiver<T> {
        self.cell.subscribe()
    }
}
