//! State primitives for the roster admin panel.
//!
//! - [`Observable`] / [`ObservableReader`]: reactive cells shared between widgets
//! - [`Property`]: get/set binding used by form fields
//! - [`StateCtx`]: typed registry the app stores its states in

mod ctx;
mod error;
mod observable;
mod property;
mod state;

pub use ctx::StateCtx;
pub use error::Error;
pub use observable::{Observable, ObservableReader};
pub use property::Property;
pub use state::State;
