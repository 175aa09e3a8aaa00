//! # dom
//!
//! A minimal in-memory text element implementing
//! [`HostElement`](input_core::HostElement), plus the machinery to drive an
//! [`InputNormalizer`](input_core::InputNormalizer) over it.
//!
//! The element can imitate the native event gaps of the engines listed in
//! [`platform`], which is what makes end-to-end checks of the quirk
//! compensation possible without a browser.

mod behavior;
mod element;
mod mutation;
pub mod script;
pub mod simulate;

pub use behavior::{InputEventSupport, NativeBehavior};
pub use element::{Element, Keystroke};
pub use mutation::Mutation;
pub use script::{Replay, Session, SessionError, Step};
