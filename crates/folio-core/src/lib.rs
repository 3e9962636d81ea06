//! Platform-free motion engine for the portfolio front-end.
//!
//! Nothing in here touches the DOM. The web crate feeds pointer samples and
//! layout snapshots in, drives [`FollowLoop`] through a [`FrameScheduler`]
//! backed by `requestAnimationFrame`, and writes the returned
//! [`Transform`]s to elements.

pub mod composer;
pub mod config;
pub mod constants;
pub mod error;
pub mod follow;
pub mod frame;
pub mod hero;
pub mod motion;
pub mod pointer;
pub mod presets;
pub mod rect;
pub mod scaler;
pub mod transform;

pub use composer::*;
pub use config::*;
pub use error::*;
pub use follow::*;
pub use frame::*;
pub use hero::*;
pub use motion::*;
pub use pointer::*;
pub use rect::*;
pub use scaler::*;
pub use transform::*;
