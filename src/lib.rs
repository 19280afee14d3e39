//! kaleido-core: computation core of the opinion-map UI.
//!
//! Two cooperating pieces:
//!
//! - **Stance aggregation** ([`stance`], [`session`]): fold agree/oppose
//!   reactions into the user's scalar position per theme.
//! - **Bubble layout** ([`layout`]): deterministically place opinion bubbles
//!   on a normalized viewport, horizontal position encoding the stance score
//!   and vertical rows staggered with bounded collision avoidance.
//!
//! The React shell fetches theme data and posts votes; this crate owns the
//! pure computations and the wire/output types at both boundaries. Both core
//! operations are synchronous, reentrant, and free of I/O.

pub mod api;
pub mod layout;
pub mod model;
pub mod output;
pub mod session;
pub mod stance;
pub mod wasm;

pub use layout::{LayoutConfig, OpinionMapLayout, Placement, Position, layout};
pub use model::{Opinion, Theme, clamp_score, score_from_unit};
pub use session::SessionState;
pub use stance::{BLEND_WEIGHT, Vote, update_stance};
