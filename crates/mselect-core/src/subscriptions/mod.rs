//! Built-in subscription sources.
//!
//! - **Terminal events** ([`terminal_events`]) -- keyboard, mouse, resize and
//!   paste events, fanned out from a single terminal reader.
//! - **Timers** ([`Every`]) -- repeating interval ticks.

mod terminal;
mod timer;

pub use terminal::*;
pub use timer::*;
