// Application layer: console sessions and rendering of drawn games.

pub mod output;
pub mod session;
