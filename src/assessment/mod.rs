mod base;
mod engine;
mod modifiers;
mod state;

pub use base::base_state;
pub use engine::{assess, RiskAssessor};
pub use modifiers::Modifier;
pub use state::RiskState;
