pub mod assumptions;
pub mod engine;
pub mod inputs;
pub mod pain_points;
pub mod report;

pub use assumptions::{Assumptions, AssumptionsError};
pub use engine::{estimate, BreakdownLine, Estimate, SavingsCategory};
pub use inputs::EstimateInputs;
pub use pain_points::PainPoint;
pub use report::{format_dollars, render_report};
