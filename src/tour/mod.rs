pub mod layout;
pub mod machine;
pub mod step;

pub use layout::{Rect, Size, place_tooltip, spotlight};
pub use machine::{StepView, Tour, TourState};
pub use step::{Lang, Localized, Placement, TourStep, default_steps};
