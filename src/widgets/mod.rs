mod labels;
pub use labels::*;

mod stacks;
pub use stacks::*;

mod errors;
pub use errors::*;

mod buttons;
pub use buttons::*;

mod segmented_control;
pub use segmented_control::*;

mod modal;
pub use modal::*;

mod progress;
pub use progress::*;
