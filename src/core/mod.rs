pub mod clock;
pub mod live;
pub mod selection;

pub use clock::{Clock, FixedClock, SystemClock};
pub use live::{LiveLog, LiveLogHandle, LiveValue};
pub use selection::{EmotionEdit, Selection, SelectionController, resolve_selection};
