pub mod badge;
pub mod button;
pub mod checkbox;
pub mod frame;
pub mod input;
pub mod select;
pub mod textarea;

pub use badge::Badge;
pub use button::Button;
pub use checkbox::Checkbox;
pub use frame::{FieldFrame, FrameState};
pub use input::Input;
pub use select::Select;
pub use textarea::Textarea;
