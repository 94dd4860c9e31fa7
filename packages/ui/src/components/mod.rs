//! Form primitives shared by every screen.

mod button;
mod input;
mod label;
mod select;
mod textarea;

pub use button::{Button, ButtonVariant};
pub use input::Input;
pub use label::Label;
pub use select::Select;
pub use textarea::Textarea;
