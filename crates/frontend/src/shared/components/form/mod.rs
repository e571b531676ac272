pub mod banner;
pub mod select;
pub mod text_field;

pub use banner::Banner;
pub use select::{Select, SelectOption};
pub use text_field::TextField;
