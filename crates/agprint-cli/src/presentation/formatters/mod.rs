pub mod assistant;
pub mod frame;
pub mod hook;
pub mod number;
pub mod options;
pub mod record;
pub mod result;
pub mod stream;
pub mod system;
pub mod text;
pub mod user;
pub mod value;

pub use options::FormatOptions;
pub use record::{RecordView, format_record};
pub use value::format_value;
