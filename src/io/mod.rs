pub mod stream;

pub use stream::{RecordStream, TextStream};
