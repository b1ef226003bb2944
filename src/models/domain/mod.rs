pub mod course;
pub mod mcq;
pub mod video;

pub use course::{Course, Lesson};
pub use mcq::Mcq;
pub use video::VideoItem;
