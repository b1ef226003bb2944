pub mod course_handler;
pub mod generate_handler;

pub use course_handler::{
    delete_course, get_course, health_check, health_check_live, health_check_ready, list_courses,
};
pub use generate_handler::{evaluate_answer, generate_full_course, generate_outline};
