pub mod blog_post;
pub mod image;
pub mod program;
pub mod project;
pub mod top_post;

pub use blog_post::BlogPost;
pub use image::Image;
pub use program::Program;
pub use project::{Mentor, Project, ProjectStatus};
pub use top_post::TopPost;
