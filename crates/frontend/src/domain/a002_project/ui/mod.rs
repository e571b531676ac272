pub mod landing;
pub mod new_project;
