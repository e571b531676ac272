pub mod aggregate;
pub mod mutation;

pub use aggregate::{CreateProjectRequest, CreatedProject, ProjectSlug};
