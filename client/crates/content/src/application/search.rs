use serde::Serialize;

use crate::domain::entity::{BlogPost, Program, Project};

/// Matches per collection; collections not searched stay empty
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchResults {
    pub programs: Vec<Program>,
    pub projects: Vec<Project>,
    pub blog_posts: Vec<BlogPost>,
}

impl SearchResults {
    pub fn total(&self) -> usize {
        self.programs.len() + self.projects.len() + self.blog_posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}
