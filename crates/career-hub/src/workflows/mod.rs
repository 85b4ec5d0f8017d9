pub mod dashboard;
pub mod feed;
pub mod jobs;
pub mod pagination;
pub mod sources;
pub mod talent;
