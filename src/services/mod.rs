pub mod advisor;
pub mod advisor_service;
pub mod report;
pub mod transformer;
