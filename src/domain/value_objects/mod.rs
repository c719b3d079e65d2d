pub mod iam;
pub mod webinars;
