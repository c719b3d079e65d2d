pub mod webinars;
