// Weekly posting planner: which weekdays get a post, and what each post says.

pub mod handlers;
pub mod schedule;
pub mod store;
