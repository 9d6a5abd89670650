pub mod budget_alloc;
pub mod fixtures;
