mod dedup_sorted_iter;
pub mod linked;
pub mod navigable_set;
pub mod queue;
mod search;
