mod aggregate;
mod query;
mod retain;
mod sort;
mod transform;
mod util;

pub use aggregate::fold;
pub use query::{all, any, arg_max, arg_min, count, find, position};
pub use retain::retain;
pub use sort::sort_by;
pub use transform::{filter, filter_map, flatmap, map};
