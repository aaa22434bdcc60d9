pub mod fatal;
pub mod util;

pub use fatal::{OrDie, die, die_with};
pub use util::hash;

#[cfg(test)]
mod test_util;
