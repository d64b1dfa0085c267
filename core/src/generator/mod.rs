use crate::*;
pub use random_walk::*;

mod random_walk;

pub trait BoardGenerator {
    fn generate(self) -> Board;
}
