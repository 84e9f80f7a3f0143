// Gap scoring and final topic selection.

pub mod score;
pub mod select;
