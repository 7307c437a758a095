// Cross-article analysis — comparisons, topic overlap, and the verdict.

pub mod aggregate;
pub mod compare;
pub mod overlap;
