pub mod candidate;
pub mod crossreact;
pub mod report;
pub mod sequence;
