
#[derive(Debug)]
pub enum GraphBuildError {
    InvalidDimensions(usize, usize), // rows and cols must both be at least 1
    InvalidMaxCost(u32), // max cost must be at least 1
}

#[derive(Debug)]
pub enum SearchError {
    NoPathFound, // target is not reachable from the source
}
