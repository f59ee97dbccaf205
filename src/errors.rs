use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// Search space exhausted (or depth bound reached) without meeting the goal
    #[error("no path found")]
    NoPathFound,
    /// Parent chain points outside the node map
    #[error("parent chain broken at node index {0}")]
    BrokenParentChain(usize),
    #[error("unknown search algorithm `{0}`")]
    UnknownAlgorithm(String),
}
