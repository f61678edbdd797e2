use std::fmt;

pub type Result<T> = std::result::Result<T, Error>;

/// The graph operation that rejected its arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    InsertEdge,
    ReplaceNode,
    MergeReplaceNode,
    EraseEdge,
    IsConnected,
    Weights,
    Connections,
}

impl Operation {
    pub fn name(self) -> &'static str {
        match self {
            Self::InsertEdge => "Graph::insert_edge",
            Self::ReplaceNode => "Graph::replace_node",
            Self::MergeReplaceNode => "Graph::merge_replace_node",
            Self::EraseEdge => "Graph::erase_edge",
            Self::IsConnected => "Graph::is_connected",
            Self::Weights => "Graph::weights",
            Self::Connections => "Graph::connections",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Precondition violations. The graph is left untouched when one is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("cannot call {op} when either src or dst node does not exist in the graph")]
    MissingEndpoint { op: Operation },

    #[error("cannot call {op} on a node that does not exist in the graph")]
    MissingNode { op: Operation },

    #[error("cannot call {op} on old or new data if they don't exist in the graph")]
    MissingOperand { op: Operation },
}

impl Error {
    pub fn operation(&self) -> Operation {
        match self {
            Self::MissingEndpoint { op }
            | Self::MissingNode { op }
            | Self::MissingOperand { op } => *op,
        }
    }
}
