use thiserror::Error;

use haunt_behavior::BehaviorError;
use haunt_core::AgentId;
use haunt_maze::MazeError;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("{what} length {got} does not match ghost count {expected}")]
    AgentCountMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },

    #[error("{0} not found")]
    AgentNotFound(AgentId),

    #[error(transparent)]
    Behavior(#[from] BehaviorError),

    #[error(transparent)]
    Maze(#[from] MazeError),
}

pub type SimResult<T> = Result<T, SimError>;
