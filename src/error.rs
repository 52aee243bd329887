/*!
# Errors

All fallible operations of this crate return [`Result`] with the single [`Error`] enum.
Errors abort a computation; there are no partial results.
*/

use thiserror::Error;

use crate::{Node, NumNodes};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// A source vertex, edge endpoint or adjacency lookup is outside of `0..n`
    #[error("vertex {vertex} is out of range for a graph with {number_of_nodes} nodes")]
    InvalidVertex {
        vertex: Node,
        number_of_nodes: NumNodes,
    },

    /// Relaxing the arc `(from, to)` would overflow the distance type
    #[error("distance overflow while relaxing arc ({from},{to})")]
    ArithmeticOverflow { from: Node, to: Node },

    /// The extracted negative cycle is not reachable from the source.
    /// Only reported if reachability verification is enabled.
    #[error("negative cycle through vertex {vertex} is not reachable from the source")]
    UnreachableCycle { vertex: Node },
}

pub type Result<T> = std::result::Result<T, Error>;

/// Shorthand for returning `Err(error)` early when a condition fails
macro_rules! raise_error_unless {
    ($cond : expr, $error : expr) => {
        if !($cond) {
            return Err($error);
        }
    };
}

/// Returns early with [`Error::InvalidVertex`] unless `$u < $n`
macro_rules! ensure_vertex {
    ($u : expr, $n : expr) => {
        if !($u < $n) {
            return Err($crate::error::Error::InvalidVertex {
                vertex: $u,
                number_of_nodes: $n,
            });
        }
    };
}

pub(crate) use ensure_vertex;
pub(crate) use raise_error_unless;

#[cfg(test)]
mod tests {
    use super::*;

    fn check(u: Node, n: NumNodes) -> Result<Node> {
        ensure_vertex!(u, n);
        Ok(u)
    }

    #[test]
    fn ensure_vertex_bounds() {
        assert_eq!(check(0, 1), Ok(0));
        assert_eq!(
            check(1, 1),
            Err(Error::InvalidVertex {
                vertex: 1,
                number_of_nodes: 1
            })
        );
    }

    #[test]
    fn messages() {
        let e = Error::InvalidVertex {
            vertex: 4,
            number_of_nodes: 3,
        };
        assert_eq!(
            e.to_string(),
            "vertex 4 is out of range for a graph with 3 nodes"
        );
        assert_eq!(
            Error::ArithmeticOverflow { from: 1, to: 2 }.to_string(),
            "distance overflow while relaxing arc (1,2)"
        );
    }
}
