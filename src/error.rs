//! Typed errors for contract violations at the compression API boundary.
//!
//! Range overflow of weight/duration values is deliberately *not* an error:
//! it is handled by saturating clamps and surfaced through the statistics.

use thiserror::Error;

use crate::types::EdgeId;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GeometryError {
    /// The edge was registered before; re-registering would corrupt the
    /// bucket it already owns.
    #[error("edge {0} already owns a geometry bucket")]
    AlreadyRegistered(EdgeId),

    /// The edge resolves through neither the raw index nor a zipped index.
    #[error("edge {0} has no geometry in any index")]
    UnknownEdge(EdgeId),

    /// The edge's bucket has too few hops for the requested accessor.
    #[error("edge {0} has too few hops for this lookup")]
    TooFewHops(EdgeId),

    /// The zipped index pair may only be set up once per compressor.
    #[error("bothway vector initialized twice")]
    BothwayAlreadyInitialized,

    /// Zipping was attempted before the zipped index pair was set up.
    #[error("zip_edges called before initialize_bothway")]
    BothwayNotInitialized,
}
