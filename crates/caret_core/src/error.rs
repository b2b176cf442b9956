use core_types::NodeId;
use thiserror::Error;

use crate::visual::VisualError;

/// Every way a caret update can fail.
///
/// None of these reach the host: tracker entry points log them and keep the
/// last visual state.
#[derive(Debug, Error)]
pub enum CaretError {
    #[error("no anchor element has been recorded for this viewport")]
    NoAnchor,

    #[error("no selection, active-line or element rectangle available")]
    Unresolvable,

    #[error("caret rectangle stayed at the origin after range correction")]
    Degenerate,

    #[error("node {0:?} is no longer attached to the document")]
    Detached(NodeId),

    #[error("visual layer write failed: {0}")]
    Visual(#[from] VisualError),

    #[error("tracker has been torn down")]
    TornDown,
}
