use core_types::NodeRef;

/// Failure reported by a host selection API.
///
/// The adapter never hands these to its callers; they are logged and turned
/// into a fallback range, an empty result or a no-op.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HostError {
    /// The host has no active selection object.
    NoSelection,
    /// The host refused access, e.g. selection access from a nested frame.
    AccessDenied,
    /// A node handle no longer refers to a node in the document.
    DetachedNode { node: NodeRef },
    /// The host does not implement the requested operation.
    Unsupported { operation: &'static str },
}

impl std::fmt::Display for HostError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HostError::NoSelection => write!(f, "no active selection"),
            HostError::AccessDenied => write!(f, "selection access denied by host"),
            HostError::DetachedNode { node } => {
                write!(f, "node {} is not attached to the document", node.as_raw())
            }
            HostError::Unsupported { operation } => {
                write!(f, "host does not support {operation}")
            }
        }
    }
}

impl std::error::Error for HostError {}
