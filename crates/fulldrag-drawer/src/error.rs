//! Attachment errors.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttachError {
    /// The container has no parent, or its parent is not a drawer host.
    NotInDrawerLayout,
    /// The host does not provide something the container relies on.
    MissingCapability { capability: &'static str },
}

impl std::fmt::Display for AttachError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AttachError::NotInDrawerLayout => {
                write!(f, "full draggable container must be added to a drawer layout")
            }
            AttachError::MissingCapability { capability } => {
                write!(f, "drawer host does not support {capability}")
            }
        }
    }
}

impl std::error::Error for AttachError {}
