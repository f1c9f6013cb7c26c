//! Network messages - communication between App and Network layers

use crate::models::{CatalogItem, ItemDraft};

/// Catalog operation a command or failure refers to
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Operation {
    List,
    Create,
    Update,
    Delete,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::List => "list",
            Operation::Create => "create",
            Operation::Update => "update",
            Operation::Delete => "delete",
        }
    }
}

/// Commands sent from App layer to Network layer.
///
/// `id` is a per-command correlation number; `item_id` is the catalog id.
#[derive(Debug, Clone, PartialEq)]
pub enum NetworkCommand {
    /// Fetch the whole catalog
    List { id: u64 },
    /// Create a new item
    Create { id: u64, draft: ItemDraft },
    /// Replace an existing item
    Update {
        id: u64,
        item_id: i64,
        draft: ItemDraft,
    },
    /// Remove an item
    Delete { id: u64, item_id: i64 },
    /// Shutdown the network actor
    Shutdown,
}

impl NetworkCommand {
    pub fn id(&self) -> Option<u64> {
        match self {
            NetworkCommand::List { id }
            | NetworkCommand::Create { id, .. }
            | NetworkCommand::Update { id, .. }
            | NetworkCommand::Delete { id, .. } => Some(*id),
            NetworkCommand::Shutdown => None,
        }
    }

    pub fn operation(&self) -> Option<Operation> {
        match self {
            NetworkCommand::List { .. } => Some(Operation::List),
            NetworkCommand::Create { .. } => Some(Operation::Create),
            NetworkCommand::Update { .. } => Some(Operation::Update),
            NetworkCommand::Delete { .. } => Some(Operation::Delete),
            NetworkCommand::Shutdown => None,
        }
    }
}

/// Responses sent from Network layer to App layer
#[derive(Debug, Clone, PartialEq)]
pub enum NetworkResponse {
    /// Full catalog
    Listed { id: u64, items: Vec<CatalogItem> },
    /// Create or update accepted by the server
    Saved { id: u64, item: CatalogItem },
    /// Delete accepted by the server
    Deleted { id: u64, item_id: i64 },
    /// Any transport or HTTP failure
    Failed {
        id: u64,
        op: Operation,
        message: String,
    },
}

impl NetworkResponse {
    /// Get the command ID from the response
    pub fn id(&self) -> u64 {
        match self {
            NetworkResponse::Listed { id, .. } => *id,
            NetworkResponse::Saved { id, .. } => *id,
            NetworkResponse::Deleted { id, .. } => *id,
            NetworkResponse::Failed { id, .. } => *id,
        }
    }
}
