pub mod listener_set;
pub mod node_ref;
pub mod use_document_events;

pub use node_ref::MenuTargets;
pub use node_ref::NodeRef;
pub use use_document_events::use_document_events;
