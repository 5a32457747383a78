//! Decoration pipeline from raw engine output to [`crate::model::ScanResults`].

mod check_messages;
mod help_url;
mod message;
mod processor;
mod result;

pub use check_messages::add_messages_to_checks;
pub use help_url::HelpUrlGetter;
pub use message::{MessageDecorator, NO_DESCRIPTION};
pub use processor::{ARIA_HIDDEN_FOCUS_RULE_ID, RuleProcessor, TABSTER_DUMMY_MARKER};
pub use result::{PageTitleSource, ResultDecorator, StaticTitle, TagToLinkMapper};
