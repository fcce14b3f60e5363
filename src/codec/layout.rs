//! Literals of the rendered list message
//!
//! Both directions of the codec read these. Changing any of them breaks
//! every message rendered before the change.

/// Line separating the six sections
pub const DIVIDER: &str = "--------";

pub const DEMO_LABEL: &str = "Link til demo";
pub const REFERENCE_LABEL: &str = "Link til chords og lyrics";

/// Separates a link label from its value
pub const LINK_SEPARATOR: &str = ": ";

/// Rendered in place of a link that has not been set
pub const UNSET_LINK: &str = "Ingen link enda";

pub const PENDING_HEADER: &str = "**Todo liste:**";
pub const DONE_HEADER: &str = "**Ferdige oppgaver:**";

pub const PENDING_PLACEHOLDER: &str = "Ingen oppgaver enda";
pub const DONE_PLACEHOLDER: &str = "Ingen ferdige oppgaver enda";

pub const CHECKBOX_EMPTY: &str = "[   ]";
pub const CHECKBOX_FILLED: &str = "[ x ]";

/// Ends the checkbox/index prefix of an item line
pub const ITEM_SEPARATOR: &str = "- ";

/// Replaces [`ITEM_SEPARATOR`] on lines whose item text is escaped
pub const ESCAPED_ITEM_SEPARATOR: &str = "-\\ ";

/// Number of divider-separated sections in a rendering
pub const SECTION_COUNT: usize = 6;
