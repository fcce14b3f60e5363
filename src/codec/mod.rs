//! # Message Codec
//!
//! A thread list is stored as the text of one chat message. [`render`] turns
//! a [`ListState`](crate::domain::ListState) into that text and [`parse`]
//! reads it back. For every state, `parse(&render(&state))` equals `state`.
//!
//! ## Layout
//!
//! ```text
//! Link til demo: <link or "Ingen link enda">
//! --------
//! Link til chords og lyrics: <link or "Ingen link enda">
//! --------
//! **Todo liste:**
//! --------
//! **[   ] 1** - <item>            (or "Ingen oppgaver enda")
//! --------
//! **Ferdige oppgaver:**
//! --------
//! **[ x ] 1** - <item>            (or "Ingen ferdige oppgaver enda")
//! ```
//!
//! Each item occupies exactly one line and can never be mistaken for a
//! divider, header or placeholder. Items holding backslashes or line breaks
//! are escaped (see [`escape_item`]) and written as `**[   ] 1** -\ <item>`;
//! lines with the plain `- ` separator are taken verbatim.

mod escape;
pub mod layout;
mod parse;
mod render;

use thiserror::Error;

pub use escape::{escape_item, needs_escape, unescape_item};
pub use parse::{looks_like_rendering, parse};
pub use render::render;

#[derive(Debug, Error, PartialEq)]
pub enum CodecError {
    #[error("Malformed list message: {reason}")]
    MalformedDocument { reason: String },
}

impl CodecError {
    fn malformed(reason: impl Into<String>) -> Self {
        CodecError::MalformedDocument {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Command, ListState};
    use proptest::prelude::*;

    #[test]
    fn band_rehearsal_scenario() {
        let mut list = ListState::new();
        list.add_pending("Buy strings");
        list.add_pending("Book room");
        list.complete_pending(1).unwrap();

        let text = render(&list);
        assert!(text.contains("**[   ] 1** - Book room"));
        assert!(text.contains("**[ x ] 1** - Buy strings"));

        let mut parsed = parse(&text).unwrap();
        assert_eq!(parsed, list);

        for state in [&mut list, &mut parsed] {
            state.complete_pending(1).unwrap();
            state.add_pending("Record demo");
        }
        assert_eq!(render(&parsed), render(&list));
    }

    #[test]
    fn link_default_and_set() {
        let mut list = ListState::new();
        let text = render(&list);
        assert!(text.contains("Link til demo: Ingen link enda"));
        assert!(text.contains("Link til chords og lyrics: Ingen link enda"));

        list.set_demo_link("https://x").unwrap();
        let text = render(&list);
        assert!(text.starts_with("Link til demo: https://x\n"));
        assert_eq!(parse(&text).unwrap().demo_link(), Some("https://x"));
    }

    fn command_strategy() -> impl Strategy<Value = Command> {
        let item = prop_oneof![
            "[a-zA-Z0-9 ]{0,20}",
            any::<String>(),
            "[a-z\\\\ -]{0,12}",
            Just("--------".to_string()),
            Just("Ingen oppgaver enda".to_string()),
        ];
        let link = "[a-z:/.]{1,20}";

        prop_oneof![
            item.prop_map(|item| Command::Add { item }),
            (-1i64..6).prop_map(|index| Command::Complete { index }),
            (-1i64..6).prop_map(|index| Command::Undo { index }),
            (-1i64..6).prop_map(|index| Command::DeletePending { index }),
            (-1i64..6).prop_map(|index| Command::DeleteDone { index }),
            Just(Command::ClearDone),
            link.prop_map(|link| Command::SetDemoLink { link }),
            link.prop_map(|link| Command::SetReferenceLink { link }),
        ]
    }

    proptest! {
        #[test]
        fn roundtrip_after_any_commands(
            commands in prop::collection::vec(command_strategy(), 0..30),
        ) {
            let mut list = ListState::new();
            for cmd in &commands {
                let before = list.clone();
                if cmd.apply(&mut list).is_err() {
                    prop_assert_eq!(&list, &before);
                }
            }

            let text = render(&list);
            prop_assert_eq!(parse(&text).unwrap(), list);
        }

        #[test]
        fn completing_preserves_relative_order(
            items in prop::collection::vec("[a-z]{1,8}", 1..10),
            pick in any::<prop::sample::Index>(),
        ) {
            let mut list = ListState::new();
            for item in &items {
                list.add_pending(item.as_str());
            }
            let k = pick.index(items.len());
            list.complete_pending(k as i64 + 1).unwrap();

            let mut expected = items.clone();
            let expected_done = vec![expected.remove(k)];
            prop_assert_eq!(list.pending(), expected.as_slice());
            prop_assert_eq!(list.done(), expected_done.as_slice());
        }
    }
}
