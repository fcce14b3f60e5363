//! Rendering a list into its message text

use super::escape::{escape_item, needs_escape};
use super::layout::*;
use crate::domain::ListState;

/// Renders a list as the message text that stores it
pub fn render(list: &ListState) -> String {
    let item_count = list.pending().len() + list.done().len();
    let mut lines: Vec<String> = Vec::with_capacity(11 + item_count);

    lines.push(link_line(DEMO_LABEL, list.demo_link()));
    lines.push(DIVIDER.to_string());
    lines.push(link_line(REFERENCE_LABEL, list.reference_link()));
    lines.push(DIVIDER.to_string());
    lines.push(PENDING_HEADER.to_string());
    lines.push(DIVIDER.to_string());
    push_items(&mut lines, list.pending(), CHECKBOX_EMPTY, PENDING_PLACEHOLDER);
    lines.push(DIVIDER.to_string());
    lines.push(DONE_HEADER.to_string());
    lines.push(DIVIDER.to_string());
    push_items(&mut lines, list.done(), CHECKBOX_FILLED, DONE_PLACEHOLDER);

    lines.join("\n")
}

fn link_line(label: &str, link: Option<&str>) -> String {
    format!("{}{}{}", label, LINK_SEPARATOR, link.unwrap_or(UNSET_LINK))
}

fn push_items(lines: &mut Vec<String>, items: &[String], checkbox: &str, placeholder: &str) {
    if items.is_empty() {
        lines.push(placeholder.to_string());
        return;
    }

    for (i, item) in items.iter().enumerate() {
        let separator = if needs_escape(item) {
            ESCAPED_ITEM_SEPARATOR
        } else {
            ITEM_SEPARATOR
        };
        lines.push(format!(
            "**{} {}** {}{}",
            checkbox,
            i + 1,
            separator,
            escape_item(item)
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_empty_list() {
        let expected = "\
Link til demo: Ingen link enda
--------
Link til chords og lyrics: Ingen link enda
--------
**Todo liste:**
--------
Ingen oppgaver enda
--------
**Ferdige oppgaver:**
--------
Ingen ferdige oppgaver enda";

        assert_eq!(render(&ListState::new()), expected);
    }

    #[test]
    fn render_filled_list() {
        let mut list = ListState::new();
        list.set_demo_link("https://www.example.com").unwrap();
        list.set_reference_link("https://www.example.com/chords").unwrap();
        list.add_pending("Task 1");
        list.complete_pending(1).unwrap();
        list.add_pending("Task 2");
        list.add_pending("Task 3");
        list.complete_pending(2).unwrap();

        let expected = "\
Link til demo: https://www.example.com
--------
Link til chords og lyrics: https://www.example.com/chords
--------
**Todo liste:**
--------
**[   ] 1** - Task 2
--------
**Ferdige oppgaver:**
--------
**[ x ] 1** - Task 1
**[ x ] 2** - Task 3";

        assert_eq!(render(&list), expected);
    }

    #[test]
    fn empty_pending_renders_only_placeholder() {
        let mut list = ListState::new();
        list.add_pending("only");
        list.complete_pending(1).unwrap();

        let text = render(&list);
        let sections: Vec<&str> = text.split(&format!("\n{}\n", DIVIDER)).collect();
        assert_eq!(sections[3], PENDING_PLACEHOLDER);
        assert_eq!(sections[5], "**[ x ] 1** - only");
    }

    #[test]
    fn multiline_item_stays_on_one_line() {
        let mut list = ListState::new();
        list.add_pending("verse\nchorus");

        let text = render(&list);
        assert!(text.contains("**[   ] 1** -\\ verse\\nchorus"));
        assert_eq!(text.lines().count(), 11);
    }

    #[test]
    fn only_escaped_items_are_marked() {
        let mut list = ListState::new();
        list.add_pending("Save to C:\\new");
        list.add_pending("Book room");

        let text = render(&list);
        assert!(text.contains("**[   ] 1** -\\ Save to C:\\\\new"));
        assert!(text.contains("**[   ] 2** - Book room"));
    }
}
