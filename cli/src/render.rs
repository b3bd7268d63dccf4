//! Terminal rendering for the `list` subcommand.
//!
//! One line per item: right-aligned id, a check-state mark, the content
//! colored by priority, and the creation timestamp. Sub-items are indented
//! two spaces per depth. Priorities outside the color map render uncolored —
//! they are valid data, just without a display treatment.

use colored::{ColoredString, Colorize};
use todoly_core::Item;

pub fn print_items(items: &[Item]) {
    let mut out = String::new();
    render_items(&mut out, items, 0);
    print!("{out}");
}

fn render_items(out: &mut String, items: &[Item], depth: usize) {
    for item in items {
        out.push_str(&render_line(item, depth));
        out.push('\n');
        render_items(out, &item.children, depth + 1);
    }
}

fn render_line(item: &Item, depth: usize) -> String {
    let indent = "  ".repeat(depth);
    let id = format!("{:>8}", item.id).magenta();
    let mark = if item.checked {
        "✕".red()
    } else {
        "✓".green()
    };
    let content = priority_colored(&item.content, item.priority);
    let date = item
        .created_date
        .0
        .format("%Y/%m/%d %H:%M:%S")
        .to_string()
        .bright_black();
    format!("{indent}{id} {mark} {content} {date}")
}

fn priority_colored(content: &str, priority: i64) -> ColoredString {
    match priority {
        1 => content.red(),
        2 => content.blue(),
        3 => content.green(),
        4 => content.white(),
        _ => content.normal(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: i64, content: &str) -> Item {
        Item {
            id,
            content: content.to_string(),
            ..Item::default()
        }
    }

    #[test]
    fn renders_id_mark_content_and_date() {
        colored::control::set_override(false);
        let line = render_line(&item(42, "Buy milk"), 0);
        assert_eq!(line, "      42 ✓ Buy milk 1970/01/01 00:00:00");
    }

    #[test]
    fn checked_items_get_the_cross_mark() {
        colored::control::set_override(false);
        let mut checked = item(7, "Done thing");
        checked.checked = true;
        assert!(render_line(&checked, 0).contains('✕'));
    }

    #[test]
    fn priority_outside_the_map_renders_without_error() {
        colored::control::set_override(false);
        let mut odd = item(1, "odd");
        odd.priority = 99;
        assert!(render_line(&odd, 0).contains("odd"));
    }

    #[test]
    fn children_indent_per_depth() {
        colored::control::set_override(false);
        let mut parent = item(1, "parent");
        parent.children.push(item(2, "child"));
        let mut out = String::new();
        render_items(&mut out, &[parent], 0);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        // The id field is 8 wide; a child line is shifted right by 2.
        assert_eq!(lines[0].find('1'), Some(7));
        assert_eq!(lines[1].find('2'), Some(9));
    }
}
