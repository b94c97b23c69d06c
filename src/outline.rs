//! ASCII outline of a page's layout tree.

use crate::models::{Container, ContainerItem, Page, COLUMNS_TEMPLATE, ROWS_TEMPLATE};

const APPLICATION: char = '●';
const ROWS: char = '▤';
const COLUMNS: char = '▥';
const CUSTOM: char = '□';

/// Render a page layout as ASCII art.
///
/// Example output:
/// ```text
/// Home (portal:classic:home)
/// ├── ▤ rows
/// │   ├── ● web/HomePagePortlet "Welcome"
/// │   └── ▥ columns
/// │       ├── ● web/UsefulLinks
/// │       └── ● Calculator
/// └── □ system:/groovy/custom.gtmpl
/// ```
pub fn render_page(page: &Page) -> String {
    let mut output = match &page.display_name {
        Some(display_name) => format!("{} ({})\n", display_name, page.id),
        None => format!("{}\n", page.id),
    };
    render_items(&mut output, page.children(), "");
    output
}

fn render_items(output: &mut String, items: &[ContainerItem], prefix: &str) {
    for (i, item) in items.iter().enumerate() {
        let is_last = i == items.len() - 1;
        render_item(output, item, prefix, is_last);
    }
}

fn render_item(output: &mut String, item: &ContainerItem, prefix: &str, is_last: bool) {
    let branch = if is_last { "└── " } else { "├── " };
    output.push_str(prefix);
    output.push_str(branch);

    match item {
        ContainerItem::Application(application) => {
            output.push(APPLICATION);
            output.push(' ');
            output.push_str(&application.content_id);
            if let Some(title) = &application.title {
                output.push_str(&format!(" \"{}\"", title));
            }
            output.push('\n');
        }
        ContainerItem::Container(container) => {
            output.push_str(&container_label(container));
            output.push('\n');

            let continuation = if is_last { "    " } else { "│   " };
            let child_prefix = format!("{}{}", prefix, continuation);
            render_items(output, container.children(), &child_prefix);
        }
    }
}

fn container_label(container: &Container) -> String {
    match container.template() {
        ROWS_TEMPLATE => format!("{} rows", ROWS),
        COLUMNS_TEMPLATE => format!("{} columns", COLUMNS),
        template => format!("{} {}", CUSTOM, template),
    }
}
