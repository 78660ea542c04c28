//! Terminal rendering of the form and its notices.

use std::io::{self, BufRead, Write};

use stockform_form::{Notice, NoticeKind, Notifier};
use stockform_products::{FormMode, Product, ProductField};

/// Prints notices as a modal block.
///
/// With `blocking` set, waits for Enter before returning, the way an alert
/// dialog holds the page.
#[derive(Debug, Default)]
pub(crate) struct TerminalNotifier {
    blocking: bool,
}

impl TerminalNotifier {
    pub(crate) fn blocking() -> Self {
        Self { blocking: true }
    }
}

impl Notifier for TerminalNotifier {
    fn notify(&mut self, notice: Notice) {
        println!("{}", render_notice(&notice));

        if self.blocking {
            print!("(press Enter to continue) ");
            let _ = io::stdout().flush();
            let mut buf = String::new();
            let _ = io::stdin().lock().read_line(&mut buf);
        }
    }
}

pub(crate) fn render_notice(notice: &Notice) -> String {
    let tag = match notice.kind {
        NoticeKind::Success => "[ok]",
        NoticeKind::Failure => "[failed]",
    };
    format!("\n  {tag} {}\n", notice.message)
}

/// The form: heading, one line per field, then the buttons.
pub(crate) fn render_form(mode: FormMode, draft: &Product) -> String {
    let mut out = format!("== {} ==\n", mode.heading());
    for field in ProductField::ALL {
        out.push_str(&format!(
            "  {:<13} {:<12} ({})\n",
            format!("{}:", field.label()),
            draft.get(field),
            field.input_kind().hint()
        ));
    }
    out.push_str(&format!("  [{}] [Clear]\n", mode.submit_label()));
    out
}

/// A product list with one row per product, id first.
pub(crate) fn render_list(title: &str, products: &[Product]) -> String {
    let mut out = format!("== {title} ==\n");
    if products.is_empty() {
        out.push_str("  (none)\n");
        return out;
    }
    for p in products {
        let id = p.id.as_ref().map(|id| id.as_str()).unwrap_or("-");
        out.push_str(&format!("  {id:<26} {}\n", p.summary_line()));
    }
    out
}
