//! Interactive form session.
//!
//! Reads one command per line from stdin and maps it onto a form operation,
//! printing the form and the lists after every change.

use std::io::{self, Write};

use stockform_core::{DomainError, ProductId};
use stockform_products::ProductField;

use super::Form;
use super::fields::{checked, require_filled};
use crate::terminal::{render_form, render_list};

const HELP: &str = "\
commands:
  set <field> <value>   change a form field (code, name, description, price, qty, date)
  show                  print the form and lists
  submit                add or update the product in the form
  clear                 reset the form
  edit <id>             load an active product into the form
  delete <id>           move a product to the removed list
  removed               fetch and show removed products
  restore <id>          move a removed product back
  purge <id>            permanently delete a removed product
  list                  show active products
  help                  this text
  quit                  leave the session";

#[derive(Debug, Clone, PartialEq, Eq)]
enum SessionCommand {
    Set(ProductField, String),
    Show,
    Submit,
    Clear,
    Edit(ProductId),
    Delete(ProductId),
    Removed,
    Restore(ProductId),
    Purge(ProductId),
    List,
    Help,
    Quit,
}

impl SessionCommand {
    fn parse(line: &str) -> Result<Option<Self>, String> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (verb, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();
        let id = || rest.parse::<ProductId>().map_err(|e| e.to_string());

        let command = match verb {
            "set" => {
                let (name, value) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
                let field: ProductField = name.parse().map_err(|e: DomainError| e.to_string())?;
                SessionCommand::Set(field, checked(field, value.trim())?)
            }
            "show" => SessionCommand::Show,
            "submit" | "add" | "update" => SessionCommand::Submit,
            "clear" => SessionCommand::Clear,
            "edit" => SessionCommand::Edit(id()?),
            "delete" => SessionCommand::Delete(id()?),
            "removed" => SessionCommand::Removed,
            "restore" => SessionCommand::Restore(id()?),
            "purge" => SessionCommand::Purge(id()?),
            "list" => SessionCommand::List,
            "help" | "?" => SessionCommand::Help,
            "quit" | "exit" => SessionCommand::Quit,
            other => return Err(format!("unknown command '{other}' (try 'help')")),
        };
        Ok(Some(command))
    }
}

pub(super) async fn run(mut form: Form) -> anyhow::Result<()> {
    // Failures are logged by the form; the session starts with what it has.
    let _ = form.initialize().await;
    let mut show_removed = false;
    print_all(&form, show_removed);
    println!("{HELP}");

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("> ");
        io::stdout().flush()?;

        line.clear();
        if stdin.read_line(&mut line)? == 0 {
            break;
        }

        let command = match SessionCommand::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(msg) => {
                println!("{msg}");
                continue;
            }
        };
        tracing::debug!(?command, "session command");

        // Failed operations were already notified; keep the session going.
        match command {
            SessionCommand::Set(field, value) => form.update_field(field, value),
            SessionCommand::Show => {}
            SessionCommand::Submit => {
                if let Err(msg) = require_filled(form.draft()) {
                    println!("{msg}");
                    continue;
                }
                let _ = form.submit().await;
            }
            SessionCommand::Clear => form.clear_form(),
            SessionCommand::Edit(id) => {
                if let Err(e) = form.edit_by_id(&id) {
                    println!("{e}");
                    continue;
                }
            }
            SessionCommand::Delete(id) => {
                let _ = form.remove_product(id).await;
            }
            SessionCommand::Removed => {
                let _ = form.show_removed().await;
                show_removed = true;
            }
            SessionCommand::Restore(id) => {
                let _ = form.restore_product(id).await;
            }
            SessionCommand::Purge(id) => {
                let _ = form.purge_product(id).await;
            }
            SessionCommand::List => {
                print!("{}", render_list("Current Products", form.active()));
                continue;
            }
            SessionCommand::Help => {
                println!("{HELP}");
                continue;
            }
            SessionCommand::Quit => break,
        }

        print_all(&form, show_removed);
    }

    Ok(())
}

fn print_all(form: &Form, show_removed: bool) {
    println!();
    print!("{}", render_form(form.mode(), form.draft()));
    print!("{}", render_list("Current Products", form.active()));
    if show_removed {
        print!("{}", render_list("Removed Products", form.removed()));
    }
}
