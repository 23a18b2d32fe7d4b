use booktrack::api::{CmdMessage, MessageLevel, Outcome, RunReport, Summary};
use booktrack::error::{CatalogError, Result};
use booktrack::model::Book;
use booktrack::operation::Operation;
use colored::Colorize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const COL_TITLE: usize = 30;
const COL_AUTHOR: usize = 20;
const COL_ISBN: usize = 15;
const COL_COPIES: usize = 6;

pub(super) fn print_report(report: &RunReport) {
    print_outcome(report.operation.as_ref(), &report.outcome);
    print_messages(&report.messages);
    print_summary(&report.summary);
}

pub(super) fn print_json(report: &RunReport) -> Result<()> {
    let json = serde_json::to_string_pretty(report).map_err(CatalogError::Serialization)?;
    println!("{}", json);
    Ok(())
}

fn print_outcome(operation: Option<&Operation>, outcome: &Outcome) {
    match operation {
        Some(Operation::TitleSearch(keyword)) => {
            println!("\n{}", format!("Title Search: \"{}\"", keyword).bold())
        }
        Some(Operation::IsbnSearch(isbn)) => {
            println!("\n{}", format!("ISBN Search: {}", isbn).bold())
        }
        Some(Operation::Add(_)) => println!("\n{}", "Add Book".bold()),
        None => {}
    }

    match outcome {
        Outcome::TitleMatches { books, .. } => print_books(books.iter()),
        Outcome::IsbnMatch { book, .. } => print_books(book.iter()),
        Outcome::Added { book } => print_books(std::iter::once(book)),
        Outcome::Failed { .. } | Outcome::Skipped => {}
    }
}

fn print_books<'a>(books: impl Iterator<Item = &'a Book>) {
    println!("{}", format_header());
    println!("{}", "-".repeat(COL_TITLE + COL_AUTHOR + COL_ISBN + COL_COPIES + 3));
    for book in books {
        println!("{}", format_row(book));
    }
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

fn print_summary(summary: &Summary) {
    println!("\n--- Statistics ---");
    println!("Valid records processed : {}", summary.records_processed);
    println!("Search results          : {}", summary.search_results);
    println!("Books added             : {}", summary.books_added);
    println!("Errors encountered      : {}", summary.errors);
}

fn format_header() -> String {
    format!(
        "{} {} {} {:>copies$}",
        fit_to_width("Title", COL_TITLE),
        fit_to_width("Author", COL_AUTHOR),
        fit_to_width("ISBN", COL_ISBN),
        "Copies",
        copies = COL_COPIES
    )
}

fn format_row(book: &Book) -> String {
    format!(
        "{} {} {} {:>copies$}",
        fit_to_width(book.title(), COL_TITLE),
        fit_to_width(book.author(), COL_AUTHOR),
        fit_to_width(book.isbn(), COL_ISBN),
        book.copies(),
        copies = COL_COPIES
    )
}

/// Pads `s` to exactly `width` display columns, truncating with an ellipsis
/// when it does not fit.
fn fit_to_width(s: &str, width: usize) -> String {
    if s.width() <= width {
        return format!("{}{}", s, " ".repeat(width - s.width()));
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    current_width += 1;
    result.push_str(&" ".repeat(width.saturating_sub(current_width)));
    result
}
