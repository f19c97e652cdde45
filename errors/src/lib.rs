use std::ops::Range;

use ariadne::{Color, ColorGenerator, Fmt, Label, Report, ReportBuilder, ReportKind};

pub type Error = ReportBuilder<(String, Range<usize>)>;

mod reporting;
mod wrappers;

pub use wrappers::*;

pub use reporting::{report, NATIVE_SOURCE};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub file: String,
    pub start: usize,
    pub end: usize,
}

impl Default for Span {
    fn default() -> Self {
        Span {
            file: "<native>".to_owned(),
            start: 0,
            end: 0,
        }
    }
}

impl Span {
    pub fn as_range(&self) -> Range<usize> {
        Range {
            start: self.start,
            end: self.end,
        }
    }

    pub fn as_span(&self) -> (String, Range<usize>) {
        (self.file.to_owned(), self.as_range())
    }
    pub fn new(file: String, start: usize, end: usize) -> Self {
        Self { file, start, end }
    }

    pub fn merge(&self, other: &Span) -> Self {
        let start = self.start.min(other.start);
        let end = self.end.max(other.end);
        Self::new(self.file.clone(), start, end)
    }
}

pub fn unexpected_character(span: &Span, character: char) -> Error {
    let mut colors = ColorGenerator::new();
    let b = colors.next();
    Report::build(ReportKind::Error, span.file.to_owned(), span.start)
        .with_code(20)
        .with_message("Unexpected character")
        .with_label(
            Label::new(span.as_span())
                .with_message(format!(
                    "{} can't start a token",
                    format!("{:?}", character).fg(Color::Blue)
                ))
                .with_color(b),
        )
}

pub fn unclosed_block(open: &Span) -> Error {
    let mut colors = ColorGenerator::new();
    let b = colors.next();
    Report::build(ReportKind::Error, open.file.to_owned(), open.start)
        .with_code(21)
        .with_message("Unclosed block")
        .with_label(
            Label::new(open.as_span())
                .with_message("This brace is never closed")
                .with_color(b),
        )
        .with_note("Add a } at the end of the block")
}

pub fn unmatched_close(close: &Span) -> Error {
    let mut colors = ColorGenerator::new();
    let b = colors.next();
    Report::build(ReportKind::Error, close.file.to_owned(), close.start)
        .with_code(22)
        .with_message("Unmatched closing brace")
        .with_label(
            Label::new(close.as_span())
                .with_message("No block is open here")
                .with_color(b),
        )
}

pub fn invalid_number(span: &Span, literal: &str) -> Error {
    let mut colors = ColorGenerator::new();
    let b = colors.next();
    Report::build(ReportKind::Error, span.file.to_owned(), span.start)
        .with_code(23)
        .with_message("Invalid number")
        .with_label(
            Label::new(span.as_span())
                .with_message(format!(
                    "{} isn't a 32-bit integer",
                    literal.fg(Color::Blue)
                ))
                .with_color(b),
        )
        .with_note(format!(
            "Static values range from {} to {}",
            i32::MIN,
            i32::MAX
        ))
}

pub fn expected(span: &Span, expected: &str, found: &str) -> Error {
    let mut colors = ColorGenerator::new();
    let b = colors.next();
    Report::build(ReportKind::Error, span.file.to_owned(), span.start)
        .with_code(24)
        .with_message(format!("Expected {}", expected))
        .with_label(
            Label::new(span.as_span())
                .with_message(format!("Found {} here", found.fg(Color::Blue)))
                .with_color(b),
        )
}

pub fn already_declared(singular: &str, first: &Span, second: &Span, name: &str) -> Error {
    let mut colors = ColorGenerator::new();
    let b = colors.next();
    Report::build(ReportKind::Error, second.file.to_owned(), second.start)
        .with_code(25)
        .with_message(format!("Duplicate {}", singular))
        .with_label(
            Label::new(second.as_span())
                .with_message(format!(
                    "{}{} {} is declared twice",
                    singular[0..1].to_uppercase(),
                    &singular[1..],
                    name.fg(Color::Blue)
                ))
                .with_color(b),
        )
        .with_label(
            Label::new(first.as_span())
                .with_message("First declared here")
                .with_color(colors.next()),
        )
}

pub fn already_loaded(file: &Span) -> Error {
    let mut colors = ColorGenerator::new();
    let b = colors.next();
    Report::build(ReportKind::Error, file.file.to_owned(), file.start)
        .with_code(26)
        .with_message("Source already loaded")
        .with_label(
            Label::new(file.as_span())
                .with_message(format!("{} was loaded before", (&file.file).fg(Color::Blue)))
                .with_color(b),
        )
}

fn similar_names<'a>(current: &str, strings: &'a [String]) -> Vec<&'a String> {
    strings
        .iter()
        .filter(|k| k.len() > 1 && strsim::damerau_levenshtein(current, k) <= (k.len() - 1).min(2))
        .take(5)
        .collect()
}

pub fn report_similar(
    singular: &str,
    plural: &str,
    span: &Span,
    current: &str,
    strings: &[String],
    error_id: u32,
) -> Error {
    let mut colors = ColorGenerator::new();
    let b = colors.next();
    let similar = similar_names(current, strings);
    let er = Report::build(ReportKind::Error, span.file.to_owned(), span.start)
        .with_code(error_id)
        .with_message(format!("Invalid {}", singular))
        .with_label(
            Label::new(span.as_span())
                .with_message(format!(
                    "{}{} {} wasn't found",
                    singular[0..1].to_uppercase(),
                    &singular[1..],
                    current.fg(Color::Blue)
                ))
                .with_color(b),
        );
    if similar.is_empty() {
        er
    } else if similar.len() == 1 {
        er.with_note(format!(
            "Another {} in scope has a similar name {}",
            singular,
            similar
                .iter()
                .map(|x| format!("{}", x.fg(Color::Blue)))
                .collect::<Vec<_>>()
                .join(", ")
        ))
    } else {
        er.with_note(format!(
            "Other {} in scope have similar names {}",
            plural,
            similar
                .iter()
                .map(|x| format!("{}", x.fg(Color::Blue)))
                .collect::<Vec<_>>()
                .join(", ")
        ))
    }
}
