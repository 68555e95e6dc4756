/// Numeric helpers shared by the tokenizer and the command-line front end.
///
/// This module decides what counts as a numeric literal and how a result is
/// rendered for display.
pub mod num;
