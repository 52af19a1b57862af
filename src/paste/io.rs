use crate::error::{PasteError, Result};
use std::io::{Read, Write};

/// Source of pasted plain text.
pub trait ClipboardReader {
	fn read_text(&mut self) -> Result<String>;
}

/// One way of putting text where the user pasted.
pub trait TextInserter {
	/// Short name used in logs.
	fn strategy(&self) -> &str;

	fn insert(&mut self, text: &str) -> Result<()>;
}

/// Reads the whole of a byte stream as the clipboard contents.
///
/// Non UTF-8 input is a read failure; only plain text is pasted.
#[derive(Debug)]
pub struct StreamReader<R> {
	inner: R,
}

impl<R: Read> StreamReader<R> {
	pub fn new(inner: R) -> Self {
		Self { inner }
	}
}

impl<R: Read> ClipboardReader for StreamReader<R> {
	fn read_text(&mut self) -> Result<String> {
		let mut text = String::new();
		self.inner
			.read_to_string(&mut text)
			.map_err(|source| PasteError::ClipboardRead { source })?;
		Ok(text)
	}
}

/// Clipboard contents already in memory.
impl ClipboardReader for Option<String> {
	fn read_text(&mut self) -> Result<String> {
		self.take().ok_or_else(|| PasteError::ClipboardRead {
			source: std::io::Error::new(std::io::ErrorKind::NotFound, "clipboard is empty"),
		})
	}
}

/// Direct value assignment into a single-line or multi-line text field.
///
/// The current selection is replaced and the caret lands after the inserted
/// text. Positions are in characters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldInserter {
	pub value: String,
	pub selection_start: usize,
	pub selection_end: usize,
	/// Read-only fields reject insertion.
	pub read_only: bool,
}

impl FieldInserter {
	/// A field holding `value` with the caret at the end.
	pub fn new(value: impl Into<String>) -> Self {
		let value = value.into();
		let end = value.chars().count();
		Self {
			value,
			selection_start: end,
			selection_end: end,
			read_only: false,
		}
	}

	pub fn select(mut self, start: usize, end: usize) -> Self {
		self.selection_start = start;
		self.selection_end = end;
		self
	}

	fn byte_offset(&self, chars: usize) -> usize {
		self.value
			.char_indices()
			.nth(chars)
			.map_or(self.value.len(), |(i, _)| i)
	}
}

impl TextInserter for FieldInserter {
	fn strategy(&self) -> &str {
		"field"
	}

	fn insert(&mut self, text: &str) -> Result<()> {
		if self.read_only {
			return Err(PasteError::InsertFailed {
				strategy: self.strategy().to_string(),
				reason: "field is read-only".to_string(),
			});
		}
		let (start, end) = if self.selection_start <= self.selection_end {
			(self.selection_start, self.selection_end)
		} else {
			(self.selection_end, self.selection_start)
		};
		let start_byte = self.byte_offset(start);
		let end_byte = self.byte_offset(end);
		self.value.replace_range(start_byte..end_byte, text);

		let caret = self.value[..start_byte].chars().count() + text.chars().count();
		self.selection_start = caret;
		self.selection_end = caret;
		Ok(())
	}
}

/// Fallback insertion: write the text to an output stream.
#[derive(Debug)]
pub struct WriterInserter<W> {
	inner: W,
}

impl<W: Write> WriterInserter<W> {
	pub fn new(inner: W) -> Self {
		Self { inner }
	}

	pub fn into_inner(self) -> W {
		self.inner
	}
}

impl<W: Write> TextInserter for WriterInserter<W> {
	fn strategy(&self) -> &str {
		"writer"
	}

	fn insert(&mut self, text: &str) -> Result<()> {
		let map_err = |e: std::io::Error| PasteError::InsertFailed {
			strategy: "writer".to_string(),
			reason: e.to_string(),
		};
		self.inner.write_all(text.as_bytes()).map_err(map_err)?;
		self.inner.flush().map_err(map_err)
	}
}
