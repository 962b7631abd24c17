//! Script fragment under construction.

/// Accumulates text arguments until the processor decides to evaluate them.
///
/// Pieces are joined with a single space, so `-c 'set l [list' -c a 'b]'`
/// builds `set l [list a b]`.
#[derive(Debug, Default)]
pub struct CommandBuffer {
    text: String,
}

impl CommandBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one argument, separated from earlier ones by a space.
    pub fn push(&mut self, piece: &str) {
        if !self.text.is_empty() {
            self.text.push(' ');
        }
        self.text.push_str(piece);
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Hand out the accumulated command, leaving the buffer empty.
    pub fn take(&mut self) -> String {
        std::mem::take(&mut self.text)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
