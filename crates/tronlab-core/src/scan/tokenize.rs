//! Placeholder tokenization
//!
//! Provides O(n) tokenization of a single line using a state machine.
//! Accepts exactly what the pattern `@\[([^\]]+)\]@` matches when applied
//! left to right without overlap.

/// A single `@[...]@` token on one line
///
/// All offsets are byte offsets relative to the start of the line. The
/// delimiters are ASCII, so every offset lies on a char boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RawToken {
    /// Byte position of `@[`
    pub start: usize,
    /// Byte position just past `]@`
    pub end: usize,
    /// Byte position of the first content byte (after `@[`)
    pub content_start: usize,
    /// Byte position of the closing `]`
    pub content_end: usize,
}

impl RawToken {
    /// Content between the delimiters, untrimmed
    pub fn content<'a>(&self, line: &'a str) -> &'a str {
        &line[self.content_start..self.content_end]
    }
}

/// Tokenization state machine (explicit for testability)
///
/// # State Transitions
///
/// ```text
/// Normal ──@──> SeenAt ──[──> InToken ──]──> SeenRBracket ──@──> [Yield Token] → Normal
///   │             │  ↺ @        │                │
///   │ (not @)     │ (other)     │ (not ])        │ (other, or empty content)
///   └────────────>└────────────>└───────────────>└──────────> Normal (reprocess byte)
/// ```
///
/// `@[` without a closing `]@` never yields a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ScanState {
    /// Regular text
    Normal,

    /// Seen `@`, checking for `[`
    SeenAt {
        /// Position of the `@`
        pos: usize,
    },

    /// Inside `@[...`, scanning until `]`
    InToken {
        /// Byte position of the opening `@[`
        start: usize,
        /// Byte position where token content starts
        content_start: usize,
    },

    /// Seen `]` inside a token, checking for `@`
    SeenRBracket {
        /// Byte position of the opening `@[`
        start: usize,
        /// Byte position where token content starts
        content_start: usize,
        /// Position of the `]`
        rbracket_pos: usize,
    },
}

/// Iterator over placeholder tokens on one line
///
/// Each byte is visited at most twice (once more after a failed `]@`), so
/// the scan is linear in the line length.
pub(crate) struct TokenStream<'a> {
    bytes: &'a [u8],
    pos: usize,
    state: ScanState,
}

impl<'a> TokenStream<'a> {
    pub fn new(line: &'a str) -> Self {
        Self {
            bytes: line.as_bytes(),
            pos: 0,
            state: ScanState::Normal,
        }
    }

    /// Record step for O(n) performance verification in tests
    #[cfg(test)]
    #[inline]
    fn record_test_step() {
        test_counter::inc();
    }

    fn process_normal(&mut self, byte: u8) {
        if byte == b'@' {
            self.state = ScanState::SeenAt { pos: self.pos };
        }
        self.pos += 1;
    }

    /// Returns false if the byte must be reprocessed in Normal state
    fn process_seen_at(&mut self, byte: u8, at_pos: usize) -> bool {
        match byte {
            b'[' => {
                self.state = ScanState::InToken {
                    start: at_pos,
                    content_start: self.pos + 1,
                };
                self.pos += 1;
                true
            }
            b'@' => {
                // `@@[` opens at the second `@`
                self.state = ScanState::SeenAt { pos: self.pos };
                self.pos += 1;
                true
            }
            _ => {
                self.state = ScanState::Normal;
                false
            }
        }
    }

    fn process_in_token(&mut self, byte: u8, start: usize, content_start: usize) {
        if byte == b']' {
            self.state = ScanState::SeenRBracket {
                start,
                content_start,
                rbracket_pos: self.pos,
            };
        }
        self.pos += 1;
    }

    /// Returns `(token, advanced)`
    fn process_seen_rbracket(
        &mut self,
        byte: u8,
        start: usize,
        content_start: usize,
        rbracket_pos: usize,
    ) -> (Option<RawToken>, bool) {
        if byte == b'@' && rbracket_pos > content_start {
            let token = RawToken {
                start,
                end: self.pos + 1,
                content_start,
                content_end: rbracket_pos,
            };
            self.state = ScanState::Normal;
            self.pos += 1;
            (Some(token), true)
        } else {
            // `@[]@` or `@[x]y`: no token starts at `start`. Content cannot
            // contain `]`, so no later start before `rbracket_pos` can match
            // either; resume from the current byte.
            self.state = ScanState::Normal;
            (None, false)
        }
    }
}

impl Iterator for TokenStream<'_> {
    type Item = RawToken;

    fn next(&mut self) -> Option<RawToken> {
        while self.pos < self.bytes.len() {
            let byte = self.bytes[self.pos];
            #[cfg(test)]
            Self::record_test_step();

            match self.state {
                ScanState::Normal => self.process_normal(byte),
                ScanState::SeenAt { pos } => {
                    if !self.process_seen_at(byte, pos) {
                        continue;
                    }
                }
                ScanState::InToken {
                    start,
                    content_start,
                } => self.process_in_token(byte, start, content_start),
                ScanState::SeenRBracket {
                    start,
                    content_start,
                    rbracket_pos,
                } => {
                    let (token, advanced) =
                        self.process_seen_rbracket(byte, start, content_start, rbracket_pos);
                    if token.is_some() {
                        return token;
                    }
                    if !advanced {
                        continue;
                    }
                }
            }
        }
        None
    }
}
