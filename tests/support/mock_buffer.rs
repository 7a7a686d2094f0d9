use ropey::Rope;
use selkit::traits::LineBuffer;

/// Rope-backed host buffer, closer to what a real editor hands over than a
/// `Vec<String>`.
pub struct MockBuffer {
    rope: Rope,
}

impl MockBuffer {
    pub fn new(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
        }
    }

    pub fn from_lines(lines: &[&str]) -> Self {
        Self::new(&lines.join("\n"))
    }

    pub fn lines(&self) -> Vec<String> {
        (0..self.line_count())
            .filter_map(|i| self.line(i))
            .collect()
    }
}

impl LineBuffer for MockBuffer {
    fn line_count(&self) -> u32 {
        self.rope.len_lines() as u32
    }

    fn line(&self, line: u32) -> Option<String> {
        if line as usize >= self.rope.len_lines() {
            return None;
        }
        let mut s = self.rope.line(line as usize).to_string();
        // Remove trailing newline if present
        if s.ends_with('\n') {
            s.pop();
        }
        if s.ends_with('\r') {
            s.pop();
        }
        Some(s)
    }

    fn insert_line(&mut self, at: u32, text: String) {
        if (at as usize) < self.rope.len_lines() {
            let idx = self.rope.line_to_char(at as usize);
            self.rope.insert(idx, &format!("{text}\n"));
        } else {
            let end = self.rope.len_chars();
            self.rope.insert(end, &format!("\n{text}"));
        }
    }
}
