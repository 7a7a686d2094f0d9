/// Line storage owned by the host.
///
/// Lines are handed out without their terminator. The engine borrows the buffer
/// for one command and never keeps it.
pub trait LineBuffer {
    fn line_count(&self) -> u32;

    // Text of `line`, or None past the end of the buffer.
    fn line(&self, line: u32) -> Option<String>;

    // Insert `text` so it becomes line `at`; `at == line_count()` appends.
    fn insert_line(&mut self, at: u32, text: String);
}

impl LineBuffer for Vec<String> {
    fn line_count(&self) -> u32 {
        self.len() as u32
    }

    fn line(&self, line: u32) -> Option<String> {
        self.get(line as usize).cloned()
    }

    fn insert_line(&mut self, at: u32, text: String) {
        let at = (at as usize).min(self.len());
        self.insert(at, text);
    }
}
