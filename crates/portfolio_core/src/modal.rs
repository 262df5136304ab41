/// Single-slot overlay. Opening while open replaces the shown record.
#[derive(Debug, Clone, PartialEq)]
pub struct Modal<T> {
    selected: Option<T>,
}

impl<T> Default for Modal<T> {
    fn default() -> Self {
        Self { selected: None }
    }
}

impl<T> Modal<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self, record: T) {
        self.selected = Some(record);
    }

    pub fn close(&mut self) {
        self.selected = None;
    }

    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    pub fn selected(&self) -> Option<&T> {
        self.selected.as_ref()
    }
}
