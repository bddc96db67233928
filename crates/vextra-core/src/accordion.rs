/// FAQ accordion: at most one item open; toggling the open item closes it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Accordion {
    open: Option<usize>,
}

impl Accordion {
    pub fn new(open: Option<usize>) -> Self {
        Self { open }
    }

    pub fn toggle(&mut self, index: usize) -> Option<usize> {
        self.open = if self.open == Some(index) {
            None
        } else {
            Some(index)
        };
        self.open
    }

    pub fn open(&self) -> Option<usize> {
        self.open
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }
}
