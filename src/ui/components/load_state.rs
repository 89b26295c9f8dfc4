/// Loading flag of one page plus the sequence number of its latest load.
///
/// Only the most recently started load may deliver data or clear the flag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadState {
    loading: bool,
    seq: u64,
    completed: u64,
}

impl LoadState {
    /// Start a new load and return its sequence number
    pub fn begin(&mut self) -> u64 {
        self.seq += 1;
        self.loading = true;
        self.seq
    }

    pub fn is_current(&self, seq: u64) -> bool {
        seq == self.seq
    }

    /// Clear the flag for the current load; stale or repeated signals are ignored
    pub fn finish(&mut self, seq: u64) -> bool {
        if !self.is_current(seq) || !self.loading {
            return false;
        }
        self.loading = false;
        self.completed += 1;
        true
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Number of loads whose loading flag has been cleared
    pub fn completed(&self) -> u64 {
        self.completed
    }
}
