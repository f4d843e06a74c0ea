use std::{fmt::Display, sync::atomic};

/// Render progress shared between the workers and the thread printing it.
#[derive(Debug)]
pub struct Progress {
    current: atomic::AtomicUsize,
    max: usize,
}

impl Progress {
    pub fn new(max: usize) -> Self {
        Self {
            current: Default::default(),
            max,
        }
    }
    pub fn add(&self, amount: usize) -> usize {
        self.current.fetch_add(amount, atomic::Ordering::SeqCst)
    }
    pub fn get_raw(&self) -> usize {
        self.current.load(atomic::Ordering::SeqCst)
    }
    pub fn get(&self) -> f32 {
        if self.max == 0 {
            return 1.0;
        }
        (self.get_raw() as f32 / self.max as f32).min(1.0)
    }
    pub fn print(&self) {
        use std::io::Write;
        eprint!("\r{}", self);
        let _ = std::io::stderr().flush();
    }
    pub fn done(&self) -> bool {
        self.get_raw() >= self.max
    }
}

impl Display for Progress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let n = 50;
        let val = self.get();
        let width = (n as f32 * val).round() as usize;
        write!(
            f,
            "[{empty:=>width_left$}>{empty:.<width_right$}] {val:.1}%",
            empty = "",
            width_left = width,
            width_right = n - width,
            val = 100. * val
        )
    }
}

#[cfg(test)]
mod tests {
    use super::Progress;

    #[test]
    fn counts_up_to_done() {
        let progress = Progress::new(4);
        assert!(!progress.done());
        progress.add(1);
        assert_eq!(progress.get(), 0.25);
        progress.add(3);
        assert!(progress.done());
        assert_eq!(progress.get(), 1.0);
    }

    #[test]
    fn display() {
        let progress = Progress::new(2);
        progress.add(1);
        let bar = progress.to_string();
        assert!(bar.ends_with("] 50.0%"));
        assert_eq!(bar.len(), "[>] 50.0%".len() + 50);
    }

    #[test]
    fn empty_is_done() {
        let progress = Progress::new(0);
        assert!(progress.done());
        assert_eq!(progress.get(), 1.0);
    }
}
