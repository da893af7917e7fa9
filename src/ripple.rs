use std::time::Duration;

/// How long a ripple stays on screen.
pub const RIPPLE_LIFETIME: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ripple {
    pub id: u64,
    pub x: f64,
    pub y: f64,
}

/// Ripples currently expanding from click points.
#[derive(Debug, Clone, Default)]
pub struct Ripples {
    next_id: u64,
    active: Vec<Ripple>,
}

impl Ripples {
    /// Add a ripple at `(x, y)` and return its id, to be passed to `remove`
    /// once [`RIPPLE_LIFETIME`] has elapsed.
    pub fn spawn(&mut self, x: f64, y: f64) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.active.push(Ripple { id, x, y });
        id
    }

    pub fn remove(&mut self, id: u64) {
        self.active.retain(|r| r.id != id);
    }

    pub fn active(&self) -> &[Ripple] {
        &self.active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_and_expire() {
        let mut ripples = Ripples::default();
        let a = ripples.spawn(10.0, 20.0);
        let b = ripples.spawn(30.0, 40.0);
        assert_ne!(a, b);
        assert_eq!(ripples.active().len(), 2);

        ripples.remove(a);
        assert_eq!(ripples.active(), &[Ripple { id: b, x: 30.0, y: 40.0 }]);

        // removing twice is fine
        ripples.remove(a);
        ripples.remove(b);
        assert!(ripples.active().is_empty());

        // ids are never reused
        assert!(ripples.spawn(0.0, 0.0) > b);
    }
}
