//! Typewriter / role-rotator state machine for the hero headline.
//!
//! The machine first types the name character by character, then cycles
//! forever through the role list: type, hold, delete, advance (wrapping at
//! the end of the list). It is pure; the hero component drives it with
//! chained timeouts using [`Typewriter::delay_ms`] between ticks.

pub const TYPE_INTERVAL_MS: u64 = 100;
pub const DELETE_INTERVAL_MS: u64 = 50;
pub const HOLD_MS: u64 = 2000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    TypingName,
    TypingRole,
    Holding,
    Deleting,
}

#[derive(Debug, Clone)]
pub struct Typewriter {
    name: &'static str,
    roles: &'static [&'static str],
    name_chars: usize,
    role_chars: usize,
    role_index: usize,
    phase: Phase,
}

impl Typewriter {
    /// `roles` must be non-empty; a single-entry list still cycles (the same
    /// role is held, deleted, and retyped indefinitely).
    pub fn new(name: &'static str, roles: &'static [&'static str]) -> Self {
        assert!(!roles.is_empty(), "role list must not be empty");
        Self {
            name,
            roles,
            name_chars: 0,
            role_chars: 0,
            role_index: 0,
            phase: Phase::TypingName,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn role_index(&self) -> usize {
        self.role_index
    }

    pub fn name_complete(&self) -> bool {
        self.phase != Phase::TypingName
    }

    pub fn name_text(&self) -> String {
        self.name.chars().take(self.name_chars).collect()
    }

    pub fn role_text(&self) -> String {
        self.current_role().chars().take(self.role_chars).collect()
    }

    fn current_role(&self) -> &'static str {
        self.roles[self.role_index]
    }

    fn name_len(&self) -> usize {
        self.name.chars().count()
    }

    fn role_len(&self) -> usize {
        self.current_role().chars().count()
    }

    /// Milliseconds to wait before the next [`tick`](Self::tick).
    pub fn delay_ms(&self) -> u64 {
        match self.phase {
            Phase::TypingName | Phase::TypingRole => TYPE_INTERVAL_MS,
            Phase::Holding => HOLD_MS,
            Phase::Deleting => DELETE_INTERVAL_MS,
        }
    }

    /// Advances the animation by one step.
    pub fn tick(&mut self) {
        match self.phase {
            Phase::TypingName => {
                self.name_chars += 1;
                if self.name_chars >= self.name_len() {
                    self.phase = Phase::TypingRole;
                }
            }
            Phase::TypingRole => {
                self.role_chars += 1;
                if self.role_chars >= self.role_len() {
                    self.phase = Phase::Holding;
                }
            }
            Phase::Holding => {
                self.phase = Phase::Deleting;
            }
            Phase::Deleting => {
                self.role_chars = self.role_chars.saturating_sub(1);
                if self.role_chars == 0 {
                    self.role_index = (self.role_index + 1) % self.roles.len();
                    self.phase = Phase::TypingRole;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drive(tw: &mut Typewriter, ticks: usize) {
        for _ in 0..ticks {
            tw.tick();
        }
    }

    /// Ticks until the current role is fully typed, then through the hold and
    /// delete phases, leaving the machine ready to type the next role.
    fn complete_one_role_cycle(tw: &mut Typewriter) -> String {
        assert_eq!(tw.phase(), Phase::TypingRole);
        while tw.phase() == Phase::TypingRole {
            tw.tick();
        }
        let typed = tw.role_text();
        assert_eq!(tw.phase(), Phase::Holding);
        tw.tick();
        assert_eq!(tw.phase(), Phase::Deleting);
        while tw.phase() == Phase::Deleting {
            tw.tick();
        }
        assert_eq!(tw.role_text(), "");
        typed
    }

    #[test]
    fn name_types_one_char_per_tick() {
        let mut tw = Typewriter::new("Siddhesh Patil", &["Student"]);
        assert_eq!(tw.name_text(), "");
        assert!(!tw.name_complete());
        tw.tick();
        assert_eq!(tw.name_text(), "S");
        drive(&mut tw, 12);
        assert_eq!(tw.name_text(), "Siddhesh Pati");
        assert!(!tw.name_complete());
        tw.tick();
        assert_eq!(tw.name_text(), "Siddhesh Patil");
        assert!(tw.name_complete());
        assert_eq!(tw.phase(), Phase::TypingRole);
    }

    #[test]
    fn roles_cycle_in_order_with_wraparound() {
        let mut tw = Typewriter::new("Sid", &["First Role", "Second", "Third One"]);
        drive(&mut tw, 3); // finish the name
        assert!(tw.name_complete());

        assert_eq!(complete_one_role_cycle(&mut tw), "First Role");
        assert_eq!(tw.role_index(), 1);
        assert_eq!(complete_one_role_cycle(&mut tw), "Second");
        assert_eq!(tw.role_index(), 2);
        assert_eq!(complete_one_role_cycle(&mut tw), "Third One");
        // wraps back to the first role
        assert_eq!(tw.role_index(), 0);
        assert_eq!(complete_one_role_cycle(&mut tw), "First Role");
    }

    #[test]
    fn single_role_list_still_cycles() {
        let mut tw = Typewriter::new("A", &["Only"]);
        tw.tick();
        for _ in 0..3 {
            assert_eq!(complete_one_role_cycle(&mut tw), "Only");
            assert_eq!(tw.role_index(), 0);
        }
    }

    #[test]
    fn delays_track_the_current_phase() {
        let mut tw = Typewriter::new("Ab", &["x"]);
        assert_eq!(tw.delay_ms(), TYPE_INTERVAL_MS);
        drive(&mut tw, 2); // name done
        assert_eq!(tw.delay_ms(), TYPE_INTERVAL_MS);
        tw.tick(); // "x" typed
        assert_eq!(tw.phase(), Phase::Holding);
        assert_eq!(tw.delay_ms(), HOLD_MS);
        tw.tick();
        assert_eq!(tw.phase(), Phase::Deleting);
        assert_eq!(tw.delay_ms(), DELETE_INTERVAL_MS);
    }

    #[test]
    fn partial_role_text_is_a_prefix() {
        let mut tw = Typewriter::new("S", &["Problem Solver"]);
        tw.tick();
        drive(&mut tw, 7);
        assert_eq!(tw.role_text(), "Problem");
    }
}
