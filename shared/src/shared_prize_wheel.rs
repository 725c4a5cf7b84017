use rand::seq::SliceRandom;
use rand::Rng;

use crate::timers::Timers;

/// One wheel segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prize {
    pub text: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
}

pub const SEGMENT_COUNT: usize = 10;

pub static PRIZES: [Prize; SEGMENT_COUNT] = [
    Prize { text: "Peluk Hangat", icon: "🤗", color: "#ff69b4" },
    Prize { text: "Cokelat", icon: "🍫", color: "#ff1493" },
    Prize { text: "Boneka", icon: "🧸", color: "#ffb6c1" },
    Prize { text: "Buket Bunga", icon: "💐", color: "#db7093" },
    Prize { text: "Es Krim", icon: "🍦", color: "#ff85c1" },
    Prize { text: "Voucher Makan", icon: "🍔", color: "#c71585" },
    Prize { text: "Kado Spesial", icon: "🎁", color: "#ff6eb4" },
    Prize { text: "Jalan-Jalan", icon: "✈️", color: "#e75480" },
    Prize { text: "Cium", icon: "😘", color: "#ffc0cb" },
    Prize { text: "Coba Lagi", icon: "🍀", color: "#f49ac2" },
];

pub const SEGMENT_DEGREES: f64 = 360.0 / SEGMENT_COUNT as f64;

/// The only segments a spin can ever land on. Intentional: every other
/// prize has probability zero.
pub const WINNING_INDICES: [usize; 2] = [6, 7];

/// Where the pointer sits, in canvas degrees (0 = 3 o'clock, clockwise).
pub const POINTER_ANGLE: f64 = 270.0;
/// Keeps the stop angle this far from either segment edge.
pub const STOP_MARGIN_DEGREES: f64 = 5.0;
pub const MIN_FULL_SPINS: u32 = 5;
pub const MAX_FULL_SPINS: u32 = 10;
/// Must match the CSS transition declared on the wheel.
pub const SPIN_DURATION_MS: u32 = 5000;

pub fn normalize_degrees(angle: f64) -> f64 {
    angle.rem_euclid(360.0)
}

/// Start and end angle of a segment, in degrees.
pub fn segment_bounds(index: usize) -> (f64, f64) {
    let start = index as f64 * SEGMENT_DEGREES;
    (start, start + SEGMENT_DEGREES)
}

pub fn segment_midpoint(index: usize) -> f64 {
    (index as f64 + 0.5) * SEGMENT_DEGREES
}

/// Segment containing a wheel-frame angle.
pub fn segment_at(angle: f64) -> usize {
    let index = (normalize_degrees(angle) / SEGMENT_DEGREES).floor() as usize;
    index.min(SEGMENT_COUNT - 1)
}

/// Segment resting under the pointer once the wheel is turned by `rotation`
/// degrees clockwise.
pub fn segment_under_pointer(rotation: f64) -> usize {
    segment_at(POINTER_ANGLE - rotation)
}

/// Uniform choice among the winning set.
pub fn pick_winning_index<R: Rng + ?Sized>(rng: &mut R, winning: &[usize]) -> Option<usize> {
    winning.choose(rng).copied()
}

/// A wheel-frame angle strictly inside the target segment.
pub fn pick_stop_angle<R: Rng + ?Sized>(rng: &mut R, target: usize) -> f64 {
    let (start, _) = segment_bounds(target);
    start + rng.gen_range(STOP_MARGIN_DEGREES..=SEGMENT_DEGREES - STOP_MARGIN_DEGREES)
}

/// Drawing operations the wheel renderer needs. Angles are canvas degrees.
pub trait WheelSurface {
    fn fill_segment(&mut self, start_deg: f64, end_deg: f64, color: &str);
    fn draw_icon(&mut self, angle_deg: f64, icon: &str);
}

/// Paints one equal segment per prize, in order, starting at angle 0, with
/// each icon at its segment's midpoint.
pub fn draw_wheel<S: WheelSurface + ?Sized>(surface: &mut S, prizes: &[Prize]) {
    if prizes.is_empty() {
        return;
    }
    let arc = 360.0 / prizes.len() as f64;
    for (i, prize) in prizes.iter().enumerate() {
        let start = i as f64 * arc;
        surface.fill_segment(start, start + arc, prize.color);
    }
    for (i, prize) in prizes.iter().enumerate() {
        surface.draw_icon((i as f64 + 0.5) * arc, prize.icon);
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinPlan {
    pub target_index: usize,
    pub stop_angle: f64,
    pub full_spins: u32,
    pub start_rotation: f64,
    pub final_rotation: f64,
}

impl SpinPlan {
    pub fn prize(&self) -> &'static Prize {
        &PRIZES[self.target_index]
    }

    pub fn total_rotation(&self) -> f64 {
        self.final_rotation - self.start_rotation
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelEvent {
    Reveal,
}

#[derive(Debug, Clone, Default)]
pub struct WheelState {
    current_rotation: f64,
    is_spinning: bool,
    pending: Option<SpinPlan>,
    last_prize: Option<usize>,
}

impl WheelState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cumulative rotation in degrees. Never normalized.
    pub fn current_rotation(&self) -> f64 {
        self.current_rotation
    }

    pub fn is_spinning(&self) -> bool {
        self.is_spinning
    }

    pub fn last_prize(&self) -> Option<&'static Prize> {
        self.last_prize.map(|i| &PRIZES[i])
    }

    pub fn last_prize_index(&self) -> Option<usize> {
        self.last_prize
    }

    /// Starts a spin and schedules its reveal. Returns `None` while a spin
    /// is already in flight.
    pub fn spin<R, T>(&mut self, rng: &mut R, timers: &mut T) -> Option<SpinPlan>
    where
        R: Rng + ?Sized,
        T: Timers<WheelEvent>,
    {
        if self.is_spinning {
            return None;
        }

        let target_index = pick_winning_index(rng, &WINNING_INDICES)?;
        let stop_angle = pick_stop_angle(rng, target_index);
        let full_spins = rng.gen_range(MIN_FULL_SPINS..=MAX_FULL_SPINS);

        // Turn the wheel from where it rests now so the stop angle ends up
        // under the pointer.
        let resting = normalize_degrees(self.current_rotation);
        let alignment = normalize_degrees(POINTER_ANGLE - stop_angle - resting);
        let start_rotation = self.current_rotation;
        let final_rotation = start_rotation + f64::from(full_spins) * 360.0 + alignment;

        let plan = SpinPlan {
            target_index,
            stop_angle,
            full_spins,
            start_rotation,
            final_rotation,
        };

        log::debug!(
            "wheel spin: target {} stop {:.2} spins {}",
            target_index,
            stop_angle,
            full_spins
        );

        self.current_rotation = final_rotation;
        self.is_spinning = true;
        self.last_prize = None;
        self.pending = Some(plan);
        timers.after(SPIN_DURATION_MS, WheelEvent::Reveal);
        Some(plan)
    }

    /// Finishes the spin in flight, returning the prize chosen when it
    /// started.
    pub fn handle(&mut self, event: WheelEvent) -> Option<&'static Prize> {
        match event {
            WheelEvent::Reveal => {
                let plan = self.pending.take()?;
                self.is_spinning = false;
                self.last_prize = Some(plan.target_index);
                log::info!("wheel landed on {}", plan.prize().text);
                Some(plan.prize())
            }
        }
    }
}
