use rand::Rng;
use serde::Serialize;

use crate::shared_prize_wheel::Prize;

pub const HEART_INTERVAL_MS: u32 = 3000;
pub const HEART_LIFETIME_MS: u32 = 15_000;
pub const SPARKLE_COUNT: usize = 20;

const PINKS: [&str; 5] = ["#ff69b4", "#ff1493", "#ffb6c1", "#ffc0cb", "#ffffff"];
const SIDE_PINKS: [&str; 3] = ["#ff69b4", "#ff1493", "#ffb6c1"];

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Origin {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
}

/// Options for one call to the external confetti function. Field names
/// serialize the way that function expects them.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfettiBurst {
    pub particle_count: u32,
    pub spread: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub angle: Option<u32>,
    pub origin: Origin,
    pub colors: Vec<&'static str>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScheduledBurst {
    pub delay_ms: u32,
    pub burst: ConfettiBurst,
}

/// Main burst from the middle, then one from each side. Used on page load,
/// when the secret message opens and when the lock screen goes away.
pub fn celebration_bursts() -> Vec<ScheduledBurst> {
    vec![
        ScheduledBurst {
            delay_ms: 0,
            burst: ConfettiBurst {
                particle_count: 200,
                spread: 100,
                angle: None,
                origin: Origin { x: None, y: Some(0.6) },
                colors: PINKS.to_vec(),
            },
        },
        ScheduledBurst {
            delay_ms: 250,
            burst: ConfettiBurst {
                particle_count: 100,
                spread: 55,
                angle: Some(60),
                origin: Origin { x: Some(0.0), y: None },
                colors: SIDE_PINKS.to_vec(),
            },
        },
        ScheduledBurst {
            delay_ms: 400,
            burst: ConfettiBurst {
                particle_count: 100,
                spread: 55,
                angle: Some(120),
                origin: Origin { x: Some(1.0), y: None },
                colors: SIDE_PINKS.to_vec(),
            },
        },
    ]
}

/// Single burst in the won prize's color.
pub fn prize_burst(prize: &Prize) -> ConfettiBurst {
    ConfettiBurst {
        particle_count: 150,
        spread: 80,
        angle: None,
        origin: Origin { x: None, y: Some(0.6) },
        colors: vec![prize.color, "#ff69b4", "#ffffff"],
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatingHeart {
    pub id: u64,
    pub font_size_px: f64,
    pub alpha: f64,
    pub left_percent: f64,
    pub duration_s: f64,
}

impl FloatingHeart {
    pub fn random<R: Rng + ?Sized>(id: u64, rng: &mut R) -> Self {
        Self {
            id,
            font_size_px: rng.gen_range(15.0..35.0),
            alpha: rng.gen_range(0.3..0.8),
            left_percent: rng.gen_range(0.0..100.0),
            duration_s: rng.gen_range(10.0..15.0),
        }
    }

    pub fn style(&self) -> String {
        format!(
            "position: fixed; font-size: {:.1}px; color: rgba(255, 105, 180, {:.2}); left: {:.2}%; \
             bottom: -50px; z-index: 1; pointer-events: none; animation: floatHeart {:.2}s linear;",
            self.font_size_px, self.alpha, self.left_percent, self.duration_s
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sparkle {
    pub left_percent: f64,
    pub top_percent: f64,
    pub delay_s: f64,
}

impl Sparkle {
    pub fn style(&self) -> String {
        format!(
            "left: {:.2}%; top: {:.2}%; animation-delay: {:.2}s;",
            self.left_percent, self.top_percent, self.delay_s
        )
    }
}

pub fn scatter_sparkles<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<Sparkle> {
    (0..count)
        .map(|_| Sparkle {
            left_percent: rng.gen_range(0.0..100.0),
            top_percent: rng.gen_range(0.0..100.0),
            delay_s: rng.gen_range(0.0..3.0),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared_prize_wheel::PRIZES;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_celebration_sequence() {
        let bursts = celebration_bursts();
        let delays: Vec<u32> = bursts.iter().map(|b| b.delay_ms).collect();
        assert_eq!(delays, vec![0, 250, 400]);
        assert_eq!(bursts[0].burst.particle_count, 200);
        assert_eq!(bursts[1].burst.angle, Some(60));
        assert_eq!(bursts[2].burst.origin.x, Some(1.0));
    }

    #[test]
    fn test_burst_serializes_for_confetti() {
        let bursts = celebration_bursts();
        let json = serde_json::to_value(&bursts[1].burst).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "particleCount": 100,
                "spread": 55,
                "angle": 60,
                "origin": { "x": 0.0 },
                "colors": ["#ff69b4", "#ff1493", "#ffb6c1"],
            })
        );

        let json = serde_json::to_value(prize_burst(&PRIZES[6])).unwrap();
        assert!(json.get("angle").is_none());
        assert_eq!(json["origin"], serde_json::json!({ "y": 0.6 }));
        assert_eq!(json["colors"][0], PRIZES[6].color);
    }

    #[test]
    fn test_random_effects_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(9);
        for id in 0..200 {
            let heart = FloatingHeart::random(id, &mut rng);
            assert!((15.0..35.0).contains(&heart.font_size_px));
            assert!((0.3..0.8).contains(&heart.alpha));
            assert!((10.0..15.0).contains(&heart.duration_s));
            assert!(f64::from(HEART_LIFETIME_MS) / 1000.0 >= heart.duration_s);
        }

        let sparkles = scatter_sparkles(&mut rng, SPARKLE_COUNT);
        assert_eq!(sparkles.len(), 20);
        assert!(sparkles.iter().all(|s| (0.0..3.0).contains(&s.delay_s)));
        assert!(sparkles[0].style().starts_with("left: "));
    }
}
