pub const COUNT_DURATION_MS: u32 = 2_000;
pub const COUNT_TICK_MS: u32 = 16;

// an element activates once its top clears the viewport bottom by this much
pub const REVEAL_MARGIN_PX: f64 = 150.0;

pub const HERO_PARALLAX_RATE: f64 = -0.5;

#[derive(Debug, Clone, PartialEq)]
pub struct CounterTween {
    target: u32,
    step: f64,
    current: f64,
    done: bool,
}

impl CounterTween {
    pub fn new(target: u32) -> Self {
        let ticks = (COUNT_DURATION_MS / COUNT_TICK_MS) as f64;
        Self {
            target,
            step: target as f64 / ticks,
            current: 0.0,
            done: false,
        }
    }

    pub fn tick(&mut self) -> u32 {
        if self.done {
            return self.target;
        }
        self.current += self.step;
        if self.current >= self.target as f64 {
            self.done = true;
            return self.target;
        }
        self.current as u32
    }

    pub fn is_done(&self) -> bool {
        self.done
    }
}

pub fn reveal_ready(element_top: f64, viewport_height: f64) -> bool {
    element_top < viewport_height - REVEAL_MARGIN_PX
}

pub fn hero_offset(scroll_y: f64) -> f64 {
    scroll_y * HERO_PARALLAX_RATE
}

pub fn shape_transform(index: usize, scroll_y: f64) -> String {
    let speed = 0.5 + index as f64 * 0.1;
    format!(
        "translateY({}px) rotate({}deg)",
        scroll_y * speed,
        scroll_y * 0.1
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tween_reaches_target_and_stays() {
        let mut tween = CounterTween::new(250);
        let mut last = 0;
        let mut ticks = 0;
        while !tween.is_done() {
            let value = tween.tick();
            assert!(value >= last);
            last = value;
            ticks += 1;
            assert!(ticks <= COUNT_DURATION_MS / COUNT_TICK_MS);
        }
        assert_eq!(last, 250);
        assert_eq!(tween.tick(), 250);
    }

    #[test]
    fn zero_target_finishes_immediately() {
        let mut tween = CounterTween::new(0);
        assert_eq!(tween.tick(), 0);
        assert!(tween.is_done());
    }

    #[test]
    fn reveal_fires_inside_margin() {
        assert!(reveal_ready(500.0, 800.0));
        assert!(!reveal_ready(700.0, 800.0));
        assert!(!reveal_ready(650.0, 800.0));
        assert!(reveal_ready(649.0, 800.0));
    }

    #[test]
    fn shape_transform_scales_with_index() {
        assert_eq!(shape_transform(0, 100.0), "translateY(50px) rotate(10deg)");
        let expected = format!(
            "translateY({}px) rotate({}deg)",
            100.0 * (0.5 + 2.0 * 0.1),
            100.0 * 0.1
        );
        assert_eq!(shape_transform(2, 100.0), expected);
        assert_eq!(hero_offset(100.0), -50.0);
    }
}
