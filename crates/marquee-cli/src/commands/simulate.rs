use anyhow::{anyhow, Result};

use marquee_core::carousel::{
    CarouselController, CarouselEvent, CarouselSettings, HeadlessSurface, ManualTimer,
};
use marquee_core::AppConfig;

/// One replayable step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Event(CarouselEvent),
    /// Fire the pending auto-advance schedule
    Tick,
}

/// Parse a step: `prev`, `next`, `dot:K` (1-based), `resize:W` or `tick`
pub fn parse_step(s: &str) -> Result<Step> {
    let s = s.trim().to_lowercase();
    let (name, arg) = match s.split_once(':') {
        Some((name, arg)) => (name, Some(arg)),
        None => (s.as_str(), None),
    };

    match (name, arg) {
        ("prev" | "previous", None) => Ok(Step::Event(CarouselEvent::Previous)),
        ("next", None) => Ok(Step::Event(CarouselEvent::Next)),
        ("tick", None) => Ok(Step::Tick),
        ("dot", Some(arg)) => {
            let position: usize = arg
                .parse()
                .map_err(|_| anyhow!("Invalid indicator position '{}'", arg))?;
            if position == 0 {
                return Err(anyhow!("Indicator positions start at 1"));
            }
            Ok(Step::Event(CarouselEvent::Indicator(position - 1)))
        }
        ("resize", Some(arg)) => {
            let width: u32 = arg
                .parse()
                .map_err(|_| anyhow!("Invalid viewport width '{}'", arg))?;
            Ok(Step::Event(CarouselEvent::Resize(width)))
        }
        _ => Err(anyhow!(
            "Unknown event '{}' (expected prev, next, dot:K, resize:W or tick)",
            s
        )),
    }
}

type Headless = CarouselController<HeadlessSurface, ManualTimer>;

/// Replay steps and return one state line per step, starting with the initial state
pub fn replay(config: &AppConfig, width: u32, slides: usize, steps: &[Step]) -> Vec<String> {
    let mut carousel = CarouselController::new(
        slides,
        width,
        CarouselSettings::from(&config.carousel),
        HeadlessSurface::new(),
        ManualTimer::new(),
    );

    let mut lines = vec![describe("init", &carousel)];
    for step in steps {
        let name = match step {
            Step::Event(event) => {
                carousel.handle(*event);
                format!("{:?}", event)
            }
            Step::Tick => {
                let generation = carousel.generation();
                if carousel.on_auto_advance(generation) {
                    "Tick".to_string()
                } else {
                    "Tick (auto-advance off)".to_string()
                }
            }
        };
        lines.push(describe(&name, &carousel));
    }

    carousel.shutdown();
    lines
}

fn describe(step: &str, carousel: &Headless) -> String {
    let surface = carousel.surface();
    let dots: String = surface
        .indicators
        .iter()
        .map(|indicator| if indicator.active { '●' } else { '○' })
        .collect();

    format!(
        "{:<24} index={} max={} page={} offset={}px {}",
        step,
        carousel.current_index(),
        carousel.max_index(),
        carousel.page_size().count(),
        surface.offset.unwrap_or(0.0),
        dots
    )
}

pub fn run(config: &AppConfig, width: u32, slides: usize, events: &[String]) -> Result<()> {
    let steps = events
        .iter()
        .map(|event| parse_step(event))
        .collect::<Result<Vec<_>>>()?;

    for line in replay(config, width, slides, &steps) {
        println!("{}", line);
    }

    Ok(())
}
