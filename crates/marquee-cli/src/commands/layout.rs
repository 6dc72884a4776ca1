use anyhow::Result;
use serde::Serialize;

use marquee_core::carousel::layout::{indicator_count, indicator_label, max_index};
use marquee_core::carousel::{Breakpoints, PageSize};
use marquee_core::AppConfig;

/// Paging summary for one viewport width
#[derive(Debug, Serialize)]
pub struct LayoutReport {
    pub viewport_width: u32,
    pub slide_count: usize,
    pub page_size: usize,
    pub max_index: usize,
    pub indicator_count: usize,
    pub labels: Vec<String>,
}

impl LayoutReport {
    pub fn new(config: &AppConfig, width: u32, slides: usize) -> Self {
        let breakpoints = Breakpoints {
            medium_min_width: config.carousel.medium_min_width,
            large_min_width: config.carousel.large_min_width,
        };
        let page = PageSize::for_viewport(width, &breakpoints);
        let count = indicator_count(slides, page);

        Self {
            viewport_width: width,
            slide_count: slides,
            page_size: page.count(),
            max_index: max_index(slides, page),
            indicator_count: count,
            labels: (0..count)
                .map(|position| indicator_label(&config.carousel.indicator_label, position))
                .collect(),
        }
    }
}

pub fn run(config: &AppConfig, width: u32, slides: usize, json: bool) -> Result<()> {
    let report = LayoutReport::new(config, width, slides);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Viewport:   {}px", report.viewport_width);
    println!("Slides:     {}", report.slide_count);
    println!("Page size:  {}", report.page_size);
    println!("Max index:  {}", report.max_index);
    println!("Indicators: {}", report.indicator_count);
    for label in &report.labels {
        println!("  - {}", label);
    }

    Ok(())
}
