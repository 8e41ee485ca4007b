use std::fs::File;
use std::time::{Duration, Instant};

use example_display::{DisplayConfig, ExampleDisplay, FadeConfig, FadeEasing, WorkedExample};
use pagedom::{AnimationState, Document, Element};
use simplelog::{Config, LevelFilter, WriteLogger};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Set up file logging
    let log_file = File::create("walkthrough.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let config = DisplayConfig::default().with_fade(FadeConfig::new(250, FadeEasing::EaseOut));
    let display = ExampleDisplay::new(config)?;

    let mut page = Document::new(
        Element::div()
            .id("game")
            .class("game-container")
            .child(Element::button().id("showExampleBtn").class("btn"))
            .child(Element::div().id("exampleBlock").class("example-block").hidden()),
    );
    display.sync_label(&mut page);

    let mut animation = AnimationState::new();
    let start = Instant::now();
    animation.update_at(page.root(), start);

    println!("initial:\n{}\n", page.to_html());

    let examples: [WorkedExample<i64>; 4] = [
        WorkedExample::sum_of(vec![34, -12, 57, -21]),
        WorkedExample::product_of(13, 17),
        WorkedExample::square_of(25),
        WorkedExample::sum_of(Vec::new()),
    ];

    for (i, example) in examples.iter().enumerate() {
        display.show_example(&mut page, example);
        let state = display.toggle(&mut page);

        let now = start + Duration::from_millis(100 * (i as u64 + 1));
        animation.update_at(page.root(), now);

        println!("after toggle {} -> {:?}:", i + 1, state);
        println!("{}\n", page.to_html_at(&animation, now));
    }

    Ok(())
}
