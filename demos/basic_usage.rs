// ============================================================================
// Basic Usage Example
// ============================================================================
//
// Run with `cargo run --example basic_usage --features logging` to see the
// calculator events through tracing.

use std::sync::Arc;
use string_calculator::prelude::*;

fn main() {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== String Calculator Example ===\n");

    let calculator = StringCalculatorBuilder::new()
        .build(Arc::new(LoggingEventHandler))
        .expect("kata configuration is valid");

    let inputs = [
        "",
        "1,2,5",
        "1\n,2,3",
        "//;\n1;3;4",
        "//$,@\n1$2@3",
        "//***\n1***2***3",
        "2,1001",
        "1,k,10",
        "1,-2,-5",
    ];

    for input in inputs {
        match calculator.add(Some(input)) {
            Ok(sum) => println!("  {:?} => {}", input, sum),
            Err(err) => println!("  {:?} => error: {}", input, err),
        }
    }

    println!("\n=== Absent Input ===");
    println!("  None => {:?}", calculator.add(None));

    // Audit trail of a single calculation
    println!("\n=== Recorded Events ===");
    let recorder = Arc::new(RecordingEventHandler::new());
    let audited = StringCalculator::new(CalculatorConfig::kata(), recorder.clone());
    let _ = audited.add(Some("//;\n1;k;2000;4"));

    for event in recorder.events() {
        match event {
            CalculationEvent::DelimitersResolved {
                delimiters, custom, ..
            } => println!("  Delimiters {:?} (custom: {})", delimiters, custom),
            CalculationEvent::TokenDiscarded { token, .. } => {
                println!("  Discarded token {:?}", token)
            }
            CalculationEvent::NumberIgnored { value, .. } => println!("  Ignored {}", value),
            CalculationEvent::SumComputed { sum, .. } => println!("  Sum {}", sum),
            _ => {}
        }
    }

    // Compact error message for end users
    if let Err(err) = string_calculator::add(Some("-1,3,-4")) {
        println!("\n{}", err.short_message());
    }
}
